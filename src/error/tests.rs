//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod recap_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let recap_error = RecapError::from(json_error);

        match recap_error {
            RecapError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let recap_error = RecapError::from(io_error);

        match recap_error {
            RecapError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");
        let recap_error = RecapError::from(anyhow_error);

        match recap_error {
            RecapError::Internal { message } => {
                assert!(message.contains("Test anyhow error message"));
            }
            _ => panic!("Expected Internal error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = RecapError::MissingLeagueId {
            env_var: "SLEEPER_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("SLEEPER_LEAGUE_ID"));
    }

    #[test]
    fn test_source_unavailable_display() {
        let error = RecapError::SourceUnavailable {
            endpoint: "league/123/rosters".to_string(),
            reason: "HTTP status 500".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("league/123/rosters"));
        assert!(error_string.contains("HTTP status 500"));
    }

    #[test]
    fn test_classification() {
        let source = RecapError::SourceUnavailable {
            endpoint: "players/nfl".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(source.class(), ErrorClass::SourceUnavailable);
        assert_eq!(source.status_code(), 404);
        assert_eq!(source.exit_code(), 3);

        let empty = RecapError::InsufficientData { missing: "matchups" };
        assert_eq!(empty.class(), ErrorClass::SourceUnavailable);

        let missing = RecapError::MissingLeagueId {
            env_var: "SLEEPER_LEAGUE_ID".to_string(),
        };
        assert_eq!(missing.class(), ErrorClass::MalformedInput);
        assert_eq!(missing.status_code(), 400);
        assert_eq!(missing.exit_code(), 2);

        let week = RecapError::InvalidWeek {
            value: "zero".to_string(),
        };
        assert_eq!(week.class(), ErrorClass::MalformedInput);

        let io_error = RecapError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert_eq!(io_error.class(), ErrorClass::InternalFailure);
        assert_eq!(io_error.status_code(), 500);
        assert_eq!(io_error.exit_code(), 1);
    }

    #[test]
    fn test_public_message_hides_internal_details() {
        let error = RecapError::Internal {
            message: "secret stack detail".to_string(),
        };
        assert_eq!(error.public_message(), "Internal server error");

        let error = RecapError::SourceUnavailable {
            endpoint: "league/1".to_string(),
            reason: "connection refused at 10.0.0.1".to_string(),
        };
        assert!(!error.public_message().contains("10.0.0.1"));

        let error = RecapError::MissingLeagueId {
            env_var: "SLEEPER_LEAGUE_ID".to_string(),
        };
        assert!(error.public_message().contains("League ID not provided"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let recap_error = RecapError::from(io_error);

        let error_trait: &dyn std::error::Error = &recap_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(RecapError::InsufficientData { missing: "users" })
        }

        match test_function().unwrap_err() {
            RecapError::InsufficientData { missing } => assert_eq!(missing, "users"),
            _ => panic!("Expected InsufficientData error"),
        }
    }
}
