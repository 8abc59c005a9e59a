//! End-to-end pipeline tests against a mocked Sleeper API

use serde_json::{json, Value};
use sleeper_recap::{
    commands::{handle_generate_report, resolve_league_id, ErrorResponse, GenerateReportRequest},
    config::{Config, SourceConfig},
    publish::FilesystemPublisher,
    report::{render_narrative, MatchupKind, PhraseContext, PhraseSource},
    sleeper::SleeperClient,
    LeagueId, RecapError, Week, LEAGUE_ID_ENV_VAR,
};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// League `L1`, week 5: two proper matchups, one three-team group, six injured players.
async fn mount_league_l1(server: &MockServer) {
    mount(
        server,
        "/league/L1",
        json!({ "name": "League One", "league_id": "L1", "season": "2025", "settings": { "playoff_week_start": 15 } }),
    )
    .await;

    let rosters: Vec<Value> = (1..=7)
        .map(|r| json!({ "roster_id": r, "owner_id": format!("u{r}") }))
        .collect();
    mount(server, "/league/L1/rosters", Value::Array(rosters)).await;

    let users: Vec<Value> = (1..=7)
        .map(|u| json!({ "user_id": format!("u{u}"), "display_name": format!("Team {u}") }))
        .collect();
    mount(server, "/league/L1/users", Value::Array(users)).await;

    mount(
        server,
        "/league/L1/matchups/5",
        json!([
            { "roster_id": 1, "matchup_id": 1, "points": 120.5, "starters": ["h1"] },
            { "roster_id": 2, "matchup_id": 1, "points": 80.0, "starters": ["h2"] },
            { "roster_id": 3, "matchup_id": 2, "points": 95.0, "starters": [] },
            { "roster_id": 4, "matchup_id": 2, "points": 91.5, "starters": [] },
            { "roster_id": 5, "matchup_id": 3, "points": 70.0, "starters": [] },
            { "roster_id": 6, "matchup_id": 3, "points": 71.0, "starters": [] },
            { "roster_id": 7, "matchup_id": 3, "points": 72.0, "starters": [] }
        ]),
    )
    .await;
    mount(server, "/league/L1/matchups/6", json!([])).await;

    let mut catalog = serde_json::Map::new();
    catalog.insert("h1".into(), json!({ "full_name": "Healthy One", "team": "KC" }));
    catalog.insert(
        "h2".into(),
        json!({ "full_name": "Healthy Two", "injury_status": "Active", "team": "BUF" }),
    );
    for i in 0..6 {
        catalog.insert(
            format!("inj{i}"),
            json!({
                "full_name": format!("Injured {i}"),
                "injury_status": "Questionable",
                "injury_body_part": "Ankle",
                "team": "DAL"
            }),
        );
    }
    mount(server, "/players/nfl", Value::Object(catalog)).await;

    mount(server, "/players/nfl/trending/add", json!([])).await;
    mount(server, "/players/nfl/trending/drop", json!([])).await;
}

fn config_for(server: &MockServer, dir: &TempDir) -> Config {
    Config {
        source: SourceConfig::with_base_url(server.uri()),
        reports_dir: dir.path().to_path_buf(),
        ..Config::default()
    }
}

struct Quiet;

impl PhraseSource for Quiet {
    fn flavor(&mut self, _kind: MatchupKind, _context: &PhraseContext<'_>) -> String {
        String::new()
    }

    fn spotlight(&mut self, _candidates: usize) -> Option<usize> {
        Some(0)
    }
}

#[tokio::test]
async fn test_structured_report_for_mocked_league() {
    let server = MockServer::start().await;
    mount_league_l1(&server).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let response = handle_generate_report(
        GenerateReportRequest {
            league_id: LeagueId::new("L1"),
            week: Week::new(5),
            push: false,
            destination: None,
        },
        &config,
        &FilesystemPublisher::new(&config.reports_dir),
    )
    .await
    .unwrap();

    let report = &response.data.report;
    assert_eq!(report.matchups.len(), 2);
    assert_eq!(report.matchups[0].matchup_type, MatchupKind::Blowout);
    assert_eq!(report.matchups[1].matchup_type, MatchupKind::Close);
    assert_eq!(report.injury_report.featured_injuries.len(), 5);
    assert_eq!(report.injury_report.total_injured_players, 6);
    assert_eq!(report.injury_report.featured_injuries[0].player, "Injured 0");
    assert!(report.next_week_preview.matchups.is_empty());
    assert!(report.waiver_wire_watch.hot_pickups.is_empty());
    assert!(report.waiver_wire_watch.falling_stars.is_empty());
    assert_eq!(report.report_metadata.league_name, "League One");
}

#[tokio::test]
async fn test_push_writes_report_file() {
    let server = MockServer::start().await;
    mount_league_l1(&server).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let response = handle_generate_report(
        GenerateReportRequest {
            league_id: LeagueId::new("L1"),
            week: Week::new(5),
            push: true,
            destination: Some("reports".to_string()),
        },
        &config,
        &FilesystemPublisher::new(&config.reports_dir),
    )
    .await
    .unwrap();

    assert!(response.data.publish.pushed);
    assert_eq!(
        response.data.publish.path.as_deref(),
        Some("reports/League_One_week5.json")
    );

    let written = std::fs::read(dir.path().join("reports").join("League_One_week5.json")).unwrap();
    let parsed: Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(parsed["report_metadata"]["week"], 5);
    assert_eq!(parsed["matchups"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_narrative_for_mocked_league() {
    let server = MockServer::start().await;
    mount_league_l1(&server).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let client = SleeperClient::new(&config.source).unwrap();
    let snapshot = client
        .fetch_snapshot(&LeagueId::new("L1"), Week::new(5))
        .await
        .unwrap();
    assert!(!snapshot.is_degraded());

    let script = render_narrative(&snapshot, Week::new(5), &config.policy, &mut Quiet);
    assert!(script.contains("Team 1 put up 120.50 vs Team 2's 80.00."));
    assert!(script.contains("Projection Obliterator: Healthy One."));
    assert!(!script.contains("Matchup 3:"));
    assert!(script.contains("...and 1 more nursing various ailments."));
    assert!(!script.contains("Looking Ahead"));
    assert!(!script.contains("Waiver Wire Watch"));
}

#[tokio::test]
async fn test_upstream_failure_maps_to_not_found_class() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let err = handle_generate_report(
        GenerateReportRequest {
            league_id: LeagueId::new("L1"),
            week: Week::new(5),
            push: true,
            destination: None,
        },
        &config,
        &FilesystemPublisher::new(&config.reports_dir),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.exit_code(), 3);

    let envelope = serde_json::to_value(ErrorResponse::new(
        &err,
        Some(LeagueId::new("L1")),
        Some(Week::new(5)),
    ))
    .unwrap();
    assert_eq!(
        envelope,
        json!({
            "status": "error",
            "error": "Failed to fetch league data",
            "league_id": "L1",
            "week": 5
        })
    );
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_missing_league_id_is_malformed_input() {
    std::env::remove_var(LEAGUE_ID_ENV_VAR);

    let err = resolve_league_id(None).unwrap_err();
    assert!(matches!(err, RecapError::MissingLeagueId { .. }));
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.exit_code(), 2);
}
