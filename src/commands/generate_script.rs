//! Narrative script command

use tracing::info;

use crate::{
    config::Config,
    report::{render_narrative, PhraseSource},
    sleeper::SleeperClient,
    LeagueId, Result, Week,
};

/// Fetch the league and render its weekly script.
///
/// A league without core data still yields text: the missing-data message.
pub async fn handle_generate_script<P>(
    league_id: &LeagueId,
    week: Week,
    config: &Config,
    phrases: &mut P,
) -> Result<String>
where
    P: PhraseSource + ?Sized,
{
    let client = SleeperClient::new(&config.source)?;
    let snapshot = client.fetch_snapshot(league_id, week).await?;
    let script = render_narrative(&snapshot, week, &config.policy, phrases);

    info!(%league_id, %week, chars = script.len(), "script rendered");
    Ok(script)
}
