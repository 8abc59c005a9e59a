//! On-air style weekly script.

use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use crate::{
    report::{
        featured_injuries, preview_pairings, score_matchups, waiver_moves, MatchupKind,
        ReportPolicy, ScoredMatchup, FEATURED_INJURY_LIMIT, WAIVER_LIMIT,
    },
    sleeper::LeagueSnapshot,
    Week,
};


/// Append one formatted line to the script.
macro_rules! push_line {
    ($out:expr, $($arg:tt)*) => {{
        $out.push_str(&format!($($arg)*));
        $out.push('\n');
    }};
}

/// Returned instead of a script when a core collection is empty.
pub const MISSING_DATA_MESSAGE: &str = "Could not generate report due to missing data.";

/// Next-week pairings mentioned in the preview.
pub const PREVIEW_LIMIT: usize = 3;

const FALLBACK_LEAGUE_NAME: &str = "Your Fantasy League";
const UNKNOWN_STAR: &str = "a mysterious superstar";

const BLOWOUT_PHRASES: &[&str] = &[
    "That's a {margin}-point beatdown.",
    "A monumental {margin}-point victory!",
    "A {margin}-point shellacking!",
];

const CLOSE_PHRASES: &[&str] = &["Phew! That was close.", "A real cliffhanger!"];

const STANDARD_PHRASES: &[&str] = &[
    "A solid win for {winner}.",
    "{winner} takes care of business by {margin} points.",
];

const BENCH_FILLER: &str = "Nobody in the starting lineup grabbed the headlines this week.";

/// What a flavor line may refer to.
#[derive(Debug, Clone, Copy)]
pub struct PhraseContext<'a> {
    /// `None` on a tie with no winner.
    pub winner: Option<&'a str>,
    pub margin: f64,
}

/// Source of the script's variable wording.
pub trait PhraseSource {
    /// One flavor sentence for a matchup of the given kind.
    fn flavor(&mut self, kind: MatchupKind, context: &PhraseContext<'_>) -> String;

    /// Index of the starter to spotlight out of `candidates`, or `None` to skip.
    fn spotlight(&mut self, candidates: usize) -> Option<usize>;
}

/// Picks phrases and spotlight players at random. Output differs from run to run.
pub struct RandomPhrases<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomPhrases<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPhrases<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPhrases<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PhraseSource for RandomPhrases<R> {
    fn flavor(&mut self, kind: MatchupKind, context: &PhraseContext<'_>) -> String {
        let template = phrase_pool(kind)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        fill(template, context)
    }

    fn spotlight(&mut self, candidates: usize) -> Option<usize> {
        (candidates > 0).then(|| self.rng.gen_range(0..candidates))
    }
}

pub fn phrase_pool(kind: MatchupKind) -> &'static [&'static str] {
    match kind {
        MatchupKind::Blowout => BLOWOUT_PHRASES,
        MatchupKind::Close => CLOSE_PHRASES,
        MatchupKind::Standard => STANDARD_PHRASES,
    }
}

/// Substitute `{margin}` (two decimals) and `{winner}` in a phrase template.
pub fn fill(template: &str, context: &PhraseContext<'_>) -> String {
    template
        .replace("{margin}", &format!("{:.2}", context.margin))
        .replace("{winner}", context.winner.unwrap_or("nobody"))
}

/// Render the weekly script, or [`MISSING_DATA_MESSAGE`] when the snapshot lacks core data.
pub fn render_narrative<P>(
    snapshot: &LeagueSnapshot,
    week: Week,
    policy: &ReportPolicy,
    phrases: &mut P,
) -> String
where
    P: PhraseSource + ?Sized,
{
    if snapshot.missing_core_data().is_some() {
        return MISSING_DATA_MESSAGE.to_string();
    }

    let mut out = String::new();
    push_line!(
        out,
        "Welcome back, fantasy fanatics! Week {week} is in the books. Let's dive in."
    );

    for matchup in score_matchups(snapshot, policy) {
        write_matchup(&mut out, snapshot, &matchup, phrases);
    }

    write_injuries(&mut out, snapshot);
    write_preview(&mut out, snapshot, week);
    write_waivers(&mut out, snapshot);

    let league = snapshot.league_name().unwrap_or(FALLBACK_LEAGUE_NAME);
    push_line!(out, "\nThat's your Week {week} wrap-up from {league}.");
    out
}

fn write_matchup<P>(out: &mut String, snapshot: &LeagueSnapshot, m: &ScoredMatchup<'_>, phrases: &mut P)
where
    P: PhraseSource + ?Sized,
{
    push_line!(out, "\nMatchup {}:", m.matchup_id);
    push_line!(
        out,
        "  {} put up {:.2} vs {}'s {:.2}.",
        m.team1.name, m.team1.points, m.team2.name, m.team2.points
    );

    let context = PhraseContext {
        winner: m.winner().map(|w| w.name.as_str()),
        margin: m.margin,
    };
    push_line!(out, "  {}", phrases.flavor(m.kind, &context));

    let pool = m.spotlight_pool();
    match phrases.spotlight(pool.len()).and_then(|i| pool.get(i)) {
        Some(id) => {
            let name = snapshot.index.name(id).unwrap_or(UNKNOWN_STAR);
            push_line!(out, "  🔥 Projection Obliterator: {name}.");
        }
        None => {
            push_line!(out, "  {BENCH_FILLER}");
        }
    }
}

fn write_injuries(out: &mut String, snapshot: &LeagueSnapshot) {
    push_line!(out, "\n--- Injury Report ---");

    let featured = featured_injuries(&snapshot.index, FEATURED_INJURY_LIMIT);
    if featured.is_empty() {
        push_line!(out, "  No significant injuries reported.");
        return;
    }

    for injury in &featured {
        push_line!(
            out,
            "  {} - {} ({}).",
            injury.full_name.as_deref().unwrap_or("Player"),
            injury.injury_status,
            injury.injury_body_part.as_deref().unwrap_or("undisclosed"),
        );
    }

    let extra = snapshot.index.injured_count().saturating_sub(featured.len());
    if extra > 0 {
        push_line!(out, "  ...and {extra} more nursing various ailments.");
    }
}

fn write_preview(out: &mut String, snapshot: &LeagueSnapshot, week: Week) {
    if snapshot.next_matchups.is_empty() {
        return;
    }

    push_line!(out, "\n--- Looking Ahead: Week {} Preview ---", week.next());
    for pairing in preview_pairings(snapshot).into_iter().take(PREVIEW_LIMIT) {
        push_line!(out, "  {} vs {}", pairing.team1, pairing.team2);
    }
}

fn write_waivers(out: &mut String, snapshot: &LeagueSnapshot) {
    if snapshot.trending_adds.is_empty() && snapshot.trending_drops.is_empty() {
        return;
    }

    push_line!(out, "\n--- Waiver Wire Watch ---");
    let sections = [
        ("Hot Pickups", &snapshot.trending_adds),
        ("Falling Stars", &snapshot.trending_drops),
    ];
    for (label, list) in sections {
        let names: Vec<&str> = waiver_moves(list, &snapshot.index, WAIVER_LIMIT)
            .into_iter()
            .map(|m| m.player)
            .collect();
        if !names.is_empty() {
            push_line!(out, "  {label}: {}", names.join(", "));
        }
    }
}
