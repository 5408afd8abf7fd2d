use super::*;
use crate::arena::*;
use anyhow::Context;
use std::path::Path;

pub const RANKING: &str = "ranking.csv";
pub const RESULTS: &str = "results.csv";
pub const SUMMARY: &str = "summary.json";

/// Write the league table, the results log, and a JSON summary into `dir`.
pub fn publish(standings: &Standings, dir: &Path) -> anyhow::Result<()> {
    ranking(standings).write(&dir.join(RANKING))?;
    results(standings).write(&dir.join(RESULTS))?;
    let ref summary = dir.join(SUMMARY);
    let json = serde_json::to_string_pretty(standings)?;
    std::fs::write(summary, json).with_context(|| format!("writing {}", summary.display()))?;
    log::info!("published standings to {}", dir.display());
    Ok(())
}

/// `team,points`, best first.
pub fn ranking(standings: &Standings) -> Sheet {
    let mut sheet = Sheet::new(vec![String::new(), "points".into()]);
    for (team, points) in standings.table() {
        sheet.push(vec![team.to_string(), points.to_string()]);
    }
    sheet
}

/// One row per match in play order, keyed by match index.
pub fn results(standings: &Standings) -> Sheet {
    let mut sheet = Sheet::new(
        ["", "team1", "team2", "score1", "score2"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    for (i, record) in standings.results().iter().enumerate() {
        sheet.push(vec![
            i.to_string(),
            record.team1.clone(),
            record.team2.clone(),
            record.score1.to_string(),
            record.score2.to_string(),
        ]);
    }
    sheet
}
