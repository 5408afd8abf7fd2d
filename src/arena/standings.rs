use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// One simulated episode: `team1` sat in seat 1, `team2` in seat 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub round: usize,
    pub team1: String,
    pub team2: String,
    pub score1: Utility,
    pub score2: Utility,
}

impl Record {
    /// League points earned by each seat in this match.
    pub fn points(&self) -> (u32, u32) {
        score(self.score1, self.score2)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {:>3} {} {:+} v {:+} {}",
            self.round, self.team1, self.score1, self.score2, self.team2
        )
    }
}

/// 3 for the strictly greater return, 1 each on equal returns.
pub fn score(a: Utility, b: Utility) -> (u32, u32) {
    match a.partial_cmp(&b) {
        Some(std::cmp::Ordering::Greater) => (POINTS_WIN, POINTS_LOSS),
        Some(std::cmp::Ordering::Less) => (POINTS_LOSS, POINTS_WIN),
        _ => (POINTS_DRAW, POINTS_DRAW),
    }
}

/// League table and the full results log of one tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Standings {
    ranking: BTreeMap<String, u32>,
    results: Vec<Record>,
}

impl Standings {
    /// Every team starts on zero points.
    pub fn new<I>(teams: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            ranking: teams.into_iter().map(|team| (team, 0)).collect(),
            results: Vec::new(),
        }
    }

    /// Score a match and append it to the log. Each leg counts on its own.
    pub fn record(&mut self, record: Record) {
        let (p1, p2) = record.points();
        *self.ranking.entry(record.team1.clone()).or_default() += p1;
        *self.ranking.entry(record.team2.clone()).or_default() += p2;
        self.results.push(record);
    }

    pub fn ranking(&self) -> &BTreeMap<String, u32> {
        &self.ranking
    }
    pub fn results(&self) -> &[Record] {
        &self.results
    }
    pub fn points(&self, team: &str) -> Option<u32> {
        self.ranking.get(team).copied()
    }

    /// Teams by points descending, ties broken by name.
    pub fn table(&self) -> Vec<(&str, u32)> {
        let mut table = self
            .ranking
            .iter()
            .map(|(team, points)| (team.as_str(), *points))
            .collect::<Vec<_>>();
        table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        table
    }
}

impl std::fmt::Display for Standings {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.ranking.keys().map(|t| t.chars().count()).max().unwrap_or(0).max(4);
        writeln!(f, "┌─────┬─{}─┬────────┐", "─".repeat(width))?;
        writeln!(f, "│   # │ {:<width$} │ Points │", "Team", width = width)?;
        writeln!(f, "├─────┼─{}─┼────────┤", "─".repeat(width))?;
        for (i, (team, points)) in self.table().into_iter().enumerate() {
        writeln!(f, "│ {:>3} │ {:<width$} │ {:>6} │", i + 1, team, points, width = width)?;
        }
        writeln!(f, "├─────┴─{}─┴────────┤", "─".repeat(width))?;
        writeln!(f, "│ Matches {:>w$} │", self.results.len(), w = width + 7)?;
        write!(f, "└───────{}──────────┘", "─".repeat(width))
    }
}
