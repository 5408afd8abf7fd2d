use super::*;
use crate::game::*;
use crate::policy::*;
use std::path::Path;

/// Freeze a policy and write it as a policy table file.
///
/// One header row (empty corner, then action ids in increasing order) and
/// one row per spot keyed by its state identifier. Overwrites `path`.
pub fn encode<G, P>(policy: &P, path: &Path) -> anyhow::Result<()>
where
    G: Game,
    P: Policy<G> + ?Sized,
{
    let table = TabularPolicy::<G>::from_policy(policy);
    Sheet::from(&table).write(path)?;
    log::debug!("encoded {} rows into {}", table.len(), path.display());
    Ok(())
}

impl<G> From<&TabularPolicy<G>> for Sheet
where
    G: Game,
{
    fn from(table: &TabularPolicy<G>) -> Self {
        let mut sheet = Sheet::new(
            std::iter::once(String::new())
                .chain((0..G::actions()).map(|a| a.to_string()))
                .collect(),
        );
        for (spot, row) in table.rows() {
            sheet.push(
                std::iter::once(spot.key().to_string())
                    .chain(row.iter().map(|p| p.to_string()))
                    .collect(),
            );
        }
        sheet
    }
}
