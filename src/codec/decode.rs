use super::*;
use crate::game::*;
use crate::policy::*;
use crate::*;
use std::collections::HashMap;
use std::path::Path;

/// Read a policy table file back into a tabular policy.
///
/// Every spot of the game must have a row. Cells strictly above zero are
/// kept, everything else reads as `ROUNDING`. Mass on an action that is
/// illegal at its state is dropped with a warning.
pub fn decode<G>(path: &Path) -> anyhow::Result<TabularPolicy<G>>
where
    G: Game,
{
    let sheet = Sheet::read(path)?;
    let table = TabularPolicy::<G>::try_from(&sheet)?;
    log::debug!("decoded {} rows from {}", table.len(), path.display());
    Ok(table)
}

impl<G> TryFrom<&Sheet> for TabularPolicy<G>
where
    G: Game,
{
    type Error = Fault;
    fn try_from(sheet: &Sheet) -> Result<Self, Self::Error> {
        let width = G::actions() + 1;
        if sheet.header().len() != width {
            return Err(Fault::Malformed {
                line: 1,
                reason: format!("{} columns, game has {} actions", sheet.header().len().saturating_sub(1), width - 1),
            });
        }
        let mut index = HashMap::new();
        for (i, row) in sheet.rows().iter().enumerate() {
            let key = row.first().map(|key| key.as_str()).unwrap_or_default();
            if let Some((first, _)) = index.insert(key, (Sheet::line(i), row)) {
                return Err(Fault::Malformed {
                    line: Sheet::line(i),
                    reason: format!("duplicate row [{}], first at line {}", key, first),
                });
            }
        }
        let mut table = Self::new();
        let spots = table.spots().to_vec();
        for (i, spot) in spots.iter().enumerate() {
            let (line, cells) = index
                .get(spot.key())
                .ok_or_else(|| Fault::MissingState(spot.key().to_string()))?;
            let legal = spot.legal();
            let row = cells
                .iter()
                .skip(1)
                .enumerate()
                .map(|(action, cell)| {
                    let p = cell_value(*line, cell)?;
                    if p > 0. && !legal.contains(&action) {
                        log::warn!(
                            "ignoring mass {} on illegal action {} at [{}]",
                            p,
                            action,
                            spot.key()
                        );
                        Ok(ROUNDING)
                    } else if p > 0. {
                        Ok(p)
                    } else {
                        Ok(ROUNDING)
                    }
                })
                .collect::<Result<Vec<_>, Fault>>()?;
            table.assign(i, row)?;
        }
        Ok(table)
    }
}

fn cell_value(line: usize, cell: &str) -> Result<Probability, Fault> {
    match cell.trim() {
        "" => Ok(ROUNDING),
        text => text.parse::<Probability>().map_err(|e| Fault::Malformed {
            line,
            reason: format!("{:?} is not a probability: {}", text, e),
        }),
    }
}
