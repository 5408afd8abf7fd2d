use crate::codec::*;
use crate::game::*;
use crate::policy::*;
use crate::*;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

/// A team and its policy file for each seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Contestant {
    pub team: String,
    pub files: Vec<PathBuf>,
}

/// Contestant files found in one directory, grouped by team.
///
/// Files that do not follow `{team}_p{seat}.csv` are not contestants
/// and are skipped. A team that is missing a seat is only reported by
/// `validate`, so the scan itself never fails on naming.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    dir: PathBuf,
    teams: BTreeMap<String, Vec<Option<PathBuf>>>,
}

impl Registry {
    pub fn scan(dir: &Path) -> anyhow::Result<Self> {
        let mut registry = Self {
            dir: dir.to_path_buf(),
            teams: BTreeMap::new(),
        };
        for entry in std::fs::read_dir(dir).with_context(|| format!("scanning {}", dir.display()))? {
            let path = entry?.path();
            match path.is_file().then(|| Self::parse(&path)).flatten() {
                Some((team, seat)) => registry.insert(team, seat, path),
                None => log::debug!("skipping {}", path.display()),
            }
        }
        log::info!("found {} teams in {}", registry.teams.len(), dir.display());
        Ok(registry)
    }

    /// `ruby_p2.csv` is team `ruby` in seat index 1.
    pub fn parse(path: &Path) -> Option<(String, Seat)> {
        if path.extension()?.to_str()? != EXTENSION {
            return None;
        }
        let (team, seat) = path.file_stem()?.to_str()?.rsplit_once("_p")?;
        let seat = (0..N).find(|s| (s + 1).to_string() == seat)?;
        match team.is_empty() {
            true => None,
            false => Some((team.to_string(), seat)),
        }
    }

    fn insert(&mut self, team: String, seat: Seat, path: PathBuf) {
        self.teams.entry(team).or_insert_with(|| vec![None; N])[seat] = Some(path);
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(|team| team.as_str())
    }

    /// Every team holds every seat, and there is at least one team.
    pub fn validate(&self) -> Result<(), Fault> {
        if self.teams.is_empty() {
            return Err(Fault::NoContestants(self.dir.clone()));
        }
        for (team, files) in self.teams.iter() {
            if let Some(seat) = files.iter().position(|file| file.is_none()) {
                return Err(Fault::IncompleteContestant {
                    team: team.clone(),
                    seat,
                });
            }
        }
        Ok(())
    }

    /// Validated contestants in team-name order.
    pub fn contestants(&self) -> Result<Vec<Contestant>, Fault> {
        self.validate()?;
        Ok(self
            .teams
            .iter()
            .map(|(team, files)| Contestant {
                team: team.clone(),
                files: files.iter().flatten().cloned().collect(),
            })
            .collect())
    }
}

/// Decoded policies for every contestant and seat, loaded once per run.
#[derive(Debug, Clone)]
pub struct Roster<G>
where
    G: Game,
{
    teams: Vec<String>,
    seats: Vec<[TabularPolicy<G>; N]>,
}

impl<G> Roster<G>
where
    G: Game,
{
    /// Teams with one table per seat, in the given order.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, [TabularPolicy<G>; N])>,
    {
        let (teams, seats) = entries.into_iter().unzip();
        Self { teams, seats }
    }

    /// Validate the registry and decode every file before any match is played.
    pub fn load(registry: &Registry) -> anyhow::Result<Self> {
        let mut entries = Vec::new();
        for contestant in registry.contestants()? {
            let policies = contestant
                .files
                .iter()
                .map(|file| decode::<G>(file).with_context(|| format!("team {}", contestant.team)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let seated = policies.len();
            let policies = <[TabularPolicy<G>; N]>::try_from(policies).map_err(|_| {
                Fault::IncompleteContestant {
                    team: contestant.team.clone(),
                    seat: seated.min(N - 1),
                }
            })?;
            entries.push((contestant.team, policies));
        }
        Ok(Self::new(entries))
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }
    pub fn team(&self, i: usize) -> &str {
        &self.teams[i]
    }
    /// Policy of the i-th team for this seat.
    pub fn policy(&self, i: usize, seat: Seat) -> &TabularPolicy<G> {
        &self.seats[i][seat]
    }
}
