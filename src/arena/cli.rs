use super::*;
use crate::codec::*;
use crate::game::*;
use crate::policy::*;
use crate::*;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Run a round-robin tournament between policy files")]
    Run {
        #[arg(required = true)]
        game: String,
        #[arg(required = true)]
        policies: PathBuf,
        #[arg(required = true)]
        output: PathBuf,
        #[arg(long, default_value_t = ROUNDS)]
        rounds: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Write the uniform random policy table of a game", alias = "uniform")]
    Export {
        #[arg(required = true)]
        game: String,
        #[arg(required = true)]
        file: PathBuf,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Run {
                game,
                policies,
                output,
                rounds,
                seed,
            } => {
                for dir in [&policies, &output] {
                    if !dir.is_dir() {
                        anyhow::bail!("{} is not a directory", dir.display());
                    }
                }
                let seed = seed.unwrap_or_else(rand::random);
                log::info!("seed {}", seed);
                let ref mut rng = SmallRng::seed_from_u64(seed);
                let tournament = Tournament::new(rounds);
                let standings = match game.parse::<Catalog>()? {
                    Catalog::Kuhn => tournament.run::<Kuhn, _>(&policies, rng)?,
                    Catalog::Rps => tournament.run::<Rps, _>(&policies, rng)?,
                };
                publish(&standings, &output)?;
                println!("{}", standings);
                Ok(())
            }
            Self::Export { game, file } => match game.parse::<Catalog>()? {
                Catalog::Kuhn => export::<Kuhn>(&file),
                Catalog::Rps => export::<Rps>(&file),
            },
        }
    }
}

fn export<G>(file: &Path) -> anyhow::Result<()>
where
    G: Game,
{
    encode::<G, _>(&Uniform, file)?;
    log::info!("wrote uniform policy to {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        Command::try_parse_from(std::iter::once("arena").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_run_defaults() {
        match command(&["run", "kuhn_poker", "policies", "out"]) {
            Command::Run { rounds, seed, .. } => {
                assert_eq!(rounds, ROUNDS);
                assert_eq!(seed, None);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn export_then_run() {
        let policies = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for name in ["rock_p1.csv", "rock_p2.csv", "dice_p1.csv", "dice_p2.csv"] {
            let file = policies.path().join(name);
            command(&["export", "rps", file.to_str().unwrap()]).run().unwrap();
        }
        command(&[
            "run",
            "rps",
            policies.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
            "--rounds",
            "2",
            "--seed",
            "3",
        ])
        .run()
        .unwrap();
        let results = Sheet::read(&output.path().join(RESULTS)).unwrap();
        assert_eq!(results.rows().len(), 4);
        assert!(output.path().join(RANKING).exists());
        assert!(output.path().join(SUMMARY).exists());
    }

    #[test]
    fn unknown_game_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.csv");
        let error = command(&["export", "chess", file.to_str().unwrap()])
            .run()
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<Fault>(),
            Some(&Fault::UnknownGame("chess".into()))
        );
    }
}
