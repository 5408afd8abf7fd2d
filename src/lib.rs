//! Round-robin tournaments between tabular policies.
//!
//! # Module Structure
//!
//! - `game`: Game-tree primitives (Turn, Game, Spot) and the built-in games
//! - `policy`: The policy capability and its tabular / procedural variants
//! - `codec`: Policy table files and tournament report artifacts
//! - `arena`: Episode simulation, contestant registry, round-robin scheduling
pub mod arena;
pub mod codec;
pub mod game;
pub mod policy;

mod fault;
pub use fault::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Terminal returns and match scores.
pub type Utility = f32;
/// Policy cells, chance weights, and sampling distributions.
pub type Probability = f32;
/// Action id, a column index of the policy table (0..num_distinct_actions).
pub type Action = usize;
/// Seat index (0-based; file names are 1-based).
pub type Seat = usize;

// ============================================================================
// TOURNAMENT PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 2;
/// Default number of round-robin rounds.
pub const ROUNDS: usize = 20;
/// Points for a strictly greater return.
pub const POINTS_WIN: u32 = 3;
/// Points awarded to each side on equal returns.
pub const POINTS_DRAW: u32 = 1;
/// Points for a strictly smaller return.
pub const POINTS_LOSS: u32 = 0;

// ============================================================================
// POLICY TABLE FORMAT
// ============================================================================
/// Fill value for table cells that are absent, zero, or negative on decode.
pub const ROUNDING: Probability = 0.0;
/// Row mass this close to 1 is written as-is rather than rescaled.
pub const TOLERANCE: Probability = 1e-6;
/// Joins action ids into a history identifier.
pub const SEPARATOR: &str = ", ";
/// Extension of policy table files.
pub const EXTENSION: &str = "csv";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
/// The episode trace only lands in the file.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
