//! Tournament Binary
//!
//! Plays round-robin leagues between policy table files and exports
//! uniform tables to seed new contestants.

use clap::Parser;
use roboarena::*;

fn main() -> anyhow::Result<()> {
    log()?;
    arena::Command::parse().run()
}
