//! # teamgen
//!
//! Streams randomly generated teams to stdout as a JSON array.
//!
//! ```text
//! teamgen <count> [--root <dir>]
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Load `<root>/config/config.toml`, cloning it from
//!    `config-example.toml` on first run.
//! 2. Load the engine dex and run the engine initializer.
//! 3. Republish the engine capabilities onto the `Tools` handle, silence
//!    engine debug output and install the engine.
//! 4. Generate and stream `count` teams.

mod bootstrap;
mod cli;
mod generate;
mod logging;

use std::io::BufWriter;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use teamgen_config::ConfigLoader;

use cli::{Args, GenerationCount};

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let count = GenerationCount::parse(args.count.as_deref());
    info!(root = %args.root.display(), count = ?count.total(), "teamgen starting");

    let mut context = bootstrap::bootstrap(ConfigLoader::new(args.root.clone()))?;
    info!(
        data = %context.config().engine.data_path.display(),
        team_size = context.config().engine.team_size,
        "bootstrap complete"
    );

    let stdout = std::io::stdout();
    let written = generate::write_teams(BufWriter::new(stdout.lock()), context.tools_mut(), count)?;

    info!(teams = written, "generation complete");
    Ok(())
}
