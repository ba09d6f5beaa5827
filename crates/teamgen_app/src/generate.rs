//! The generation loop.
//!
//! Teams are streamed as they are produced, framed by hand:
//!
//! ```text
//! [
//! <team 1>
//! ,
//! <team 2>
//! ]
//! ```
//!
//! The document is only valid JSON once the closing bracket is written. If
//! the generator fails, whatever was written so far is flushed and left as is.

use std::io::Write;

use teamgen_engine::TeamGenerator;

use crate::cli::GenerationCount;

/// Errors that stop the generation loop.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize team {index}: {source}")]
    Serialize {
        index: u64,
        #[source]
        source: serde_json::Error,
    },

    /// The generator failed producing the team at `index` (1-based).
    #[error("team generation failed on team {index}: {source}")]
    Generator {
        index: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Generate teams into `out` and return how many were written.
///
/// `out` is flushed before returning, including on error.
///
/// # Errors
///
/// Returns [`GenerateError::Generator`] as soon as the generator fails; no
/// further teams are attempted. I/O and serialization failures are returned
/// likewise.
pub fn write_teams<W, G>(
    mut out: W,
    generator: &mut G,
    count: GenerationCount,
) -> Result<u64, GenerateError>
where
    W: Write,
    G: TeamGenerator,
{
    let result = write_framed(&mut out, generator, count);
    let flushed = out.flush();
    let written = result?;
    flushed?;
    Ok(written)
}

fn write_framed<W, G>(out: &mut W, generator: &mut G, count: GenerationCount) -> Result<u64, GenerateError>
where
    W: Write,
    G: TeamGenerator,
{
    writeln!(out, "[")?;
    write_team(out, generator, 1)?;

    let mut index = 1;
    while count.continues_after(index) {
        writeln!(out, ",")?;
        write_team(out, generator, index + 1)?;
        index += 1;
    }

    writeln!(out, "]")?;
    Ok(index)
}

fn write_team<W, G>(out: &mut W, generator: &mut G, index: u64) -> Result<(), GenerateError>
where
    W: Write,
    G: TeamGenerator,
{
    let team = generator
        .generate()
        .map_err(|e| GenerateError::Generator {
            index,
            source: Box::new(e),
        })?;
    serde_json::to_writer(&mut *out, &team)
        .map_err(|source| GenerateError::Serialize { index, source })?;
    writeln!(out)?;
    Ok(())
}
