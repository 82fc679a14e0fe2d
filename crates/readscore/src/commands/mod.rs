//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod classify;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked via metadata before the file is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read all of `reader`, failing once more than `max_bytes` have arrived.
///
/// Stdin has no metadata to preflight, so the read itself is capped at one
/// byte past the limit. The size check runs on raw bytes before UTF-8
/// decoding, since the cap can split a multi-byte character.
pub fn read_input_stream<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            if bytes.len() > max {
                return Err(readscore_core::AnalysisError::InputTooLarge {
                    size: bytes.len(),
                    limit: max,
                })
                .context("stdin exceeds the input limit");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
        }
    }
    String::from_utf8(bytes).context("stdin is not valid UTF-8")
}
