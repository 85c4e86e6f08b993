//! Raw source loading.

use std::fs;
use std::io::{self, Read};

use ruleset_core::defaults::STDIN_SOURCE;
use tracing::debug;

use crate::error::ConvertError;

/// Read the whole source. `stdin` reads standard input instead of a file.
///
/// Zero-byte input is an error; content without any usable rule is left
/// for the later stages to reject.
pub fn load_source(source: &str) -> Result<Vec<u8>, ConvertError> {
    let content = if source == STDIN_SOURCE {
        read_all(io::stdin().lock())
    } else {
        fs::read(source)
    }
    .map_err(|e| ConvertError::SourceUnreadable {
        path: source.to_string(),
        source: e,
    })?;

    if content.is_empty() {
        return Err(ConvertError::EmptySource {
            path: source.to_string(),
        });
    }
    debug!(source, bytes = content.len(), "source loaded");
    Ok(content)
}

fn read_all(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}
