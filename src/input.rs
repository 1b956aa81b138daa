//! Resolving the raw input text for a generation

use std::io::Read;
use std::path::Path;
use log::debug;

/// Pick the input source: inline text, then file, then `reader`.
///
/// Text read from `reader` has its trailing newlines stripped so a piped
/// topic does not carry the shell's line ending into the prompt.
pub fn read_input<R: Read>(
  text: Option<&str>
, file: Option<&Path>
, mut reader: R
) -> Result<String, crate::error::Error>
{   if let Some(text) = text
    {   return Ok(text.to_string());
    }

    if let Some(path) = file
    {   debug!("Reading input from {}", path.display());
        return std::fs::read_to_string(path).map_err(|e| {
          crate::error::Error::Other(
            format!("Failed to read {}: {}", path.display(), e)
          )
        });
    }

    let mut buf = String::new();
    reader
      .read_to_string(&mut buf)
      .map_err(|e| {
        crate::error::Error::Other(
          format!("Failed to read stdin: {}", e)
        )
      })?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}
