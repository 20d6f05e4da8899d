use anyhow::{Context, Result};
use std::io::{self, Read};

pub struct InputReader;

impl InputReader {
    /// Returns the positional text, or all of stdin when it is absent.
    pub fn read(text: Option<String>) -> Result<String> {
        text.map_or_else(Self::read_stdin, Ok)
    }

    fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock())
    }

    /// Reads `reader` to the end, keeping the bytes exactly as given.
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
