//! Error table generator
//!
//! Turns the `SIGNON_ERROR_*` declarations of a header into the
//! `GDBusErrorEntry` array that registers the signon error domain:
//!
//! ```text
//! SIGNON_ERROR_UNKNOWN = 1,   =>   { SIGNON_ERROR_UNKNOWN, SIGNOND_UNKNOWN_ERR_NAME },
//! ```
//!
//! The destination is created and its header written before the source is
//! opened. A source that cannot be read leaves a truncated destination behind;
//! the build that invoked us fails on the exit status and nothing is cleaned up.

mod error;
mod scan;
mod template;

pub use error::{GenerateError, StreamError};
pub use scan::{split_lines, ErrorEntry, LinePattern, Lines};
pub use template::{TableTemplate, CONSTANT_PREFIX, FOOTER, HEADER, NAME_PREFIX, NAME_SUFFIX};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, trace};

/// Generate the signon table from `source` into `destination`.
///
/// Returns the number of entries written.
pub fn generate_file(
    source: &Path,
    destination: &Path,
) -> Result<usize, GenerateError> {
    Generator::new(TableTemplate::default())?.generate_file(source, destination)
}

/// Table generator bound to one template
#[derive(Debug, Clone)]
pub struct Generator {
    template: TableTemplate,
    pattern: LinePattern,
}

impl Generator {
    pub fn new(template: TableTemplate) -> Result<Self, GenerateError> {
        let pattern = LinePattern::new(&template.constant_prefix)?;
        Ok(Self { template, pattern })
    }

    pub fn template(&self) -> &TableTemplate {
        &self.template
    }

    /// Entries `text` would produce, in order.
    pub fn scan(
        &self,
        text: &str,
    ) -> Vec<ErrorEntry> {
        split_lines(text)
            .filter_map(|line| self.pattern.scan_line(line))
            .collect()
    }

    /// Whole document for `text`.
    pub fn render(
        &self,
        text: &str,
    ) -> String {
        let mut out = self.template.header.clone();
        for entry in self.scan(text) {
            out.push_str(&self.template.render_entry(&entry));
        }
        out.push_str(&self.template.footer);
        out
    }

    /// Write header, entries and footer. Returns the number of entries.
    pub fn generate<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<usize, StreamError> {
        writer
            .write_all(self.template.header.as_bytes())
            .map_err(StreamError::Write)?;
        let count = self.write_entries(reader, writer)?;
        writer
            .write_all(self.template.footer.as_bytes())
            .map_err(StreamError::Write)?;
        Ok(count)
    }

    /// File-to-file run. The destination is truncated first, then the source
    /// is opened.
    pub fn generate_file(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<usize, GenerateError> {
        debug!("Generating {} from {}", destination.display(), source.display());

        let file = File::create(destination).map_err(|err| GenerateError::CreateDestination {
            path: destination.to_path_buf(),
            source: err,
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.template.header.as_bytes())
            .map_err(|err| StreamError::Write(err).at(source, destination))?;

        let input = File::open(source).map_err(|err| GenerateError::OpenSource {
            path: source.to_path_buf(),
            source: err,
        })?;

        let count = self
            .write_entries(BufReader::new(input), &mut writer)
            .map_err(|err| err.at(source, destination))?;

        writer
            .write_all(self.template.footer.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|err| StreamError::Write(err).at(source, destination))?;

        debug!("Wrote {} entries to {}", count, destination.display());
        Ok(count)
    }

    fn write_entries<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<usize, StreamError> {
        let mut chunk = Vec::new();
        let mut count = 0;

        // A chunk ends at `\n`, so it may still hold several `\r`-terminated lines.
        loop {
            chunk.clear();
            if reader.read_until(b'\n', &mut chunk).map_err(StreamError::Read)? == 0 {
                break;
            }
            let text = std::str::from_utf8(&chunk).map_err(|err| {
                StreamError::Read(io::Error::new(io::ErrorKind::InvalidData, err))
            })?;

            for line in split_lines(text) {
                if let Some(entry) = self.pattern.scan_line(line) {
                    trace!("{}{}", self.template.constant_prefix, entry.suffix);
                    writer
                        .write_all(self.template.render_entry(&entry).as_bytes())
                        .map_err(StreamError::Write)?;
                    count += 1;
                }
            }
        }

        Ok(count)
    }
}
