//! Generator errors

use std::io;
use std::path::{Path, PathBuf};

/// Failure of a file-to-file generation run
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Destination could not be created or truncated
    #[error("cannot create destination '{}'", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source could not be opened
    #[error("cannot open source '{}'", path.display())]
    OpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source failed mid-read (including invalid UTF-8)
    #[error("failed to read source '{}'", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination failed mid-write
    #[error("failed to write destination '{}'", path.display())]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Constant prefix does not produce a usable pattern
    #[error("invalid constant prefix '{prefix}'")]
    Pattern {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure while streaming from a reader into a writer
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("read failed")]
    Read(#[source] io::Error),

    #[error("write failed")]
    Write(#[source] io::Error),
}

impl StreamError {
    /// Attach the file paths the streams were opened from.
    pub fn at(
        self,
        source: &Path,
        destination: &Path,
    ) -> GenerateError {
        match self {
            StreamError::Read(err) => GenerateError::ReadSource {
                path: source.to_path_buf(),
                source: err,
            },
            StreamError::Write(err) => GenerateError::WriteDestination {
                path: destination.to_path_buf(),
                source: err,
            },
        }
    }
}
