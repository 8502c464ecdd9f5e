use crate::converter::EventRecord;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("Failed to open event file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum EventReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse event record at {path:?}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
}

/// Reader for a single event file
///
/// Event files hold one JSON event record per line; blank lines are
/// ignored.
pub struct FileReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line: usize,
}

impl FileReader {
    /// Construct a reader for the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, CreateError> {
        let path = path.as_ref().to_owned();
        debug!("Reading events from {path:?}");
        let file = File::open(&path).map_err(|source| CreateError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line: 0,
        })
    }
}

impl Iterator for FileReader {
    type Item = Result<EventRecord, EventReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;
            match line {
                Err(err) => return Some(Err(err.into())),
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let record = serde_json::from_str(&line).map_err(
                        |source| EventReadError::Parse {
                            path: self.path.clone(),
                            line: self.line,
                            source,
                        },
                    );
                    return Some(record);
                }
            }
        }
    }
}

/// Reader spanning one or more event files
///
/// Events are read from the files in the order given.
pub struct CombinedReader {
    readers: Vec<FileReader>,
    current: usize,
}

impl CombinedReader {
    /// Construct a reader for the given files
    pub fn from_files<I, P>(files: I) -> Result<Self, CreateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let readers: Result<Vec<_>, _> =
            files.into_iter().map(FileReader::new).collect();
        Ok(Self {
            readers: readers?,
            current: 0,
        })
    }
}

impl Iterator for CombinedReader {
    type Item = Result<EventRecord, EventReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current < self.readers.len() {
            if let Some(item) = self.readers[self.current].next() {
                return Some(item);
            }
            self.current += 1;
        }
        None
    }
}
