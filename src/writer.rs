use crate::observables::EventSummary;
use crate::traits::WriteSummaries;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use derive_builder::Builder;
use log::info;
use strum::Display;
use thiserror::Error;

/// Supported output formats
#[derive(
    Copy, Clone, Debug, Default, Display, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON record per line
    #[default]
    Json,
    /// A YAML document per record
    Yaml,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create output file {path:?}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write JSON record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write YAML record: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Writer for per-event analysis records
#[derive(Debug, Builder)]
pub struct FileWriter {
    filename: PathBuf,
    #[builder(default)]
    format: OutputFormat,
}

impl WriteSummaries for FileWriter {
    type Error = WriteError;

    fn write(
        &mut self,
        summaries: &[EventSummary],
    ) -> Result<(), Self::Error> {
        info!(
            "Writing {} records to {:?} ({})",
            summaries.len(),
            self.filename,
            self.format
        );
        let out =
            File::create(&self.filename).map_err(|source| {
                WriteError::Create {
                    path: self.filename.clone(),
                    source,
                }
            })?;
        let mut out = BufWriter::new(out);
        for summary in summaries {
            match self.format {
                OutputFormat::Json => {
                    serde_json::to_writer(&mut out, summary)?;
                    out.write_all(b"\n")?;
                }
                OutputFormat::Yaml => {
                    out.write_all(b"---\n")?;
                    serde_yaml::to_writer(&mut out, summary)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::observables::EMPTY_FLOAT;
    use crate::selection::SelectionResult;

    use std::io::{BufRead, BufReader};

    fn summary(id: usize) -> EventSummary {
        EventSummary {
            id,
            weight: 1.,
            n_electron: 2,
            n_muon: 1,
            m4l: EMPTY_FLOAT,
            mz1: EMPTY_FLOAT,
            mz2: EMPTY_FLOAT,
            mzz: EMPTY_FLOAT,
            categories: vec![Category::Inclusive],
            steps: SelectionResult::default(),
            accept: false,
        }
    }

    #[test]
    fn json_round_trip() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut writer = FileWriterBuilder::default()
            .filename(file.path().to_owned())
            .build()
            .unwrap();
        let summaries = vec![summary(0), summary(1)];
        writer.write(&summaries).unwrap();

        let lines = BufReader::new(File::open(file.path()).unwrap()).lines();
        let read: Vec<EventSummary> = lines
            .map(|l| serde_json::from_str(&l.unwrap()).unwrap())
            .collect();
        assert_eq!(read, summaries);
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }
}
