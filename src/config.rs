use crate::object_selection::ObjectSelection;
use crate::selection::SelectionCuts;

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analysis configuration as read from a YAML file
///
/// All settings are optional and default to the standard analysis.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Object-level lepton preselection; absent means the input
    /// collections are used as they are
    pub objects: Option<ObjectSelection>,
    /// Selection thresholds
    pub cuts: SelectionCuts,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open configuration file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse configuration file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl AnalysisConfig {
    /// Read a configuration from the YAML file at `path`
    pub fn from_yaml_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Reading analysis configuration from {path:?}");
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_owned(),
            source,
        })?;
        serde_yaml::from_reader(file).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn defaults() {
        let config = AnalysisConfig::default();
        assert!(config.objects.is_none());
        assert_eq!(config.cuts, SelectionCuts::default());
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "objects:\n  muon:\n    min_pt: 6.\ncuts:\n  zz_mass_min: 100."
        )
        .unwrap();
        let config = AnalysisConfig::from_yaml_file(file.path()).unwrap();
        let objects = config.objects.unwrap();
        assert_eq!(objects.muon.min_pt, 6.);
        // fields unset within a partially given cut block fall back
        // to the generic lepton defaults
        assert_eq!(objects.muon.max_abs_eta, 2.5);
        assert_eq!(objects.electron.min_pt, 7.);
        assert_eq!(config.cuts.zz_mass_min, 100.);
        assert_eq!(config.cuts.z1_mass_min, 40.);
    }
}
