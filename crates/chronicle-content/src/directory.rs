//! Scenario documents read from a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chronicle_core::Scenario;

use crate::error::ContentError;
use crate::traits::{parse_scenario, ScenarioSource};

/// Every `*.json` file directly inside `root`, loaded in file-name order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySource { root: root.into() }
    }

    fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ContentError + '_ {
        move |source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn document_paths(&self) -> Result<Vec<PathBuf>, ContentError> {
        let entries = fs::read_dir(&self.root).map_err(Self::io_error(&self.root))?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(Self::io_error(&self.root))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl ScenarioSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn load(&self) -> Result<Vec<Scenario>, ContentError> {
        let mut scenarios = Vec::new();
        for path in self.document_paths()? {
            let json = fs::read_to_string(&path).map_err(Self::io_error(&path))?;
            let scenario = parse_scenario(&path.display().to_string(), &json)?;
            tracing::debug!(scenario = %scenario.id, path = %path.display(), "loaded scenario document");
            scenarios.push(scenario);
        }
        Ok(scenarios)
    }
}
