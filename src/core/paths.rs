//! Output path resolution for the generated artifacts.

use crate::models::config::OutputSection;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub data_file: PathBuf,
    pub snippet_file: PathBuf,
}

impl OutputPaths {
    /// Resolve from the CLI/env override, then the config, then the working directory.
    pub fn resolve(dir_arg: Option<PathBuf>, output: &OutputSection) -> Self {
        let dir = dir_arg
            .or_else(|| output.dir.as_ref().filter(|d| !d.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(dir, output)
    }

    pub fn in_dir(dir: PathBuf, output: &OutputSection) -> Self {
        let data_file = dir.join(&output.data_file);
        let snippet_file = dir.join(&output.snippet_file);
        Self {
            dir,
            data_file,
            snippet_file,
        }
    }
}

impl std::fmt::Display for OutputPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "output@{}", self.dir.display())
    }
}
