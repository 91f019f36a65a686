//! Writing both artifacts of one `CredentialSet`.
//!
//! Both are rendered before anything touches the disk, and each is staged as
//! a temp file in its target's directory before either is persisted, so a
//! failure never leaves a fresh document next to a stale snippet.

use crate::constants;
use crate::core::export;
use crate::core::paths::OutputPaths;
use crate::models::credential::CredentialSet;
use crate::util::fs as credgen_fs;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// Rendered bytes of both artifacts.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub data: String,
    pub snippet: String,
}

pub fn render(set: &CredentialSet) -> Result<Rendered> {
    let data = export::serialize_data(set).context("serialize credentials document")?;
    let snippet = export::serialize_client_snippet(set).context("render client snippet")?;
    Ok(Rendered { data, snippet })
}

pub fn write_artifacts(paths: &OutputPaths, set: &CredentialSet) -> Result<()> {
    let rendered = render(set)?;

    let data_tmp = stage_next_to(&paths.data_file, &rendered.data)?;
    let snippet_tmp = stage_next_to(&paths.snippet_file, &rendered.snippet)?;

    data_tmp
        .persist(&paths.data_file)
        .map_err(|err| anyhow::anyhow!("persist {}: {}", paths.data_file.display(), err))?;
    snippet_tmp
        .persist(&paths.snippet_file)
        .map_err(|err| anyhow::anyhow!("persist {}: {}", paths.snippet_file.display(), err))?;

    tracing::info!(
        data = %paths.data_file.display(),
        snippet = %paths.snippet_file.display(),
        users = set.len(),
        "wrote credential artifacts"
    );
    Ok(())
}

/// Stage `contents` in the target's own directory, so the final persist is
/// a same-directory rename.
fn stage_next_to(target: &Path, contents: &str) -> Result<NamedTempFile> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    credgen_fs::ensure_dir(parent, constants::OUTPUT_DIR_MODE)?;
    credgen_fs::stage_file(parent, contents, constants::ARTIFACT_FILE_MODE)
}

/// Read a previously written data document.
pub fn read_back(data_path: &Path) -> Result<CredentialSet> {
    let text = fs::read_to_string(data_path)
        .with_context(|| format!("read {}", data_path.display()))?;
    export::parse_data(&text).with_context(|| format!("parse {}", data_path.display()))
}

pub fn read_snippet(snippet_path: &Path) -> Result<export::SnippetData> {
    let text = fs::read_to_string(snippet_path)
        .with_context(|| format!("read {}", snippet_path.display()))?;
    export::read_client_snippet(&text).with_context(|| format!("parse {}", snippet_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::preset_entries;
    use crate::core::deriver::build_set;
    use crate::core::salt::Salt;
    use crate::models::config::{DefaultsSection, OutputSection};
    use tempfile::TempDir;

    fn default_set() -> CredentialSet {
        let defaults = DefaultsSection::default();
        let entries = preset_entries(&defaults).unwrap();
        build_set(Salt::from_existing(defaults.salt.as_str()).unwrap(), &entries)
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::in_dir(dir.path().join("out"), &OutputSection::default());
        let set = default_set();
        write_artifacts(&paths, &set).unwrap();

        assert!(paths.data_file.is_file());
        assert!(paths.snippet_file.is_file());
        let back = read_back(&paths.data_file).unwrap();
        assert_eq!(back, set);
        let snippet = read_snippet(&paths.snippet_file).unwrap();
        assert!(export::check_consistency(&back, &snippet).is_empty());
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::in_dir(dir.path().to_path_buf(), &OutputSection::default());
        write_artifacts(&paths, &default_set()).unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| !n.starts_with(".credgen-")));
    }

    #[test]
    fn test_overwrite_replaces_previous_run() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::in_dir(dir.path().to_path_buf(), &OutputSection::default());
        write_artifacts(&paths, &default_set()).unwrap();
        let fresh = build_set(Salt::generate().unwrap(), &[]);
        write_artifacts(&paths, &fresh).unwrap();
        let back = read_back(&paths.data_file).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.salt(), fresh.salt());
    }

    #[test]
    fn test_nested_artifact_paths() {
        let dir = TempDir::new().unwrap();
        let output = OutputSection {
            dir: None,
            data_file: "creds.json".into(),
            snippet_file: "js/config.js".into(),
        };
        let paths = OutputPaths::in_dir(dir.path().to_path_buf(), &output);
        let set = default_set();
        write_artifacts(&paths, &set).unwrap();

        assert!(paths.data_file.is_file());
        assert!(paths.snippet_file.is_file());
        let snippet = read_snippet(&paths.snippet_file).unwrap();
        assert!(export::check_consistency(&read_back(&paths.data_file).unwrap(), &snippet).is_empty());
        let leftovers = fs::read_dir(dir.path().join("js"))
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .starts_with(".credgen-")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_failed_staging_writes_nothing() {
        let dir = TempDir::new().unwrap();
        // A regular file where the snippet's directory should be.
        fs::write(dir.path().join("js"), "not a directory").unwrap();
        let output = OutputSection {
            dir: None,
            data_file: "creds.json".into(),
            snippet_file: "js/config.js".into(),
        };
        let paths = OutputPaths::in_dir(dir.path().to_path_buf(), &output);
        assert!(write_artifacts(&paths, &default_set()).is_err());
        assert!(!paths.data_file.exists());
    }
}
