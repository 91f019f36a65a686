use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Create `path` (and parents) with `mode` if it does not exist yet.
/// Existing directories keep their permissions.
pub fn ensure_dir(path: &Path, mode: u32) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))?;
    set_permissions(path, mode)
}

pub fn set_permissions(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        let perm = fs::Permissions::from_mode(mode);
        fs::set_permissions(path, perm)
            .with_context(|| format!("set permissions {:o} on {}", mode, path.display()))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}

/// Write `contents` into a temp file next to its final location.
/// Nothing is visible at the target until the caller persists it.
pub fn stage_file(dir: &Path, contents: &str, mode: u32) -> Result<NamedTempFile> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".credgen-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes()).context("write temp file")?;
    tmp.flush().context("flush temp file")?;

    #[cfg(unix)]
    {
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))
            .context("set permissions on temp file")?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        ensure_dir(&nested, 0o755).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_stage_file_is_not_at_target_until_persisted() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.json");
        let tmp = stage_file(dir.path(), "{}", 0o644).unwrap();
        assert!(!target.exists());
        tmp.persist(&target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
    }

    #[cfg(unix)]
    #[test]
    fn test_stage_file_mode() {
        let dir = TempDir::new().unwrap();
        let tmp = stage_file(dir.path(), "x", 0o644).unwrap();
        let mode = tmp.as_file().metadata().unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
