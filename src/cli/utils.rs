//! Convenience helpers shared by the command runner.

use std::fs;
use std::path::Path;

use wificard::CardError;

/// Create the parent directory of a file target if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<(), CardError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| CardError::io(parent, err))?;
        }
    }
    Ok(())
}

/// Directory name with a single trailing slash, for progress messages.
pub fn display_dir(dir: &Path) -> String {
    let shown = dir.display().to_string();
    if shown.ends_with('/') {
        shown
    } else {
        format!("{}/", shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_dir_adds_one_slash() {
        assert_eq!(display_dir(Path::new("./output")), "./output/");
        assert_eq!(display_dir(Path::new("out/")), "out/");
    }

    #[test]
    fn parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("preview.png");
        ensure_parent_dir(&target).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        ensure_parent_dir(Path::new("bare.png")).unwrap();
    }

    #[test]
    fn blocked_parent_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "not a directory").unwrap();
        let err = ensure_parent_dir(&file.join("sub").join("preview.png")).unwrap_err();
        match err {
            CardError::Io { path, .. } => assert_eq!(path, file.join("sub")),
            other => panic!("expected io error, got {:?}", other),
        }
        assert_eq!(
            ensure_parent_dir(&file.join("preview.png"))
                .unwrap_err()
                .exit_code(),
            1
        );
    }
}
