use std::fs;
use tempfile::TempDir;
use toggle_fs::io;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.yaml");

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.yaml");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    io::write_text(&temp.path().join("target.yaml"), "content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();

    assert!(
        leftovers.is_empty(),
        "No temp files should remain after successful write, found: {:?}",
        leftovers.iter().map(|e| e.file_name()).collect::<Vec<_>>()
    );
}

#[test]
fn test_write_over_directory_fails_and_cleans_up() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("occupied");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("inner"), "x").unwrap();

    let result = io::write_text(&target, "content");

    assert!(matches!(result, Err(toggle_fs::Error::Io { .. })));
    assert!(target.is_dir());
    let leftovers = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.yaml");
    fs::write(&path, "hello").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "hello");
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(&temp.path().join("missing.yaml"));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[test]
    fn test_write_atomic_keeps_permissions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.yaml");
        fs::write(&path, "original").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        io::write_text(&path, "updated").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_atomic_writes_through_symlink() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("shared.yaml");
        let link = temp.path().join(".gitlab-ci.yml");
        fs::write(&real, "original").unwrap();
        symlink(&real, &link).unwrap();

        io::write_text(&link, "updated").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "updated");
        assert_eq!(fs::read_to_string(&link).unwrap(), "updated");
    }
}
