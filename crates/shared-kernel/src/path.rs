// crates/shared-kernel/src/path.rs
use std::path::{Component, Path, PathBuf};

/// Absolute form of `path` for log output: joined onto the working directory when relative,
/// with `.` components dropped. Symlinks and `..` are left alone.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => return path.to_path_buf(),
        }
    };
    joined.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
