use std::{fs, fs::File, io::{BufWriter, Write}, path::Path};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create `dir` and any missing parents.
    pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<()> {
        fs::create_dir_all(dir.as_ref())
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        if let Err(err) = Self::fill_and_swap(file, &tmp, path, data) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn fill_and_swap(file: File, tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);
        fs::rename(tmp, path)
    }
}
