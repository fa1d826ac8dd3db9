//! Size-rotated append-only file.
//!
//! Trace lines are appended to one active file. When it grows past the
//! configured size the active file becomes backup `.1`, older backups shift up
//! by one, and the oldest beyond the retention count is deleted:
//!
//! ```text
//! bookcase-otlp.json      (active)
//! bookcase-otlp.1.json    (newest backup)
//! bookcase-otlp.2.json
//! bookcase-otlp.3.json    (oldest kept)
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Rotation thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size in bytes above which the active file is rotated before a write.
    pub max_bytes: u64,
    /// Number of rotated backups kept next to the active file.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Append-only line writer with size-based rotation.
///
/// The file handle opens lazily on the first write and is guarded by a mutex,
/// so the writer can sit behind a `&self` exporter.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when rotating, opening or writing fails, or when
    /// the lock was poisoned by a panicking writer.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    /// Path of backup number `index` (1 is the newest).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("trace");
        let name = match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{stem}.{index}.{ext}"),
            None => format!("{stem}.{index}"),
        };
        self.path.with_file_name(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn small(dir: &Path, max_backups: usize) -> RotatingFile {
        RotatingFile::new(
            dir.join("trace.json"),
            RotationPolicy {
                max_bytes: 8,
                max_backups,
            },
        )
    }

    #[test]
    fn appends_lines_without_rotating_below_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"), RotationPolicy::default());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(dir.path().join("trace.json")).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
        assert!(!file.backup_path(1).exists());
    }

    #[test]
    fn rotation_shifts_backups_and_drops_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let file = small(dir.path(), 2);

        for line in ["first-line", "second-line", "third-line", "fourth-line"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(file.backup_path(1), dir.path().join("trace.1.json"));
        assert_eq!(fs::read_to_string(dir.path().join("trace.json")).unwrap(), "fourth-line\n");
        assert_eq!(fs::read_to_string(file.backup_path(1)).unwrap(), "third-line\n");
        assert_eq!(fs::read_to_string(file.backup_path(2)).unwrap(), "second-line\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = small(dir.path(), 0);

        file.append_line("first-line").unwrap();
        file.append_line("second-line").unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("trace.json")).unwrap(), "second-line\n");
        assert!(!file.backup_path(1).exists());
    }
}
