//! Size-rotated log file.
//!
//! `app.log` is the live file; on rotation it becomes `app.log.1`, the
//! previous `.1` becomes `.2`, and anything past `max_files` is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, base_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", base_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last `n` non-blank lines on disk, oldest first. Reaches into the
    /// most recent rotated file when the live one is short.
    pub fn tail(&self, n: usize) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        for path in [self.rotated(1), self.path.clone()] {
            match fs::read_to_string(&path) {
                Ok(text) => lines.extend(
                    text.lines()
                        .filter(|l| !l.trim().is_empty())
                        .map(str::to_string),
                ),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        let skip = lines.len().saturating_sub(n);
        Ok(lines.split_off(skip))
    }

    fn rotated(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.rotated(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.rotated(index);
            if from.exists() {
                fs::rename(&from, self.rotated(index + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated(1))?;

        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 10, 2).unwrap();

        file.write_all(b"first-line\n").unwrap();
        file.write_all(b"second\n").unwrap();
        file.write_all(b"third-line\n").unwrap();
        file.flush().unwrap();

        let live = fs::read_to_string(dir.path().join("app.log")).unwrap();
        let one = fs::read_to_string(dir.path().join("app.log.1")).unwrap();
        let two = fs::read_to_string(dir.path().join("app.log.2")).unwrap();
        assert_eq!(live, "third-line\n");
        assert_eq!(one, "second\n");
        assert_eq!(two, "first-line\n");
    }

    #[test]
    fn test_drops_files_past_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 4, 1).unwrap();
        for line in ["aaaa\n", "bbbb\n", "cccc\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert!(!dir.path().join("app.log.2").exists());
        assert_eq!(fs::read_to_string(dir.path().join("app.log.1")).unwrap(), "bbbb\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "cccc\n");
    }

    #[test]
    fn test_tail_spans_rotated_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 6, 2).unwrap();
        for line in ["one\n", "two\n", "three\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(file.tail(2).unwrap(), vec!["two", "three"]);
        assert_eq!(file.tail(10).unwrap(), vec!["two", "three"]);
        assert!(file.tail(0).unwrap().is_empty());
    }

    #[test]
    fn test_tail_of_fresh_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
        assert!(file.tail(5).unwrap().is_empty());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.log"), "old\n").unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 1024, 3).unwrap();
        file.write_all(b"new\n").unwrap();
        file.flush().unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "old\nnew\n");
    }
}
