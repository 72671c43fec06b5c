//! Line-delimited JSON history and crash-safe snapshot writes

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Append `record` as one JSON line, creating the file and its parent on first use.
///
/// The line goes out in a single write so concurrent appenders never interleave
/// partial records.
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?
        .write_all(&line)
}

/// Decode one record per line from any buffered source.
///
/// Blank lines are skipped; lines that fail to decode are logged and skipped.
/// Only I/O errors abort the read.
pub fn read_jsonl_from<T, R>(reader: R) -> std::io::Result<Vec<T>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => records.push(record),
            Err(err) => tracing::warn!(line = index + 1, %err, "skipping malformed record"),
        }
    }
    Ok(records)
}

/// [`read_jsonl_from`] over a file; a missing file reads as empty
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> std::io::Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };
    tracing::trace!(path = %path.display(), "reading records");
    read_jsonl_from(BufReader::new(file))
}

/// Replace `path` with `data`: write a synced sibling `<name>.tmp`, then rename over the target
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    let mut file = File::create(&staging)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&staging, path)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sighting {
        label: String,
        confidence: f64,
    }

    fn sighting(label: &str, confidence: f64) -> Sighting {
        Sighting {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_append_then_read_skips_garbage() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("nested").join("sightings.jsonl");

        append_jsonl(&file, &sighting("cup", 0.9)).unwrap();

        // torn write in the middle of the history
        let mut handle = OpenOptions::new().append(true).open(&file).unwrap();
        handle.write_all(b"{\"label\":\n\n").unwrap();

        append_jsonl(&file, &sighting("book", 0.7)).unwrap();

        let read: Vec<Sighting> = read_jsonl(&file).unwrap();
        assert_eq!(read, [sighting("cup", 0.9), sighting("book", 0.7)]);
    }

    #[test]
    fn test_read_from_buffer() {
        let input = "  {\"label\":\"pen\",\"confidence\":0.5}  \r\n\n[1,2]\n{\"label\":\"mug\",\"confidence\":1.0}";
        let read: Vec<Sighting> = read_jsonl_from(input.as_bytes()).unwrap();
        assert_eq!(read, [sighting("pen", 0.5), sighting("mug", 1.0)]);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let read: Vec<Sighting> = read_jsonl(&dir.path().join("absent.jsonl")).unwrap();
        assert!(read.is_empty());
    }

    #[test]
    fn test_read_directory_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_jsonl::<Sighting>(dir.path()).is_err());
    }

    #[test]
    fn test_atomic_write_replaces_and_cleans_staging() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("progress.json");

        atomic_write(&file, b"{\"v\":1}").unwrap();
        atomic_write(&file, b"{\"v\":2}").unwrap();

        assert_eq!(std::fs::read(&file).unwrap(), b"{\"v\":2}");
        assert!(!dir.path().join("progress.json.tmp").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
