use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn read_text_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to open document: {}", path.display()))?;
    let mut raw = Vec::new();
    file.read_to_end(&mut raw)
        .with_context(|| format!("failed to read document: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

pub fn sha256_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create json file: {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("failed to write json file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize json file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_text_is_lowercase_hex() {
        assert_eq!(
            sha256_text(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn write_json_pretty_creates_parents_and_ends_with_newline() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("reports").join("out.json");
        write_json_pretty(&path, &serde_json::json!({ "score": 100 })).expect("write report");

        let written = fs::read_to_string(&path).expect("read report");
        assert!(written.ends_with("}\n"));
        assert!(written.contains("\"score\": 100"));
    }

    #[test]
    fn read_text_file_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("doc.txt");
        fs::write(&path, b"SYS-001 The pump shall start.\xff\n").expect("write doc");
        let text = read_text_file(&path).expect("read doc");
        assert!(text.starts_with("SYS-001 The pump shall start."));

        let missing = read_text_file(&dir.path().join("missing.txt"));
        assert!(missing.is_err());
    }
}
