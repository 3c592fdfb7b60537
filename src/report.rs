use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::info;

use crate::record::ArticleRecord;

/// Replace `path` with the records as a pretty-printed JSON array.
///
/// Written to a temp file beside the target and renamed into place, so a
/// failure never leaves a half-written file behind.
pub fn write_json(path: &Path, records: &[ArticleRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {:?}", dir))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write {:?}", tmp.path()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {:?}", path))?;

    info!(path = %path.display(), records = records.len(), bytes = json.len(), "wrote output");
    Ok(())
}

pub fn read_json(path: &Path) -> Result<Vec<ArticleRecord>> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {:?}", path))
}

/// `1. 2025-03-02 - 小狐熊週記：第十週`
pub fn summary_lines(records: &[ArticleRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {} - {}", i + 1, r.date(), r.title()))
        .collect()
}

pub fn print_found(out: &mut impl Write, records: &[ArticleRecord]) -> io::Result<()> {
    writeln!(out, "Found {} articles", records.len())
}

pub fn print_saved(
    out: &mut impl Write,
    path: &Path,
    records: &[ArticleRecord],
) -> io::Result<()> {
    writeln!(out, "Saved to {}", path.display())?;
    for line in summary_lines(records) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::filename::DatedName;
    use crate::parser::DocumentParser;

    fn record(file_name: &str, text: &str) -> ArticleRecord {
        let name = DatedName::parse(file_name, "md").unwrap();
        let doc = DocumentParser::new("原文連結").unwrap().parse(text);
        ArticleRecord::build(&name, doc)
    }

    fn sample() -> Vec<ArticleRecord> {
        vec![
            record(
                "2025-03-02-小狐熊週記-第十週.md",
                "# 小狐熊週記：第十週\n**原文連結**: https://example.com/post/10\n---\n本週發生了很多事……",
            ),
            record("2025-03-09-小狐熊週記-第十一週.md", "沒有標題\n---\nA\n---\nB"),
        ]
    }

    #[test]
    fn round_trip_preserves_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("articles.json");
        let records = sample();

        write_json(&path, &records).unwrap();
        assert_eq!(read_json(&path).unwrap(), records);
    }

    #[test]
    fn output_is_two_space_pretty_and_keeps_non_ascii() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("articles.json");
        write_json(&path, &sample()[..1]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let expected = r#"[
  {
    "id": "2025-03-02-小狐熊週記-第十週",
    "title": "小狐熊週記：第十週",
    "date": "2025-03-02",
    "link": "https://example.com/post/10",
    "content": "本週發生了很多事……"
  }
]"#;
        assert_eq!(raw, expected);
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn empty_records_write_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("articles.json");
        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("articles.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("articles.json");
        write_json(&path, &sample()).unwrap();
        assert_eq!(read_json(&path).unwrap().len(), 2);
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "file, not dir").unwrap();
        assert!(write_json(&blocker.join("articles.json"), &[]).is_err());
    }

    #[test]
    fn summary_is_numbered_date_and_title() {
        let lines = summary_lines(&sample());
        assert_eq!(
            lines,
            vec![
                "1. 2025-03-02 - 小狐熊週記：第十週".to_string(),
                "2. 2025-03-09 - 2025-03-09-小狐熊週記-第十一週.md".to_string(),
            ]
        );
    }

    #[test]
    fn operator_output_lists_records_after_path() {
        let records = sample();
        let mut out = Vec::new();
        print_found(&mut out, &records).unwrap();
        print_saved(&mut out, Path::new("data/articles.json"), &records).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Found 2 articles\n\
             Saved to data/articles.json\n\
             1. 2025-03-02 - 小狐熊週記：第十週\n\
             2. 2025-03-09 - 2025-03-09-小狐熊週記-第十一週.md\n"
        );
    }

    #[test]
    fn summary_of_nothing_is_empty() {
        assert!(summary_lines(&[]).is_empty());
    }
}
