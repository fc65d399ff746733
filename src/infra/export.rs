use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::UserDirs;

/// Writes one rendered table to `path` as CSV, header row first. Rows are
/// expected to be pre-formatted display strings of the same width as the
/// header.
pub fn write_table_csv(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create csv: {}", path.display()))?;

    writer
        .write_record(headers)
        .context("failed to write csv header")?;

    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != headers.len() {
            anyhow::bail!(
                "row {} has {} columns, expected {}",
                row_idx,
                row.len(),
                headers.len()
            );
        }
        writer
            .write_record(row)
            .with_context(|| format!("failed to write csv row {row_idx}"))?;
    }

    writer.flush().context("failed to flush csv")?;
    Ok(())
}

/// Where the save dialog opens by default. Falls back to the current
/// directory when the platform reports no download folder.
pub fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_csv(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!(
            "casino-console-{}-{}-{}.csv",
            name,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn writes_header_and_rows() {
        let path = temp_csv("ok");
        let rows = vec![
            vec!["player001".to_string(), "$125.00".to_string()],
            vec!["slot_queen".to_string(), "$0.50".to_string()],
        ];

        write_table_csv(&path, &["Username", "Amount"], &rows).expect("export should succeed");

        let mut reader = csv::Reader::from_path(&path).expect("should reopen the export");
        let headers = reader.headers().expect("should read headers").clone();
        assert_eq!(headers, csv::StringRecord::from(vec!["Username", "Amount"]));

        let records: Vec<_> = reader
            .records()
            .collect::<Result<_, _>>()
            .expect("should parse exported rows");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get(0), Some("slot_queen"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_ragged_rows() {
        let path = temp_csv("ragged");
        let rows = vec![vec!["only-one-column".to_string()]];

        let result = write_table_csv(&path, &["A", "B"], &rows);

        assert!(result.is_err(), "ragged rows should be rejected");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_empty_header() {
        let path = temp_csv("empty");

        let result = write_table_csv(&path, &[], &[]);

        assert!(result.is_err(), "a header row is required");
        let _ = std::fs::remove_file(&path);
    }
}
