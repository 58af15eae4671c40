//! Output renderers and formatting helpers for CLI commands.
//!
//! Data goes to stdout (or the `--out` file); diagnostics go through
//! `tracing` to stderr, so command output stays pipeable.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Where and how a command should render its results.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
}

impl OutputOptions {
    /// Render a list of records.
    ///
    /// JSON prints one compact object per line; CSV emits a header row
    /// plus one line per record; table aligns columns to their widest
    /// cell. With `--out`, JSON and CSV write to the file instead of
    /// stdout.
    pub fn emit_list<T: Serialize>(
        &self,
        items: &[T],
        headers: &[&str],
        to_row: impl Fn(&T) -> Vec<String>,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let mut lines = Vec::with_capacity(items.len());
                for item in items {
                    lines.push(serde_json::to_string(item)?);
                }
                self.write_lines(&lines)
            }
            OutputFormat::Csv => {
                let mut lines = Vec::with_capacity(items.len() + 1);
                lines.push(csv_line(&headers.iter().map(ToString::to_string).collect::<Vec<_>>()));
                for item in items {
                    lines.push(csv_line(&to_row(item)));
                }
                self.write_lines(&lines)
            }
            OutputFormat::Table => {
                let rows: Vec<Vec<String>> = items.iter().map(&to_row).collect();
                for line in table_lines(headers, &rows) {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }

    /// Render a single record: pretty JSON, or `key: value` lines.
    pub fn emit_one<T: Serialize>(&self, item: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json | OutputFormat::Csv => {
                let text = serde_json::to_string_pretty(item)?;
                self.write_lines(&[text])
            }
            OutputFormat::Table => {
                let value = serde_json::to_value(item)?;
                if let serde_json::Value::Object(map) = value {
                    for (key, val) in map {
                        match val {
                            serde_json::Value::String(s) => println!("{key}: {s}"),
                            other => println!("{key}: {other}"),
                        }
                    }
                } else {
                    println!("{value}");
                }
                Ok(())
            }
        }
    }

    fn write_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        match &self.out {
            Some(path) => {
                let mut text = lines
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join("\n");
                text.push('\n');
                fs::write(path, text)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                tracing::info!(path = %path.display(), "data written");
            }
            None => {
                for line in lines {
                    println!("{}", line.as_ref());
                }
            }
        }
        Ok(())
    }
}

/// Join fields into one CSV line, quoting where needed.
pub fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
pub fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Lay out header + rows with each column padded to its widest cell.
pub fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let render = |cells: Vec<&str>| -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{cell:<width$}  ", width = widths[i]));
            }
        }
        line.trim_end().to_string()
    };

    let mut lines = vec![render(headers.to_vec())];
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let lines = table_lines(
            &["KEY", "VALUE"],
            &[
                vec!["a".into(), "short".into()],
                vec!["longer-key".into(), "v".into()],
            ],
        );
        assert_eq!(lines[0], "KEY         VALUE");
        assert_eq!(lines[1], "a           short");
        assert_eq!(lines[2], "longer-key  v");
    }

    #[test]
    fn emit_list_csv_writes_file_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let opts = OutputOptions {
            format: OutputFormat::Csv,
            out: Some(path.clone()),
        };

        let items = vec![json!({"key": "k1", "value": "v,1"})];
        opts.emit_list(&items, &["KEY", "VALUE"], |item| {
            vec![
                item["key"].as_str().unwrap_or_default().to_string(),
                item["value"].as_str().unwrap_or_default().to_string(),
            ]
        })
        .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, "KEY,VALUE\nk1,\"v,1\"\n");
    }
}
