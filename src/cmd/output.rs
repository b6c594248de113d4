use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use tablescrape::render::{to_json, to_markdown};
use tablescrape::{OutputFormat, Record};

/// Render the selected tables. `tables` pairs each record with its index in
/// the document.
pub fn render_tables<V: Serialize + Display>(
    tables: Vec<(usize, Record<V>)>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let records: Vec<Record<V>> = tables.into_iter().map(|(_, r)| r).collect();
            Ok(to_json(&records)?)
        }
        OutputFormat::Markdown => {
            let sections: Vec<String> = tables
                .into_iter()
                .map(|(index, record)| markdown_section(index, record))
                .collect();
            Ok(sections.join("\n"))
        }
    }
}

fn markdown_section<V: Display>(index: usize, record: Record<V>) -> String {
    let heading = if record.header_found() {
        format!("## Table {index} ({} rows)", record.row_count())
    } else {
        format!("## Table {index} (no header)")
    };
    let body = to_markdown(&record.map_values(|v| v.to_string()));
    if body.is_empty() {
        format!("{heading}\n")
    } else {
        format!("{heading}\n\n{body}")
    }
}

pub fn write_output(body: &str, output_file: Option<PathBuf>) -> Result<()> {
    // Save to file if requested
    if let Some(path) = output_file {
        let mut file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(body.as_bytes())?;
        if !body.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        eprintln!("💾 Saved {} bytes to {}", body.len(), path.display());
        return Ok(());
    }

    if body.ends_with('\n') {
        print!("{body}");
    } else {
        println!("{body}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<(usize, Record<String>)> {
        tablescrape::extract_text_tables(
            "<table><tr><th>A</th></tr><tr><td>1</td></tr></table><table></table>",
        )
        .unwrap()
        .tables
        .into_iter()
        .enumerate()
        .collect()
    }

    #[test]
    fn markdown_sections_label_tables() {
        let out = render_tables(tables(), OutputFormat::Markdown).unwrap();
        assert!(out.contains("## Table 0 (1 rows)"));
        assert!(out.contains("| A |"));
        assert!(out.contains("## Table 1 (no header)"));
    }

    #[test]
    fn json_is_an_array_of_objects() {
        let out = render_tables(tables(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["A"][0], "1");
        assert_eq!(value[1], serde_json::json!({}));
    }
}
