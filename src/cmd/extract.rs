use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};
use url::Url;

use tablescrape::coerce::{cell_link, coerce_record, ColumnKind};
use tablescrape::{
    Cell, Config, HtmlDocument, Node, OutputFormat, PageClient, Record, Source, TableExtractor,
};

use super::output::{render_tables, write_output};

pub struct ExtractOptions {
    pub raw: bool,
    pub links: bool,
    pub format: Option<OutputFormat>,
    pub table: Option<usize>,
    pub coerce: Vec<String>,
    pub base: Option<String>,
    pub output: Option<PathBuf>,
}

pub async fn cmd_extract(
    source_arg: &str,
    config_path: Option<&Path>,
    options: ExtractOptions,
) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if options.raw {
        config.keep_raw_cells = true;
    }
    if let Some(format) = options.format {
        config.format = format;
    }
    for rule in &options.coerce {
        let (column, kind) = parse_rule(rule)?;
        config.columns.insert(column, kind);
    }

    let source = Source::parse_arg(source_arg).context("invalid source")?;
    let base = match options.base.as_deref() {
        Some(base) => Some(Url::parse(base).context("invalid --base URL")?),
        None => source.base_url().cloned(),
    };

    let client = PageClient::from_config(&config)?;
    let markup = source
        .load(&client)
        .await
        .with_context(|| format!("failed to load {source_arg}"))?;

    let doc = HtmlDocument::parse(&markup);
    debug!(parse_errors = doc.parse_errors(), "Parsed document");
    let keep_raw = config.keep_raw_cells || options.links;
    let extraction = TableExtractor::new().extract_cells(&doc.root(), keep_raw)?;

    if !extraction.mismatches.is_empty() {
        eprintln!(
            "⚠️  Skipped {} rows with mismatched column counts",
            extraction.mismatches.len()
        );
    }

    let total = extraction.tables.len();
    let mut tables: Vec<(usize, Record<String>)> = extraction
        .tables
        .into_iter()
        .map(|record| record.map_values(|cell| cell_string(cell, options.links, base.as_ref())))
        .enumerate()
        .collect();

    if let Some(index) = options.table {
        if index >= total {
            bail!("table {index} not found ({total} tables in document)");
        }
        tables = vec![tables.swap_remove(index)];
    }

    // `--links` turns raw cells back into plain strings.
    let markup_cells = config.keep_raw_cells && !options.links;
    if markup_cells && !config.columns.is_empty() {
        warn!(
            rules = config.columns.len(),
            "raw cells hold markup, column coercion not applied"
        );
        eprintln!("⚠️  Ignoring column coercion: raw cells hold markup");
    }

    let body = if config.columns.is_empty() || markup_cells {
        render_tables(tables, config.format)?
    } else {
        let typed = tables
            .into_iter()
            .map(|(index, record)| {
                coerce_record(&record, &config.columns).map(|typed| (index, typed))
            })
            .collect::<tablescrape::Result<Vec<_>>>()?;
        render_tables(typed, config.format)?
    };

    write_output(&body, options.output)
}

fn cell_string<N>(cell: Cell<N>, links: bool, base: Option<&Url>) -> String
where
    N: Node + CellMarkup,
{
    match cell {
        Cell::Text(text) => text,
        Cell::Raw(node) if links => {
            node.link(base).unwrap_or_else(|| node.text_content())
        }
        Cell::Raw(node) => node.markup(),
    }
}

/// Markup access for raw cells.
trait CellMarkup {
    fn markup(&self) -> String;
    fn link(&self, base: Option<&Url>) -> Option<String>;
}

impl CellMarkup for scraper::ElementRef<'_> {
    fn markup(&self) -> String {
        self.inner_html().trim().to_string()
    }

    fn link(&self, base: Option<&Url>) -> Option<String> {
        cell_link(self, base)
    }
}

/// Parse a `COL=KIND` coercion rule.
fn parse_rule(rule: &str) -> Result<(String, ColumnKind)> {
    let Some((column, kind)) = rule.rsplit_once('=') else {
        bail!("invalid coercion {rule:?}, expected COL=KIND");
    };
    let kind = kind
        .parse::<ColumnKind>()
        .with_context(|| format!("invalid coercion {rule:?}"))?;
    Ok((column.trim().to_string(), kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules() {
        let (column, kind) = parse_rule("Grosses=currency").unwrap();
        assert_eq!(column, "Grosses");
        assert_eq!(kind, ColumnKind::Currency);

        let (column, kind) = parse_rule("Week End=date:%Y-%m-%d").unwrap();
        assert_eq!(column, "Week End");
        assert_eq!(kind, ColumnKind::Date("%Y-%m-%d".into()));
    }

    #[test]
    fn rejects_bad_rules() {
        assert!(parse_rule("Grosses").is_err());
        assert!(parse_rule("Grosses=money").is_err());
    }

    #[test]
    fn raw_cells_render_as_markup_or_links() {
        let doc = HtmlDocument::parse(
            "<table><tr><td> <a href=\"/cats\">Cats</a> </td><td>2</td></tr></table>",
        );
        let cells = doc.root().find_all("td").unwrap();
        let base = Url::parse("https://example.com/list").unwrap();

        assert_eq!(
            cell_string(Cell::Raw(cells[0]), false, None),
            "<a href=\"/cats\">Cats</a>"
        );
        assert_eq!(
            cell_string(Cell::Raw(cells[0]), true, Some(&base)),
            "https://example.com/cats"
        );
        assert_eq!(cell_string(Cell::Raw(cells[1]), true, Some(&base)), "2");
        assert_eq!(
            cell_string::<scraper::ElementRef<'_>>(Cell::Text("t".into()), true, None),
            "t"
        );
    }
}
