//! Benchmarks for table extraction at varying document sizes.
//!
//! Run with: `cargo bench --bench extract_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tablescrape::{HtmlDocument, RawCells, TableExtractor, TextCells};

/// Generate a rankings-style page with `tables` tables of `rows` rows each.
///
/// Every tenth row carries an extra cell so the mismatch path is exercised.
fn generate_html(tables: usize, rows: usize) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html><head><title>Rankings</title></head><body>\n",
    );

    for t in 0..tables {
        html.push_str("<table>\n<tr><th>RK</th><th>Team</th><th>Rec</th><th>PTS</th></tr>\n");
        for r in 0..rows {
            html.push_str(&format!(
                "<tr><td>{}</td><td><a href=\"/team/{t}/{r}\">Team {r}</a></td><td>{}-{}</td><td>{}</td>",
                r + 1,
                20 - r % 20,
                r % 20,
                1500 - r
            ));
            if r % 10 == 9 {
                html.push_str("<td>extra</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let sizes: &[(usize, usize, &str)] = &[
        (1, 25, "1x25"),
        (2, 100, "2x100"),
        (10, 500, "10x500"),
    ];

    for &(tables, rows, label) in sizes {
        let html = generate_html(tables, rows);
        let doc = HtmlDocument::parse(&html);
        let extractor = TableExtractor::new();

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("text", label), &doc, |b, doc| {
            b.iter(|| black_box(extractor.extract(&doc.root(), &TextCells).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("raw", label), &doc, |b, doc| {
            b.iter(|| black_box(extractor.extract(&doc.root(), &RawCells).unwrap()));
        });
    }

    group.finish();
}

fn bench_parse_and_extract(c: &mut Criterion) {
    let html = generate_html(2, 100);

    c.bench_function("parse_and_extract_2x100", |b| {
        b.iter(|| black_box(tablescrape::extract_text_tables(black_box(&html)).unwrap()));
    });
}

criterion_group!(benches, bench_extract, bench_parse_and_extract);
criterion_main!(benches);
