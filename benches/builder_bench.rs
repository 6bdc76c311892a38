use criterion::{black_box, criterion_group, criterion_main, Criterion};

use markupkit::{filter_attributes, Attributes, ElementKind, MarkupBuilder};

fn bench_filter_attributes(c: &mut Criterion) {
    let attrs = Attributes::new()
        .with("id", "main")
        .with("class", "nav wide")
        .with("data-x", "dropped")
        .with("href", "/next")
        .with("onclick", "go()")
        .with("width", "dropped");

    c.bench_function("filter_attributes_anchor", |b| {
        b.iter(|| filter_attributes(black_box(ElementKind::Anchor), black_box(Some(&attrs))))
    });
}

fn bench_page(c: &mut Criterion) {
    let mut html = MarkupBuilder::new();
    html.set_css(["base.css", "site.css"]);
    html.set_js("app.js");
    let rows: Vec<Vec<String>> = (0..50)
        .map(|i| vec![i.to_string(), format!("row {i}"), (i * i).to_string()])
        .collect();
    let link_attrs = Attributes::class("nav").with("rel", "next");

    c.bench_function("render_page_with_table", |b| {
        b.iter(|| {
            let mut out = html.site_top("Bench");
            out.push_str(&html.heading(1, "Bench", None));
            out.push_str(&html.table(&rows));
            out.push_str(&html.link("/next", "Next", Some(&link_attrs)));
            out.push_str(&html.site_bottom());
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_filter_attributes, bench_page);
criterion_main!(benches);
