use criterion::{criterion_group, criterion_main, Criterion, black_box};

use plugin_scrape::core::html;
use plugin_scrape::specs::translations;

const URL: &str = "https://translate.wordpress.org/locale/de/default/wp-plugins/contact-widget/";

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/project_de.html"))
        .expect("read tests/fixtures/project_de.html")
}

fn bench_extract(c: &mut Criterion) {
    let page = load_sample();
    let doc = html::load(&page);

    c.bench_function("load_and_summarize", |b| {
        b.iter(|| {
            let s = translations::summarize_html(black_box(&page), URL);
            black_box(s.total_not_translated())
        })
    });

    c.bench_function("summarize_parsed", |b| {
        b.iter(|| {
            let s = translations::summarize(black_box(&doc), URL);
            black_box(s.total_not_translated())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
