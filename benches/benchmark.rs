//! Performance benchmarks for recipe extraction.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A JSON-LD recipe page (structured pass fills everything)
//! - A plain blog page where the cascade falls through to headings and body text
//! - Optional saved pages from `bench_data/` for realistic sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_scraper::{extract, extract_with_options, Options};
use std::fs;

const JSON_LD_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Beef Stew | Example Kitchen</title>
    <script type="application/ld+json">
    {
        "@context": "https://schema.org",
        "@graph": [
            {"@type": "WebPage", "name": "Beef Stew"},
            {
                "@type": "Recipe",
                "name": "Beef Stew",
                "recipeIngredient": ["500 g beef", "2 carrots", "1 onion", "1 l stock"],
                "recipeInstructions": [
                    {"@type": "HowToStep", "text": "Brown the beef."},
                    {"@type": "HowToStep", "text": "Add vegetables and stock."},
                    {"@type": "HowToStep", "text": "Simmer for two hours."}
                ]
            }
        ]
    }
    </script>
</head>
<body>
    <nav><a href="/">Home</a> <a href="/recipes">Recipes</a></nav>
    <article>
        <h1>Beef Stew</h1>
        <p>A winter classic that feeds a crowd.</p>
    </article>
    <footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

const HEADINGS_HTML: &str = r#"
<!DOCTYPE html>
<html lang="hu">
<head><meta charset="UTF-8"><title>Pogácsa</title></head>
<body>
    <header><a href="/">Főoldal</a></header>
    <main>
        <h1>Túrós pogácsa</h1>
        <p>Nagymamám receptje, ünnepekre.</p>
        <h2>Hozzávalók</h2>
        <ul><li>50 dkg liszt</li><li>25 dkg túró</li><li>25 dkg vaj</li><li>1 tojás</li></ul>
        <h2>Elkészítés</h2>
        <p>Összegyúrjuk, pihentetjük, kiszaggatjuk és megsütjük.</p>
    </main>
    <aside><h3>Kapcsolódó</h3><ul><li>Kakaós csiga</li></ul></aside>
</body>
</html>
"#;

fn bench_extract_json_ld(c: &mut Criterion) {
    c.bench_function("extract_json_ld", |b| {
        b.iter(|| extract(black_box(JSON_LD_HTML)));
    });
}

fn bench_extract_headings(c: &mut Criterion) {
    c.bench_function("extract_headings", |b| {
        b.iter(|| extract(black_box(HEADINGS_HTML)));
    });
}

fn bench_extract_without_body_fallback(c: &mut Criterion) {
    let options = Options { body_fallback: false, ..Options::default() };

    c.bench_function("extract_without_body_fallback", |b| {
        b.iter(|| extract_with_options(black_box(HEADINGS_HTML), black_box(&options)));
    });
}

/// Benchmark with saved recipe pages of varying sizes
fn bench_saved_pages(c: &mut Criterion) {
    let html_dir = "bench_data";

    let sample_files = ["small.html", "medium.html", "large.html"];

    let mut group = c.benchmark_group("saved_pages");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read_to_string(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("extract", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| extract(black_box(html)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_json_ld,
    bench_extract_headings,
    bench_extract_without_body_fallback,
    bench_saved_pages
);
criterion_main!(benches);
