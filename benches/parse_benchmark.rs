//! Benchmarks for unresume parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks parse synthetic résumés of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unresume::{ResumeParser, TextSource};

/// Creates a synthetic résumé with the given number of experience entries.
fn create_test_resume(jobs: usize) -> Vec<String> {
    let mut lines = vec![
        "Jane Doe".to_string(),
        "jane@doe.com | (555) 123-4567 | Austin, TX".to_string(),
        "github.com/janedoe".to_string(),
        "EXPERIENCE".to_string(),
    ];

    for i in 0..jobs {
        lines.push(format!("Company {}, Austin, TX", i));
        lines.push(format!("Engineer {} | Jan {} - Dec {}", i, 2000 + i, 2001 + i));
        for j in 0..4 {
            lines.push(format!("• Delivered project {} for team {}", j, i));
        }
    }

    lines.push("EDUCATION".to_string());
    lines.push("State University, TX".to_string());
    lines.push("Bachelor of Science".to_string());
    lines.push("May 2018".to_string());
    lines.push("SKILLS".to_string());
    lines.push("Rust, Go, Python; SQL | Kubernetes".to_string());
    lines
}

/// Benchmark parser construction (pattern compilation).
fn bench_parser_creation(c: &mut Criterion) {
    c.bench_function("parser_creation", |b| {
        b.iter(|| ResumeParser::new().unwrap());
    });
}

/// Benchmark parsing at various sizes.
fn bench_resume_parsing(c: &mut Criterion) {
    let parser = ResumeParser::new().unwrap();
    let mut group = c.benchmark_group("resume_parsing");

    for jobs in [1, 5, 20].iter() {
        let lines = create_test_resume(*jobs);

        group.bench_function(format!("{}_jobs", jobs), |b| {
            b.iter(|| parser.parse_lines(black_box(&lines)));
        });
    }

    group.finish();
}

/// Benchmark parallel batch parsing.
fn bench_parse_many(c: &mut Criterion) {
    let parser = ResumeParser::new().unwrap();
    let sources: Vec<TextSource> = (0..32)
        .map(|i| TextSource::from_text(format!("r{}", i), create_test_resume(5).join("\n")))
        .collect();

    c.bench_function("parse_many_32", |b| {
        b.iter(|| parser.parse_many(black_box(&sources)));
    });
}

criterion_group!(
    benches,
    bench_parser_creation,
    bench_resume_parsing,
    bench_parse_many,
);
criterion_main!(benches);
