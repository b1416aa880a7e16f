//! Throughput benchmarks for `denim_lexer`.
//!
//! Covers the full recognizer: keyword resolution, literal values and
//! diagnostics are all included.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use denim_diagnostic::{Diagnostic, DiagnosticConfig};
use denim_ir::{Source, TokenKind};
use denim_lexer::{lex, lex_many, Lexer, LexerConfig};

/// Generate N small functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "/// Function {i}.\nfn func{i}(x: int) -> int {{\n    let s = \"value {i}\\n\";\n    return x * 0x{i:X} + {i}.5e2; // done\n}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_lexer_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/throughput");
    let config = LexerConfig::default();

    for num_functions in [10, 100, 1000, 5000] {
        let source = Source::from_text(&generate_n_functions(num_functions));
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let mut lexer = Lexer::with_config(src, Vec::<Diagnostic>::new(), config.clone());
                    while let Ok(token) = lexer.next_token() {
                        if token.kind == TokenKind::End {
                            break;
                        }
                        black_box(token);
                    }
                });
            },
        );
    }

    group.finish();
}

/// Collecting into a `LexedFile`, comments skipped.
fn bench_lex_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/file");
    let config = LexerConfig::default()
        .with_keep_comments(false)
        .with_diagnostics(DiagnosticConfig::unlimited());
    let source = Source::from_text(&generate_n_functions(1000));

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("lex", |b| b.iter(|| black_box(lex(&source, &config))));
    group.finish();
}

fn bench_lex_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/parallel");
    let config = LexerConfig::default();

    for num_files in [1, 8, 64] {
        let sources: Vec<Source> = (0..num_files)
            .map(|i| Source::new(format!("file{i}.dnm"), generate_n_functions(200).into_bytes(), i))
            .collect();
        let bytes: usize = sources.iter().map(Source::len).sum();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_files), &sources, |b, srcs| {
            b.iter(|| black_box(lex_many(srcs, &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lexer_throughput, bench_lex_file, bench_lex_many);
criterion_main!(benches);
