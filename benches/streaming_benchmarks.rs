//! Benchmarks for the streaming lexer/parser pipeline: whole-document
//! parsing at a few representative shapes, plus the cost of chunking the
//! same input into many small `feed` calls instead of one.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonic_stream::{parse, Parser};

mod samples {
    pub const SIMPLE_OBJECT: &str = r#"{"name":"John","age":30,"city":"New York"}"#;

    pub const NESTED_OBJECT: &str = r#"{
        "user": {
            "id": 12345,
            "profile": {
                "name": "John Doe",
                "email": "john@example.com",
                "preferences": {"theme": "dark", "notifications": true}
            }
        }
    }"#;

    pub const ARRAY_OF_OBJECTS: &str = r#"[
        {"id": 1, "name": "Item 1", "value": 10.5},
        {"id": 2, "name": "Item 2", "value": 20.0},
        {"id": 3, "name": "Item 3", "value": 30.5},
        {"id": 4, "name": "Item 4", "value": 40.0},
        {"id": 5, "name": "Item 5", "value": 50.5}
    ]"#;

    pub const STRING_HEAVY: &str = r#"{
        "title": "The quick brown fox jumps over the lazy dog",
        "description": "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        "content": "This is a longer text with escapes like \"quotes\" and \n newlines.",
        "tags": ["json", "parsing", "benchmark", "performance", "streaming"]
    }"#;

    pub const NUMBER_HEAVY: &str = r#"{
        "integers": [1, 2, 3, 4, 5, 10, 20, 30, 40, 50, 100, 200, 300, 400, 500],
        "decimals": [1.1, 2.2, 3.3, 4.4, 5.5, 10.1, 20.2, 30.3, 40.4, 50.5],
        "scientific": [1e10, 2.5e-10, 3.14159e0, 6.022e23, 1.602e-19]
    }"#;
}

fn bench_whole_document_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("whole_document");

    for (name, doc) in [
        ("simple_object", samples::SIMPLE_OBJECT),
        ("nested_object", samples::NESTED_OBJECT),
        ("array_of_objects", samples::ARRAY_OF_OBJECTS),
        ("string_heavy", samples::STRING_HEAVY),
        ("number_heavy", samples::NUMBER_HEAVY),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let result = parse(black_box(doc.as_bytes()));
                assert!(result.is_ok());
            })
        });
    }

    group.finish();
}

fn bench_chunk_size_sensitivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size_sensitivity");
    let doc = samples::ARRAY_OF_OBJECTS.as_bytes();

    for chunk_size in [1usize, 8, 64, doc.len()] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut parser = Parser::new(Vec::new());
                    for window in black_box(doc).chunks(chunk_size.max(1)) {
                        parser.feed(window).unwrap();
                    }
                    parser.finish().unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_deeply_nested_document(c: &mut Criterion) {
    let mut doc = "[".repeat(1024);
    doc.push('0');
    doc.push_str(&"]".repeat(1024));

    c.bench_function("deeply_nested_1024", |b| {
        b.iter(|| {
            let result = parse(black_box(doc.as_bytes()));
            assert!(result.is_ok());
        })
    });
}

criterion_group!(
    benches,
    bench_whole_document_parsing,
    bench_chunk_size_sensitivity,
    bench_deeply_nested_document
);
criterion_main!(benches);
