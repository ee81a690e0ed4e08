use criterion::{Criterion, black_box, criterion_group, criterion_main};
use doc_parser::{json, yaml};

const MEDIUM_JSON: &str = r#"
{
    "name": "babbage",
    "age": 30,
    "admin": true,
    "friends": ["ada", "charles", "grace"],
    "tasks": [
        {"id": 1, "title": "parse", "done": false},
        {"id": 2, "title": "write docs", "done": true}
    ],
    "nested": {"key": [1, 2, 3]}
}
"#;

const MEDIUM_YAML: &str = "name: babbage
age: 30
admin: true
friends:
- ada
- charles
- grace
tasks:
- id: 1
  title: parse
  done: false
- id: 2
  title: docs
  done: true
";

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("json::parse", |b| {
        b.iter(|| json::parse(black_box(MEDIUM_JSON)).unwrap())
    });

    group.bench_function("yaml::parse", |b| {
        b.iter(|| yaml::parse(black_box(MEDIUM_YAML)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
