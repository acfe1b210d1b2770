use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lisp_reader::{parse, Scanner};

const SOURCE: &str = r#"
(defn area [shape]
  (case (:kind shape)
    :circle (* 3.14159 (:r shape) (:r shape))
    :rect   (* (:w shape) (:h shape))
    -1))

(def shapes [(:kind :circle :r 2.5e0) (:kind :rect :w 3 :h 4)])
(print "total area: \"approx\"" (reduce + 0 (map area shapes)))
"#;

fn nested_source(depth: usize) -> String {
    format!("{}+1.0e-3{}", "(x [".repeat(depth), "])".repeat(depth))
}

fn scanner_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize program", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(SOURCE));
            scanner.scan_tokens().unwrap()
        })
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let nested = nested_source(64);

    c.bench_function("parse program", |b| {
        b.iter(|| parse(black_box(SOURCE)).unwrap())
    });

    c.bench_function("parse nested collections", |b| {
        b.iter(|| parse(black_box(&nested)).unwrap())
    });
}

criterion_group!(benches, scanner_benchmark, parser_benchmark);
criterion_main!(benches);
