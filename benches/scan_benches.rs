use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statement_transactions::classify::Classifier;
use statement_transactions::extract::extract_transaction;
use statement_transactions::scanner::{ScanOutcome, StatementScanner};

/// A synthetic single-account statement with a long transaction section.
fn statement_lines() -> Vec<String> {
    let mut lines = vec![
        String::from("CARD SERVICES"),
        String::from("Statement for Account Ending in 9876"),
        String::from("Transactions in summary"),
        String::from("Transactions"),
    ];
    for i in 0..500 {
        lines.push(format!(
            "9876   01/{:02}  REF{:06}   MERCHANT NUMBER {:03}          {}.{:02}",
            (i % 28) + 1,
            i,
            i,
            10 + (i % 90),
            i % 100,
        ));
    }
    lines
}

fn criterion_benchmark(c: &mut Criterion) {
    let classifier = Classifier::new();
    let lines = statement_lines();

    c.bench_function("scan_statement", |b| {
        b.iter(|| {
            let mut scanner = StatementScanner::new(&classifier, 2024, false);
            let mut count = 0usize;
            for line in black_box(&lines) {
                if let ScanOutcome::Transaction(_) = scanner.scan_line(line) {
                    count += 1;
                }
            }
            count
        })
    });

    c.bench_function("extract_line", |b| {
        b.iter(|| {
            extract_transaction(
                black_box("1234   01/15  REF001234   STORE PURCHASE          45.67"),
                2024,
                false,
                "1234",
                false,
                false,
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
