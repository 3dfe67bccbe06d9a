use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use larder_inventory::{expired, filter, low_stock, Category, ItemFilter, NewItem, Table};

fn build_table(rows: usize) -> Table {
    let mut table = Table::new();
    for i in 0..rows {
        let category = Category::ALL[i % Category::ALL.len()];
        table
            .add(NewItem {
                name: format!("item-{i}"),
                quantity: (i % 10 + 1) as u32,
                category,
                expiry: if i % 3 == 0 {
                    Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
                } else {
                    None
                },
                note: String::new(),
                image_path: None,
                alert_threshold: 3,
            })
            .expect("valid draft");
    }
    table
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_filter");
    for rows in [100usize, 1_000, 10_000] {
        let table = build_table(rows);
        let criteria = ItemFilter {
            name_contains: Some("item-9".to_string()),
            category: Some(Category::Food),
        };

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| filter(black_box(table), black_box(&criteria)));
        });
    }
    group.finish();
}

fn bench_alerts(c: &mut Criterion) {
    let table = build_table(10_000);
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    c.bench_function("alerts_low_stock_10k", |b| {
        b.iter(|| low_stock(black_box(&table)));
    });
    c.bench_function("alerts_expired_10k", |b| {
        b.iter(|| expired(black_box(&table), black_box(today)));
    });
}

criterion_group!(benches, bench_filter, bench_alerts);
criterion_main!(benches);
