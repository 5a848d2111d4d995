use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use taqvim_calendar::PersianDate;
use taqvim_rules::{generate_grid, GridOptions, HolidayCalendar, RangePolicy};

fn grid_benches(c: &mut Criterion) {
    let holidays = HolidayCalendar::iranian();
    let Ok(today) = PersianDate::new(1403, 6, 15) else { return };
    let policy = RangePolicy::new().disable_past(true);
    let options = GridOptions::new().selected(Some(today)).policy(policy);

    let mut group = c.benchmark_group("grid");

    group.bench_function("single_month", |b| {
        b.iter(|| generate_grid(black_box(1403), black_box(6), today, &options, &holidays))
    });

    group.bench_function("full_year", |b| {
        b.iter(|| {
            for month in 1..=12 {
                let _ = black_box(generate_grid(1403, month, today, &options, &holidays));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, grid_benches);
criterion_main!(benches);
