use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_core::four_pillars;
use sizhu_luck::{Sex, luck_sequence, map_range};
use sizhu_time::CivilDateTime;

fn bench_luck_sequence(c: &mut Criterion) {
    let civil = CivilDateTime::from_strs("2000-06-15", "12:00").unwrap();
    let pillars = four_pillars(&civil);
    c.bench_function("luck_sequence_12", |b| {
        b.iter(|| luck_sequence(black_box(&pillars), Sex::Male, black_box(&civil), 12).unwrap())
    });
}

fn bench_map_range(c: &mut Criterion) {
    c.bench_function("map_range_century", |b| {
        b.iter(|| map_range(black_box(2000), black_box(2100)).unwrap())
    });
}

criterion_group!(benches, bench_luck_sequence, bench_map_range);
criterion_main!(benches);
