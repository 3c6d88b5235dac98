use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_chart::{BirthRecord, compute_chart};
use sizhu_luck::Sex;

fn bench_compute_chart(c: &mut Criterion) {
    let record = BirthRecord {
        date: "2000-06-15".to_string(),
        time: "12:00".to_string(),
        longitude: Some(116.4),
        utc_offset_hours: Some(8.0),
        sex: Sex::Male,
    };
    c.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&record), (2000, 2060), 12).unwrap())
    });
}

criterion_group!(benches, bench_compute_chart);
criterion_main!(benches);
