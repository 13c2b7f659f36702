use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lecture_scribe::{format_timestamp, write_srt, write_vtt, Segment};

fn make_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            Segment::new(
                i as f64 * 3.0,
                (i + 1) as f64 * 3.0,
                format!("Lecture segment {} covering the current topic in detail", i + 1),
            )
        })
        .collect()
}

fn bench_timestamp_formatting(c: &mut Criterion) {
    c.bench_function("format_timestamp", |b| {
        b.iter(|| {
            black_box(format_timestamp(black_box(0.0)));
            black_box(format_timestamp(black_box(3661.9996)));
            black_box(format_timestamp(black_box(86399.5)));
        })
    });
}

fn bench_subtitle_writers(c: &mut Criterion) {
    let small = make_segments(10);
    let large = make_segments(1000);

    c.bench_function("vtt_small_document", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            write_vtt(&mut buf, black_box(&small)).unwrap();
            black_box(buf)
        })
    });

    c.bench_function("vtt_large_document", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            write_vtt(&mut buf, black_box(&large)).unwrap();
            black_box(buf)
        })
    });

    c.bench_function("srt_small_document", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            write_srt(&mut buf, black_box(&small)).unwrap();
            black_box(buf)
        })
    });

    c.bench_function("srt_large_document", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            write_srt(&mut buf, black_box(&large)).unwrap();
            black_box(buf)
        })
    });
}

criterion_group!(benches, bench_timestamp_formatting, bench_subtitle_writers);
criterion_main!(benches);
