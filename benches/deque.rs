use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segmented_deque::SegmentedDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 10_000;
    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (PushFront 10k)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i));
                }
                d
            })
        });

        group.bench_function("SegmentedDeque", |b| {
            b.iter(|| {
                let mut d = SegmentedDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (Get 10k)");
        let d_std: VecDeque<_> = (0..n).collect();
        let d_seg: SegmentedDeque<_> = (0..n).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("SegmentedDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_seg.get(black_box(i)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (FIFO 10k)");
        group.bench_function("std::collections::VecDeque", |b| {
            let mut d: VecDeque<_> = (0..64).collect();
            b.iter(|| {
                for i in 0..n {
                    d.push_back(black_box(i));
                    black_box(d.pop_front());
                }
            })
        });

        group.bench_function("SegmentedDeque", |b| {
            let mut d: SegmentedDeque<_> = (0..64).collect();
            b.iter(|| {
                for i in 0..n {
                    d.push_back(black_box(i));
                    black_box(d.pop_front());
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("SegmentedDeque interior edits");
        group.bench_function("insert + erase middle", |b| {
            let mut d: SegmentedDeque<_> = (0..n).collect();
            b.iter(|| {
                d.insert(black_box(n / 3), 0).unwrap();
                d.erase(black_box(n / 3)..n / 3 + 1).unwrap();
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
