// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cordage_ops::group::group_by;
use cordage_ops::intersect::intersection;
use cordage_ops::map::map;
use cordage_ops::reduce::{Seed, reduce};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(len: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(0..1_000)).collect()
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| map(black_box(Some(values)), |_, value| value * 2));
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                reduce(black_box(Some(values)), Seed::Value(0), |memo, _, value| {
                    memo + value
                })
            });
        });
    }
    group.finish();
}

fn bench_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");
    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| group_by(black_box(Some(values)), |value: &i64| value % 16));
        });
    }
    group.finish();
}

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection");
    for size in SIZES {
        let a = random_values(size);
        let b = random_values(size);
        let c2 = random_values(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(a, b, c2),
            |bencher, (a, b, c2)| {
                bencher.iter(|| {
                    intersection(black_box(&[a.as_slice(), b.as_slice(), c2.as_slice()]))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_map,
    bench_reduce,
    bench_group_by,
    bench_intersection
);
criterion_main!(benches);
