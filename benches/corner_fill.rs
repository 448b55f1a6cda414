//! Benchmarks for bridge discovery and corner filling.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use quilt::prelude::*;

fn create_marked_ring(n: usize, stride: usize) -> MeshStore {
    let positions: Vec<Point3<f64>> = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            Point3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect();
    let edges: Vec<[usize; 2]> = (0..n).map(|i| [i, (i + 1) % n]).collect();

    let mut mesh = build_from_elements(&positions, &edges, &[]).unwrap();
    for i in (0..n).step_by(stride) {
        mesh.mark(VertexId::new(i), true);
    }
    mesh
}

fn bench_find_bridges(c: &mut Criterion) {
    let mesh = create_marked_ring(1024, 8);

    c.bench_function("find_bridges_ring_1024", |b| {
        b.iter(|| find_bridges(&mesh));
    });
}

fn bench_corner_fill(c: &mut Criterion) {
    c.bench_function("corner_fill_ring_256", |b| {
        b.iter(|| {
            let mut mesh = create_marked_ring(256, 4);
            corner_fill(&mut mesh, &FillOptions::new()).unwrap()
        });
    });

    c.bench_function("corner_fill_ring_1024", |b| {
        b.iter(|| {
            let mut mesh = create_marked_ring(1024, 8);
            corner_fill(&mut mesh, &FillOptions::new()).unwrap()
        });
    });
}

criterion_group!(benches, bench_find_bridges, bench_corner_fill);
criterion_main!(benches);
