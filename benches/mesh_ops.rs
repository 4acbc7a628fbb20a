//! Benchmarks for mesh operations.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use sulcus::algo::{flatten, gaussian_blur, BlurOptions, FlattenOptions};
use sulcus::mesh::{AdjacencyGraph, SurfaceMesh};

fn create_grid_mesh(n: usize) -> SurfaceMesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    // Create triangles
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push(vec![v00, v10, v11]);
            faces.push(vec![v00, v11, v01]);
        }
    }

    SurfaceMesh::new(vertices, faces).unwrap()
}

fn bench_adjacency(c: &mut Criterion) {
    let mesh = create_grid_mesh(50);

    c.bench_function("adjacency_build_grid_50x50", |b| {
        b.iter(|| AdjacencyGraph::build(&mesh).unwrap());
    });
}

fn bench_blur(c: &mut Criterion) {
    let mesh = create_grid_mesh(50);
    let graph = AdjacencyGraph::build(&mesh).unwrap();
    let options = BlurOptions::default().with_fwhm(2.0).sequential();

    c.bench_function("gaussian_blur_grid_50x50", |b| {
        b.iter(|| gaussian_blur(&mesh, &graph, &options));
    });
}

fn bench_flatten(c: &mut Criterion) {
    let mesh = create_grid_mesh(50);
    let graph = AdjacencyGraph::build(&mesh).unwrap();
    let options = FlattenOptions::default()
        .with_iterations(30)
        .sequential();

    c.bench_function("flatten_grid_50x50_30_iters", |b| {
        b.iter(|| {
            let mut working = mesh.clone();
            flatten(&mut working, &graph, &options).unwrap()
        });
    });
}

criterion_group!(benches, bench_adjacency, bench_blur, bench_flatten);
criterion_main!(benches);
