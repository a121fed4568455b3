use criterion::{Criterion, black_box, criterion_group, criterion_main};
use polyvoid::{Domain, Point, VoidField, VoidFieldConfig};

const GRID: usize = 64;

fn make_field() -> VoidField {
    let config = VoidFieldConfig {
        invalue: 1.0,
        outvalue: 0.0,
        int_width: 0.4,
        num_corner_voids: 2,
        corner_radius: 1.0,
        corner_spacing: 1.0,
        num_face_voids: 3,
        face_radius: 1.0,
        face_spacing: 1.0,
        max_tries: 10000,
        ..Default::default()
    };
    let centers = vec![
        [3.0, 4.0, 0.0],
        [13.0, 5.0, 0.0],
        [7.0, 12.0, 0.0],
        [17.0, 15.0, 0.0],
        [5.0, 17.0, 0.0],
    ];
    let domain = Domain::planar([0.0, 0.0], [20.0, 20.0], [true, true]);
    let mut field = VoidField::new(config, centers, domain).expect("valid config");
    field.initialize().expect("feasible layout");
    field
}

fn query_grid() -> Vec<Point> {
    let mut points = Vec::with_capacity(GRID * GRID);
    for i in 0..GRID {
        for j in 0..GRID {
            points.push([
                i as f64 * 20.0 / GRID as f64,
                j as f64 * 20.0 / GRID as f64,
                0.0,
            ]);
        }
    }
    points
}

fn benchmark_initialize(c: &mut Criterion) {
    c.bench_function("initialize_5_grains_5_voids", |b| {
        b.iter(|| {
            let field = make_field();
            black_box(field.face_centers().len());
        })
    });
}

fn benchmark_value_grid(c: &mut Criterion) {
    let field = make_field();
    let points = query_grid();

    c.bench_function(&format!("value_{}x{}_grid", GRID, GRID), |b| {
        b.iter(|| {
            for p in &points {
                black_box(field.value(black_box(p)));
            }
        })
    });

    c.bench_function(&format!("values_parallel_{}x{}_grid", GRID, GRID), |b| {
        b.iter(|| {
            black_box(field.values(black_box(&points)));
        })
    });
}

fn benchmark_gradient_grid(c: &mut Criterion) {
    let field = make_field();
    let points = query_grid();

    c.bench_function(&format!("gradient_{}x{}_grid", GRID, GRID), |b| {
        b.iter(|| {
            for p in &points {
                black_box(field.gradient(black_box(p)));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_initialize,
    benchmark_value_grid,
    benchmark_gradient_grid
);
criterion_main!(benches);
