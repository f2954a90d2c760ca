use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math_functions2d::{Function2D, GoldsteinPrice, TestFunction2D};
use ndarray::{Array, IxDyn};

fn plotting_grid(n: usize) -> ndarray::ArrayD<f64> {
    let step = 4.0 / (n - 1) as f64;
    Array::from_shape_fn(IxDyn(&[2, n, n]), |idx| {
        let k = if idx[0] == 0 { idx[2] } else { idx[1] };
        -2.0 + step * k as f64
    })
}

fn bench_cost_grid(c: &mut Criterion) {
    let grid = plotting_grid(200);
    for f in Function2D::ALL {
        c.bench_function(&format!("cost_grid_200/{}", f.name()), |b| {
            b.iter(|| black_box(f.cost(black_box(grid.view())).unwrap()))
        });
    }
}

fn bench_goldstein_price_derivatives(c: &mut Criterion) {
    let grid = plotting_grid(200);

    c.bench_function("goldstein_price_grad_200", |b| {
        b.iter(|| black_box(GoldsteinPrice.grad(black_box(grid.view())).unwrap()))
    });

    c.bench_function("goldstein_price_hess_200", |b| {
        b.iter(|| black_box(GoldsteinPrice.hess(black_box(grid.view())).unwrap()))
    });
}

criterion_group!(benches, bench_cost_grid, bench_goldstein_price_derivatives);
criterion_main!(benches);
