//! Benchmarks comparing the direct evaluation of a correlation with
//! the interpolation in a precomputed table, and the cost of building
//! the table itself.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matprop::components::N2;
use matprop::tabulated::{TabulatedComponent, TabulationGrid};
use matprop_core::GasViscosity;
use num_dual::Dual64;

fn benchmark_evaluation(c: &mut Criterion) {
    let grid = TabulationGrid::new(250.0, 500.0, 200, 1e5, 1e7, 200).unwrap();
    let table = TabulatedComponent::new(N2, grid).with_gas_viscosity();

    let t = 321.3;
    let p = 3.7e6;

    let mut group = c.benchmark_group("gas_viscosity");
    group.bench_function("direct_f64", |b| b.iter(|| N2.gas_viscosity(t, p)));
    group.bench_function("tabulated_f64", |b| b.iter(|| table.gas_viscosity(t, p)));

    let td = Dual64::from_re(t).derivative();
    let pd = Dual64::from_re(p);
    group.bench_function("direct_dual", |b| b.iter(|| N2.gas_viscosity(td, pd)));
    group.bench_function("tabulated_dual", |b| {
        b.iter(|| table.gas_viscosity(td, pd))
    });
}

fn benchmark_tabulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabulation");
    for points in [50, 100, 200] {
        let grid = TabulationGrid::new(250.0, 500.0, points, 1e5, 1e7, points).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(points), &grid, |b, grid| {
            b.iter(|| TabulatedComponent::new(N2, grid.clone()).with_gas_viscosity())
        });
    }
}

criterion_group!(bench, benchmark_evaluation, benchmark_tabulation);
criterion_main!(bench);
