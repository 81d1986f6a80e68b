//! Benchmark multi grid compression and queries.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use multi_grid::{CellId, GridSize, MultiGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random cells for benchmarking.
fn random_cells<const D: usize>(grid_size: GridSize<D>, n: usize, seed: u64) -> Vec<CellId<D>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut cell = [0; D];
            for (c, &extent) in cell.iter_mut().zip(&grid_size) {
                *c = rng.gen_range(0..extent);
            }
            cell
        })
        .collect()
}

fn filled_grid<const D: usize>(grid_size: GridSize<D>, cells: &[CellId<D>]) -> MultiGrid<D, u32> {
    let mut grid = MultiGrid::with_capacity(grid_size, cells.len()).unwrap();
    for (i, &cell) in cells.iter().enumerate() {
        grid.add(cell, i as u32).unwrap();
    }
    grid
}

fn bench_compress_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_2d");
    let grid_size = [256, 256];

    for num_entries in [1_000, 10_000, 100_000].iter() {
        let cells = random_cells(grid_size, *num_entries, 1);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_entries),
            num_entries,
            |b, _| {
                b.iter_batched(
                    || filled_grid(grid_size, &cells),
                    |mut grid| {
                        grid.compress().unwrap();
                        grid
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_compress_3d(c: &mut Criterion) {
    let grid_size = [64, 64, 64];
    let cells = random_cells(grid_size, 100_000, 2);

    c.bench_function("compress_3d_100k", |b| {
        b.iter(|| {
            let mut grid = filled_grid(grid_size, black_box(&cells));
            grid.compress().unwrap();
            black_box(grid)
        })
    });
}

fn bench_enumerate(c: &mut Criterion) {
    let grid_size = [128, 128];
    let cells = random_cells(grid_size, 50_000, 3);
    let mut grid = filled_grid(grid_size, &cells);
    grid.compress().unwrap();

    c.bench_function("enumerate_all_cells", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for y in 0..grid_size[1] {
                for x in 0..grid_size[0] {
                    let data = grid.enumerate_data(black_box([x, y])).unwrap();
                    total += data.len() as u64;
                }
            }
            black_box(total)
        })
    });
}

criterion_group!(
    benches,
    bench_compress_2d,
    bench_compress_3d,
    bench_enumerate
);
criterion_main!(benches);
