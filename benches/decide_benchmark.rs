use autosnake::grid::{Cell, Grid};
use autosnake::heuristic::reachable_count;
use autosnake::obstacles::ObstacleSet;
use autosnake::policy::decide;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Snake folded back and forth over the top rows, head at the end of the
/// last fold, food in the far corner.
fn create_sample_board(size: usize, length: usize) -> (Grid, Vec<Cell>, Cell) {
    let grid = Grid::new(size, size);
    let mut body: Vec<Cell> = (0..length.min(size * (size - 1)))
        .map(|i| {
            let row = (i / size) as i32;
            let col = (i % size) as i32;
            let x = if row % 2 == 0 { col } else { size as i32 - 1 - col };
            Cell::new(x, row)
        })
        .collect();
    body.reverse();
    let target = Cell::new(size as i32 - 1, size as i32 - 1);
    (grid, body, target)
}

fn benchmark_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decide");

    for size in [11, 19, 30].iter() {
        for &length in &[3, 40, 150] {
            let (grid, body, target) = create_sample_board(*size, length);

            group.bench_function(format!("decide_{}x{}_len{}", size, size, length), |b| {
                b.iter(|| decide(black_box(&grid), black_box(&body), black_box(target)))
            });

            let obstacles = ObstacleSet::from_body(&body, true);
            group.bench_function(format!("flood_{}x{}_len{}", size, size, length), |b| {
                b.iter(|| reachable_count(black_box(&grid), black_box(body[0]), &obstacles))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_decide);
criterion_main!(benches);
