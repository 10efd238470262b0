use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match3::core::{Grid, MatchDetector, SimpleRng, SwapController};
use tui_match3::types::{BoardConfig, Coord, TICK_MS};

fn bench_initialize(c: &mut Criterion) {
    let cfg = BoardConfig::default();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("initialize_8x8", |b| {
        b.iter(|| Grid::initialize(black_box(&cfg), &mut rng).unwrap())
    });
}

fn bench_all_matches(c: &mut Criterion) {
    let grid = Grid::initialize(&BoardConfig::default(), &mut SimpleRng::new(12345)).unwrap();
    let detector = MatchDetector::default();

    c.bench_function("all_matches_8x8", |b| {
        b.iter(|| detector.all_matches(black_box(&grid)))
    });
}

fn bench_swap(c: &mut Criterion) {
    let mut grid = Grid::initialize(&BoardConfig::default(), &mut SimpleRng::new(12345)).unwrap();
    let a = grid.id_at(Coord::new(3, 3)).unwrap();
    let b = grid.id_at(Coord::new(3, 4)).unwrap();

    c.bench_function("grid_swap", |bench| {
        bench.iter(|| grid.swap(black_box(a), black_box(b)).unwrap())
    });
}

fn bench_swap_cycle(c: &mut Criterion) {
    let cfg = BoardConfig::default();
    let grid = Grid::initialize(&cfg, &mut SimpleRng::new(12345)).unwrap();
    let mut ctl = SwapController::new(grid, cfg.swap_duration_ms);

    // Select, swap, then tick until the swap is accepted or swapped back.
    c.bench_function("swap_cycle", |b| {
        b.iter(|| {
            ctl.select(Coord::new(0, 0)).unwrap();
            ctl.select(Coord::new(1, 0)).unwrap();
            while ctl.is_animating() {
                ctl.tick(black_box(TICK_MS)).unwrap();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_initialize,
    bench_all_matches,
    bench_swap,
    bench_swap_cycle
);
criterion_main!(benches);
