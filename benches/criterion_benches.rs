#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use slide_solver::config::Strategy;
use slide_solver::level::Level;
use slide_solver::{LoadLevel, Solve, DEFAULT_LEVEL};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_default_dfs(c: &mut Criterion) {
    let level: Level = DEFAULT_LEVEL.parse().unwrap();
    bench_level(c, Strategy::DepthFirst, "default", level, 100);
}

#[allow(unused)]
fn bench_default_bfs(c: &mut Criterion) {
    let level: Level = DEFAULT_LEVEL.parse().unwrap();
    bench_level(c, Strategy::BreadthFirst, "default", level, 100);
}

#[allow(unused)]
fn bench_default_ucs(c: &mut Criterion) {
    let level: Level = DEFAULT_LEVEL.parse().unwrap();
    bench_level(c, Strategy::UniformCost, "default", level, 100);
}

#[allow(unused)]
fn bench_two_players_bfs(c: &mut Criterion) {
    // explores most of the state space before finding the goal
    let level = "levels/two-players.txt".load_level().unwrap();
    bench_level(c, Strategy::BreadthFirst, "two-players", level, 50);
}

#[allow(unused)]
fn bench_no_solution_dfs(c: &mut Criterion) {
    let level = "levels/no-solution.txt".load_level().unwrap();
    bench_level(c, Strategy::DepthFirst, "no-solution", level, 100);
}

fn bench_level(c: &mut Criterion, strategy: Strategy, name: &str, level: Level, samples: usize) {
    c.bench(
        &format!("{}", strategy),
        Benchmark::new(name, move |b| {
            b.iter(|| {
                criterion::black_box(
                    level.solve(criterion::black_box(strategy), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_default_dfs,
    bench_default_bfs,
    bench_default_ucs,
    bench_two_players_bfs,
    //bench_no_solution_dfs,
);
criterion_main!(benches);
