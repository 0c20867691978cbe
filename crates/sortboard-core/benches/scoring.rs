use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortboard_core::board::Board;
use sortboard_core::model::{Catalog, Phase, Task, ZoneId};
use sortboard_core::scoring::score_board;
use sortboard_core::shuffle::fisher_yates;

fn make_catalog(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| Task {
                id: format!("t{i}"),
                label: format!("Task number {i}"),
                phase: Phase::ALL[i % Phase::ALL.len()],
            })
            .collect(),
    )
}

/// A board with every card dropped into some phase zone, deterministically.
fn make_scattered_board(n: usize) -> Board {
    let catalog = make_catalog(n);
    let ids: Vec<String> = catalog.tasks().iter().map(|t| t.id.clone()).collect();
    let mut board = Board::unshuffled(catalog);
    for (i, id) in ids.iter().enumerate() {
        board.place(id, ZoneId::Phase(Phase::ALL[(i * 3) % Phase::ALL.len()]));
    }
    board
}

fn bench_score_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_board");

    for n in [25, 50, 200] {
        let board = make_scattered_board(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| score_board(black_box(&board)))
        });
    }

    group.finish();
}

fn bench_fisher_yates(c: &mut Criterion) {
    let mut group = c.benchmark_group("fisher_yates");
    let mut rng = StdRng::seed_from_u64(1);

    for n in [25u64, 200] {
        group.bench_function(format!("n={n}"), |b| {
            let items: Vec<u64> = (0..n).collect();
            b.iter(|| {
                let mut items = items.clone();
                fisher_yates(black_box(&mut items), &mut rng);
                items
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_board, bench_fisher_yates);
criterion_main!(benches);
