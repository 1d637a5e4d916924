use criterion::{black_box, criterion_group, criterion_main, Criterion};
use muhle_rules::core::{Board, Player, Position, RulesConfig, Variant};
use muhle_rules::movegen::generate_moves;
use muhle_rules::playout::random_game;

fn bench_movegen_startpos(c: &mut Criterion) {
    c.bench_function("movegen_startpos", |b| {
        let board = Board::new();
        b.iter(|| generate_moves(black_box(&board), Player::White, 0, Variant::Nine).len());
    });
}

fn bench_movegen_various_positions(c: &mut Criterion) {
    let positions = [
        ("placement_mills", "w:wa7,d7,b6,d6:ba1,d1,f2,f4:3", Variant::Nine),
        ("movement", "w:wa7,d7,g7,b6,c5,a4,f4,b2,d1:bd6,d5,e5,b4,c4,g4,c3,e3,g1:10", Variant::Nine),
        ("flying", "b:wa7,d7,f6,c5,e4,f2:bg1,d3,b4:30", Variant::Nine),
        ("twelve_movement", "w:wa7,d7,b6,d6,c5,a4,c4,e4,c3,b2,a1:bg7,f6,d5,e5,b4,f4,g4,d3,e3,d2,f2:13", Variant::Twelve),
    ];

    for (name, text, variant) in positions {
        let position: Position = text.parse().expect("valid position string");

        c.bench_function(&format!("movegen_{name}"), |b| {
            b.iter(|| {
                generate_moves(
                    black_box(&position.board),
                    position.player,
                    position.plies,
                    variant,
                )
                .len()
            });
        });
    }
}

fn bench_random_playout(c: &mut Criterion) {
    let config = RulesConfig::default();
    c.bench_function("random_playout_nine", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            random_game(config, None, black_box(seed), 1_000)
                .map(|record| record.plies)
                .unwrap_or_default()
        });
    });
}

criterion_group!(
    benches,
    bench_movegen_startpos,
    bench_movegen_various_positions,
    bench_random_playout
);
criterion_main!(benches);
