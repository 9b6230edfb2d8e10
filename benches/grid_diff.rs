use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_anim::grid::{Grid, SimpleRng};
use tui_anim::types::Cell;

const W: u16 = 200;
const H: u16 = 60;

fn sparse_variant(base: &Grid, changes: u32, rng: &mut SimpleRng) -> Grid {
    let mut g = base.clone();
    for _ in 0..changes {
        let x = rng.next_range(W as u32) as i32;
        let y = rng.next_range(H as u32) as i32;
        g.put(x, y, Cell::from_char('#'), false);
    }
    g
}

fn bench_diff(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let front = Grid::new(W, H);
    let back_sparse = sparse_variant(&front, 100, &mut rng);
    let back_dense = sparse_variant(&front, (W as u32) * (H as u32), &mut rng);

    c.bench_function("diff_sparse_100_changes", |b| {
        b.iter(|| black_box(&front).diff(black_box(&back_sparse)).unwrap().count())
    });

    c.bench_function("diff_dense", |b| {
        b.iter(|| black_box(&front).diff(black_box(&back_dense)).unwrap().count())
    });
}

fn bench_copy_from(c: &mut Criterion) {
    let src = Grid::new(W, H);
    let mut dst = Grid::new(W, H);

    c.bench_function("copy_from_full_grid", |b| {
        b.iter(|| dst.copy_from(black_box(&src)).unwrap())
    });
}

fn bench_scroll(c: &mut Criterion) {
    let mut rng = SimpleRng::new(7);
    let base = sparse_variant(&Grid::new(W, H), 2000, &mut rng);

    c.bench_function("scroll_one_row", |b| {
        b.iter(|| {
            let mut g = base.clone();
            g.scroll(black_box(1));
            g
        })
    });
}

criterion_group!(benches, bench_diff, bench_copy_from, bench_scroll);
criterion_main!(benches);
