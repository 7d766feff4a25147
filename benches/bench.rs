use std::array;

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use gradnoise::{Simplex2d, Simplex3d, Simplex4d};

fn simplex_2d(bench: &mut Bencher) {
    gradnoise::initialize();
    bench.iter(|| {
        let x = array::from_fn::<f64, 8, _>(|i| black_box(0.5 + i as f64 * 0.2));
        let y = x;
        let mut out = [0.0; 8];
        sample_2d([&x, &y], &mut out);
        black_box(out);
    });
}

fn simplex_3d(bench: &mut Bencher) {
    gradnoise::initialize();
    bench.iter(|| {
        let x = array::from_fn::<f64, 8, _>(|i| black_box(0.5 + i as f64 * 0.2));
        let y = x;
        let z = x;
        let mut out = [0.0; 8];
        sample_3d([&x, &y, &z], &mut out);
        black_box(out);
    });
}

fn simplex_4d(bench: &mut Bencher) {
    gradnoise::initialize();
    bench.iter(|| {
        let x = array::from_fn::<f64, 8, _>(|i| black_box(0.5 + i as f64 * 0.2));
        let y = x;
        let z = x;
        let w = x;
        let mut out = [0.0; 8];
        sample_4d([&x, &y, &z, &w], &mut out);
        black_box(out);
    });
}

benchmark_group!(benches, simplex_2d, simplex_3d, simplex_4d);
benchmark_main!(benches);

#[inline(always)]
fn sample_2d(x: [&[f64]; 2], out: &mut [f64]) {
    const G: Simplex2d = Simplex2d::new();
    for ((x, y), out) in x[0].iter().zip(x[1]).zip(out) {
        *out = G.sample([*x, *y]);
    }
}

#[inline(always)]
fn sample_3d(x: [&[f64]; 3], out: &mut [f64]) {
    const G: Simplex3d = Simplex3d::new();
    for (((x, y), z), out) in x[0].iter().zip(x[1]).zip(x[2]).zip(out) {
        *out = G.sample([*x, *y, *z]);
    }
}

#[inline(always)]
fn sample_4d(x: [&[f64]; 4], out: &mut [f64]) {
    const G: Simplex4d = Simplex4d::new();
    for ((((x, y), z), w), out) in x[0].iter().zip(x[1]).zip(x[2]).zip(x[3]).zip(out) {
        *out = G.sample([*x, *y, *z, *w]);
    }
}
