use std::time::Instant;

use clap::Parser;

use gradnoise::{noise_2d, noise_3d, noise_4d};

/// Render a plane slice of simplex noise as a grayscale image
#[derive(Parser)]
#[clap(name = "demo")]
struct Opts {
    /// Length of the sampled area's edges
    #[clap(short, default_value = "5.0")]
    scale: f64,
    /// Resolution of the output image
    #[clap(
        short,
        default_value = "512",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    resolution: usize,
    /// Dimension of the noise to slice (2, 3 or 4)
    #[clap(short, default_value = "2", value_parser = clap::value_parser!(u8).range(2..=4))]
    dimension: u8,
    /// Coordinate of the slice along the third axis
    #[clap(short, default_value = "0.0")]
    z: f64,
    /// Coordinate of the slice along the fourth axis
    #[clap(short, default_value = "0.0")]
    w: f64,
    /// Path of the PNG to write
    #[clap(short, default_value = "a.png")]
    output: String,
}

fn main() {
    let opts = Opts::parse();
    let mut pixels = Vec::with_capacity(opts.resolution * opts.resolution);

    let start = Instant::now();
    generate(&opts, &mut pixels);
    println!(
        "generated {} samples in {:?} ({:?} per sample)",
        pixels.len(),
        start.elapsed(),
        start.elapsed() / pixels.len() as u32
    );

    println!("encoding...");
    lodepng::encode_file(
        &opts.output,
        &pixels,
        opts.resolution,
        opts.resolution,
        lodepng::ColorType::GREY,
        8,
    )
    .unwrap();
}

fn generate(opts: &Opts, pixels: &mut Vec<u8>) {
    let step = opts.scale / opts.resolution as f64;
    for y in 0..opts.resolution {
        for x in 0..opts.resolution {
            let (px, py) = (x as f64 * step, y as f64 * step);
            let value = match opts.dimension {
                2 => noise_2d(px, py),
                3 => noise_3d(px, py, opts.z),
                _ => noise_4d(px, py, opts.z, opts.w),
            };
            pixels.push(((value + 1.0) * 255.0 / 2.0).clamp(0.0, 255.0) as u8);
        }
    }
}
