//! A simple test program that grows a random fractal curve.
//!
//! This refines a fragment a few times and outputs an SVG. Pass a seed as
//! the first argument for a reproducible curve. Set `RUST_LOG=debug` to see
//! each refinement step.

use kurbo::Affine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use fragment::{Fragment, RngSampler, Variant};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>().expect("seed must be an integer"))
        .unwrap_or(0);
    let mut sampler = RngSampler(StdRng::seed_from_u64(seed));
    const DEPTH: usize = 4;
    let mut frag = Fragment::new(Variant::Tame, 1.0, 0.0, 3, &mut sampler);
    let template = frag.clone();
    if let Err(e) = frag.refine_times(DEPTH, &mut sampler) {
        eprintln!("refinement stopped: {}", e);
    }
    info!(seed, hinges = frag.hinges().len(), "fractal generated");

    // Unit square to a 500x500 canvas, y pointing up.
    let a = Affine::new([500.0, 0.0, 0.0, -500.0, 0.0, 500.0]);
    let path = a * frag.to_bez_path();
    println!(
        r##"<!DOCTYPE html>
    <html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        path.to_svg()
    );
    for pt in template.hinges() {
        let pt = a * *pt;
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>
    </html>"#
    );
}
