//! Reads fragment parameters from a JSON file, refines, and writes the
//! resulting fragment as JSON.
//!
//! ```text
//! cargo run --example json --features serde -- params.json 3
//! ```
//!
//! where `params.json` looks like `{"variant": "UniformX", "num": 3}`.

use serde_::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use fragment::{Fragment, FragmentParams, RngSampler};

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_")]
struct Job {
    #[serde(flatten)]
    params: FragmentParams,
    #[serde(default)]
    depth: usize,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let mut job: Job = serde_json::from_str(&data).unwrap();
    if let Some(depth) = args.next() {
        job.depth = depth.parse().expect("depth must be an integer");
    }

    let mut sampler = RngSampler(rand::thread_rng());
    let mut frag = Fragment::from_params(&job.params, &mut sampler);
    if let Err(e) = frag.refine_times(job.depth, &mut sampler) {
        eprintln!("refinement stopped: {}", e);
    }
    println!("{}", serde_json::to_string_pretty(&frag).unwrap());
}
