use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use waveloom_core::{sample_frame, SamplerConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Wave packet batch sampler")]
struct Args {
    /// Simulation time of the first frame
    #[arg(long, default_value_t = 0.0)]
    time: f64,
    /// Number of frames to sample
    #[arg(long, default_value_t = 1)]
    steps: usize,
    /// Time advance per frame
    #[arg(long, default_value_t = 0.01)]
    dt: f64,
    #[arg(long, default_value = "gated-interference")]
    preset: String,
    /// Dump the final frame as CSV on stdout
    #[arg(long)]
    csv: bool,
    #[arg(short, long)]
    verbose: bool,
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    let config = preset_config(&args.preset);
    tracing::debug!(preset = %args.preset, ?config, "sampling");

    let mut last = None;
    for step in 0..args.steps.max(1) {
        let t = args.time + step as f64 * args.dt;
        let frame = match sample_frame(t, &config) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::error!(%err, "sampling failed");
                return ExitCode::FAILURE;
            }
        };
        let prob = frame.probability_density();
        let (peak_index, peak) = prob
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .expect("frame is never empty");
        tracing::info!(
            "t={:.3} window_center={:.3} peak={:.4} at x={:.3}",
            t,
            frame.window_center,
            peak,
            frame.positions[peak_index]
        );
        last = Some(frame);
    }

    if args.csv {
        let frame = last.expect("at least one frame was sampled");
        let prob = frame.probability_density();
        println!("x,re,im,prob");
        for i in 0..frame.len() {
            println!(
                "{},{},{},{}",
                frame.positions[i], frame.real[i], frame.imag[i], prob[i]
            );
        }
    }

    ExitCode::SUCCESS
}

fn preset_config(name: &str) -> SamplerConfig {
    let mut config = SamplerConfig::default();
    match name.to_lowercase().as_str() {
        "single-packet" => {
            config.interference.enabled = false;
            config.phase_gate.enabled = false;
        }
        "beating-pair" => {
            config.phase_gate.enabled = false;
        }
        "phase-gate" => {
            config.interference.enabled = false;
        }
        "slow-wide" => {
            config.packet.amplitude = 1.0;
            config.packet.sigma = 2.5;
            config.packet.k0 = 1.0;
            config.interference.enabled = false;
            config.phase_gate.enabled = false;
        }
        _ => {}
    }
    config
}
