//! Hex Bounce entry point
//!
//! Headless frame loop: paces frames against the wall clock, steps the
//! simulation once per frame and optionally streams frame snapshots as JSON
//! lines for an external renderer.

use std::io::Write;
use std::time::{Duration, Instant};

use hex_bounce::SimConfig;
use hex_bounce::sim::{SimState, Snapshot, step};

const USAGE: &str = "usage: hex-bounce [--config PATH] [--frames N] [--seed N] [--fixed] [--dump]";

/// Command-line options
#[derive(Debug)]
struct Options {
    config: Option<String>,
    frames: u64,
    seed: Option<u64>,
    /// Step with exact 1/fps instead of measured wall-clock deltas
    fixed: bool,
    /// Write one JSON snapshot per frame to stdout
    dump: bool,
    /// Print usage and exit
    help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: None,
            frames: 600,
            seed: None,
            fixed: false,
            dump: false,
            help: false,
        }
    }
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut opts = Self::default();
        let mut args = args.skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => opts.config = Some(args.next().ok_or("--config needs a path")?),
                "--frames" => {
                    let value = args.next().ok_or("--frames needs a number")?;
                    opts.frames = value
                        .parse()
                        .map_err(|_| format!("invalid frame count: {value}"))?;
                }
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a number")?;
                    opts.seed = Some(value.parse().map_err(|_| format!("invalid seed: {value}"))?);
                }
                "--fixed" => opts.fixed = true,
                "--dump" => opts.dump = true,
                "-h" | "--help" => opts.help = true,
                other => return Err(format!("unknown argument: {other}\n{USAGE}")),
            }
        }
        Ok(opts)
    }
}

/// Holds the loop to a target frame rate and reports the real elapsed time
struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    /// Sleep out the rest of the frame, then return seconds since the last call
    fn tick(&mut self) -> f32 {
        let spent = self.last.elapsed();
        if spent < self.frame {
            std::thread::sleep(self.frame - spent);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Hex Bounce (headless) starting...");

    let opts = Options::parse(std::env::args())?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut config = match &opts.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }

    let mut state = SimState::new(&config)?;
    let mut pacer = FramePacer::new(config.fps);
    let fixed_dt = config.frame_dt();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // The frame limit is the termination signal; it is only checked between steps
    for _ in 0..opts.frames {
        let measured = pacer.tick();
        let dt = if opts.fixed { fixed_dt } else { measured };
        step(&mut state, dt)?;

        if opts.dump {
            writeln!(out, "{}", Snapshot::capture(&state).to_json_line()?)?;
        }
    }
    out.flush()?;

    log::info!(
        "Done: {} ticks, {:.2}s simulated, {} impacts, final speed {:.1}",
        state.time_ticks,
        state.elapsed,
        state.impacts,
        state.ball.speed()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the product on wasm
}
