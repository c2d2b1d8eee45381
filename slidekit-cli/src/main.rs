//! slidekit CLI — headless slider tooling.
//!
//! Commands:
//! - `simulate` — replay a gesture script and print every outbound call
//! - `layout` — print tickmark pattern and label row for a track width
//! - `snap` — snap and clip a single value

mod script;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use slidekit_core::config;
use slidekit_core::mapper::{clip, snap_to_step};
use slidekit_core::tickmarks::{label_layout, labels_fit, tickmark_pattern};
use slidekit_core::{validate_step, SliderConfig};

#[derive(Parser)]
#[command(name = "slidekit", about = "slidekit CLI — slider value mapping and gesture replay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script against a headless slider.
    Simulate {
        /// Path to a gesture script (TOML).
        #[arg(long)]
        script: PathBuf,

        /// Path to a slider config (TOML). Defaults to built-in defaults.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit one JSON object per outbound call instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print tickmark pattern and label layout.
    Layout {
        /// Path to a slider config (TOML).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Track width in pixels.
        #[arg(long, default_value_t = 500.0)]
        width: f64,
    },
    /// Snap a value to the step grid and clip it to the range.
    Snap {
        value: f64,

        #[arg(long, default_value_t = config::DEFAULT_MIN, allow_hyphen_values = true)]
        min: f64,

        #[arg(long, default_value_t = config::DEFAULT_MAX, allow_hyphen_values = true)]
        max: f64,

        /// Step size; negative values fall back to the default.
        #[arg(long, default_value_t = config::DEFAULT_STEP, allow_hyphen_values = true)]
        step: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            script,
            config,
            json,
        } => run_simulate(&script, config.as_deref(), json),
        Commands::Layout { config, width } => run_layout(config.as_deref(), width),
        Commands::Snap {
            value,
            min,
            max,
            step,
        } => run_snap(value, min, max, step),
    }
}

fn load_config(path: Option<&Path>) -> Result<SliderConfig> {
    let Some(path) = path else {
        return Ok(SliderConfig::default());
    };
    let loaded = config::load(path).with_context(|| format!("loading {}", path.display()))?;
    if loaded.step.corrected {
        tracing::warn!(path = %path.display(), "step replaced with default {}", loaded.step.step);
    }
    Ok(loaded.config)
}

fn run_simulate(script_path: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let script = script::load(script_path)
        .with_context(|| format!("loading script {}", script_path.display()))?;

    let replay = script::replay(&script, config);

    for (i, (step, calls)) in replay.steps.iter().enumerate() {
        if json {
            for call in calls {
                println!("{}", serde_json::json!({ "step": i, "call": call }));
            }
        } else {
            println!("[{i}] {step:?}");
            for call in calls {
                println!("      {call}");
            }
        }
    }

    if !json {
        let v = replay.values;
        println!("final: single={} low={} high={}", v.single, v.low, v.high);
    }
    Ok(())
}

fn run_layout(config_path: Option<&Path>, width: f64) -> Result<()> {
    if width <= 0.0 {
        bail!("--width must be positive");
    }
    let config = load_config(config_path)?;

    match tickmark_pattern(&config) {
        Some(pattern) => {
            println!("tick count:      {}", pattern.tick_count());
            println!("repeat fraction: {}", pattern.repeat_fraction());
            println!("background:      {}", pattern.to_css());
        }
        None => println!("no tickmarks (continuous mode)"),
    }

    if !labels_fit(&config, width) {
        println!("labels:          skipped (narrower than 1px at width {width})");
        return Ok(());
    }
    match label_layout(&config, width) {
        Some(layout) => {
            println!(
                "labels:          {} (width {:.2}px, offset {:.2}px, row {:.2}px)",
                layout.len(),
                layout.label_width,
                layout.offset_left,
                layout.container_width
            );
            for label in &layout.labels {
                println!("  {:>10}  {:.4}", label.text, label.width_fraction);
            }
        }
        None => println!("labels:          off"),
    }
    Ok(())
}

fn run_snap(value: f64, min: f64, max: f64, step: f64) -> Result<()> {
    if max <= min {
        bail!("--max ({max}) must be greater than --min ({min})");
    }
    let validation = validate_step(step);
    if validation.corrected {
        eprintln!("step {step} invalid, using {}", validation.step);
    }
    let snapped = snap_to_step(value, validation.step, min);
    println!("{}", clip(snapped, min, max));
    Ok(())
}
