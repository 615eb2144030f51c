//! Terminal frontend for the drug-effects simulator.
//!
//! Examples:
//!   synaptica-cli list
//!   synaptica-cli info cocaina
//!   synaptica-cli levels alcohol
//!   synaptica-cli simulate nicotina --ticks 40 --seed 7
//!   synaptica-cli simulate alcohol --realtime
//!
//! Unknown drug keys fall back to alcohol unless `--strict` is given.
//! Log verbosity follows `RUST_LOG`, or `-v` / `-vv`.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use synaptica::levels::levels;
use synaptica::profile::profile;
use synaptica::render::{render_drug_list, render_frame, render_levels, render_profile};
use synaptica::settings::Settings;
use synaptica::simulator::{RandomSource, RngSource, SynapseSimulator};
use synaptica::{DrugId, Result};

#[derive(Debug, Parser)]
#[command(name = "synaptica-cli", version, about = "Drug effects on the synapse, in the terminal")]
struct Cli {
    /// JSON settings document.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject unknown drug keys instead of falling back to alcohol.
    #[arg(long, global = true)]
    strict: bool,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available substances.
    List,
    /// Describe a substance and its mechanism of action.
    Info { drug: String },
    /// Compare neurotransmitter levels against the baseline.
    Levels { drug: String },
    /// Run the synapse animation.
    Simulate {
        drug: String,
        /// Number of ticks to run (0 = until Ctrl-C, only with --realtime).
        #[arg(long, default_value_t = 25)]
        ticks: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Tick at the configured cadence instead of back-to-back.
        #[arg(long)]
        realtime: bool,
        /// Only print the final frame.
        #[arg(long)]
        quiet: bool,
        #[arg(long, default_value_t = 60)]
        width: usize,
        #[arg(long, default_value_t = 14)]
        height: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct FrameView {
    width: usize,
    height: usize,
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Command::List => {
            print!("{}", render_drug_list(None));
        }
        Command::Info { drug } => {
            let drug = resolve_drug(&drug, cli.strict)?;
            print!("{}", render_profile(profile(drug)));
        }
        Command::Levels { drug } => {
            let drug = resolve_drug(&drug, cli.strict)?;
            print!("{}", render_levels(levels(drug)));
        }
        Command::Simulate {
            drug,
            ticks,
            seed,
            realtime,
            quiet,
            width,
            height,
        } => {
            let drug = resolve_drug(&drug, cli.strict)?;
            let view = FrameView {
                width,
                height,
                quiet,
            };
            let mut sim = SynapseSimulator::with_settings(drug, settings.simulation);
            let mut rng = match seed {
                Some(s) => RngSource(StdRng::seed_from_u64(s)),
                None => RngSource(StdRng::from_entropy()),
            };

            sim.play();
            if realtime {
                run_realtime(&mut sim, &mut rng, ticks, view).await;
            } else {
                for _ in 0..ticks {
                    sim.tick(&mut rng);
                    if !view.quiet {
                        print!("{}", render_frame(&sim, view.width, view.height));
                    }
                }
            }
            sim.pause();

            if view.quiet {
                print!("{}", render_frame(&sim, view.width, view.height));
            }
            info!(
                ticks = sim.tick_count(),
                signals = sim.signals().len(),
                interferents = sim.interferents().len(),
                "simulation finished"
            );
        }
    }
    Ok(())
}

fn resolve_drug(key: &str, strict: bool) -> Result<DrugId> {
    if strict {
        return key.parse();
    }
    match key.parse::<DrugId>() {
        Ok(drug) => Ok(drug),
        Err(e) => {
            warn!("{e}; showing {}", DrugId::FALLBACK);
            Ok(DrugId::FALLBACK)
        }
    }
}

/// Ticks on a timer until `ticks` have run or Ctrl-C arrives. The interval
/// is dropped on return, so no tick fires after the loop exits.
async fn run_realtime(
    sim: &mut SynapseSimulator,
    rng: &mut impl RandomSource,
    ticks: u64,
    view: FrameView,
) {
    let period = Duration::from_millis(u64::from(sim.settings().tick_interval_ms.max(1)));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                sim.tick(rng);
                if !view.quiet {
                    // Clear screen and home the cursor between frames.
                    print!("\x1b[2J\x1b[H{}", render_frame(sim, view.width, view.height));
                    let _ = std::io::stdout().flush();
                }
            }
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
        }
        if ticks != 0 && sim.tick_count() >= ticks {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(default_filter(0), "info");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(4), "trace");
    }

    #[test]
    fn lenient_resolution_falls_back_on_exact_mismatch() {
        assert_eq!(resolve_drug("Cocaina", false).unwrap(), DrugId::FALLBACK);
        assert!(resolve_drug("Cocaina", true).is_err());
        assert_eq!(resolve_drug("cocaina", true).unwrap(), DrugId::Cocaina);
    }
}
