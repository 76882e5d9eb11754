use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use wannier_nnkp::interfaces::SpinChannel;
use wannier_nnkp::io::{read_win, win_file_name, write_nnkp, NnkpDocument};
use wannier_nnkp::neighbours::{resolve_mode, CalculationMode, NeighborGraphBuilder};

#[derive(Parser)]
#[command(name = "win2nnkp")]
#[command(about = "Generate the .nnkp nearest-neighbour k-point file of a Wannier90 case")]
#[command(version)]
struct Cli {
    /// Case name: reads <CASE>.win, writes <CASE>.nnkp
    case: String,

    /// Spin polarized calculation (up component), reads <CASE>.winup
    #[arg(short = 'u', long = "up", conflicts_with = "dn")]
    up: bool,

    /// Spin polarized calculation (dn component), reads <CASE>.windn
    #[arg(short = 'd', long = "dn")]
    dn: bool,

    /// Compute the Berry phase along the closed k-path k(1) -> ... -> k(n) -> k(1)+G[DIR]
    /// given by the k-point list. DIR is 0 (no translation, the default), 1, 2 or 3.
    #[arg(
        short = 'w',
        long = "wloop",
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "0",
        value_parser = clap::value_parser!(i64).range(0..=3)
    )]
    wloop: Option<i64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

impl Cli {
    fn spin(&self) -> SpinChannel {
        match (self.up, self.dn) {
            (true, _) => SpinChannel::Up,
            (_, true) => SpinChannel::Down,
            _ => SpinChannel::Unpolarized,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting win2nnkp v{}", wannier_nnkp::VERSION);
    info!("case_name={}", cli.case);

    let win_path = win_file_name(&cli.case, cli.spin());
    let input = read_win(&win_path)
        .with_context(|| format!("Failed to read {}", win_path.display()))?;

    let mode = resolve_mode(
        &input.mp_grid,
        cli.wloop.is_some(),
        cli.wloop.unwrap_or(0),
        input.kpoints.len() as i64,
    )
    .with_context(|| format!("Invalid calculation setup in {}", win_path.display()))?;

    match &mode {
        CalculationMode::Grid { dimensions, .. } => {
            info!("Grid calculation on a {} k-mesh", dimensions);
            if dimensions.total() != input.kpoints.len() {
                warn!(
                    "mp_grid has {} points but the k-point list has {}",
                    dimensions.total(),
                    input.kpoints.len()
                );
            }
        }
        CalculationMode::Path { length, closure } => {
            info!(
                "Closed k-path of {} points, k({}) -> k(1) + G{:?}",
                length,
                length,
                closure.translation()
            );
        }
    }

    let neighbours = NeighborGraphBuilder::new().with_mode(mode).build()?;

    let nnkp_path = PathBuf::from(format!("{}.nnkp", cli.case));
    let document = NnkpDocument {
        timestamp: Local::now().naive_local(),
        real_lattice: &input.real_lattice,
        recip_lattice: &input.recip_lattice,
        kpoints: &input.kpoints,
        neighbours_per_kpoint: mode.neighbours_per_kpoint(),
        neighbours: &neighbours,
    };
    write_nnkp(&nnkp_path, &document)
        .with_context(|| format!("Failed to write {}", nnkp_path.display()))?;

    info!(
        "Wrote {} neighbour records to {}",
        neighbours.len(),
        nnkp_path.display()
    );
    Ok(())
}
