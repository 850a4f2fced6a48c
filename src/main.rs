use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use std::io::Write;
use std::path::Path;

mod config;
mod data;
mod error;
mod geo;
mod graph;
mod network;
mod report;

#[derive(Parser, Debug)]
#[clap(
    name = "airline-network-auditor",
    about = "Audits airline route networks for geographically implausible outlier stations"
)]
struct Cli {
    /// Path to the POR best-known-so-far reference CSV ('^'-delimited)
    #[clap(long)]
    por: String,

    /// Path to the airline details CSV
    #[clap(long)]
    airlines: String,

    /// Path to the flight-leg frequency CSV
    #[clap(long)]
    legs: String,

    /// Max-to-average distance ratio at which a sub-network is flagged
    #[clap(long, default_value = "7.0")]
    dist_ratio: f64,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging, loop-edge notices and per-component statistics
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting airline route network audit");

    // 1. Load the three reference feeds
    let coords = data::csv::load_coordinate_index(Path::new(&args.por))?;
    let airline_names = data::csv::load_airline_names(Path::new(&args.airlines))?;
    let legs = data::csv::load_flight_legs(Path::new(&args.legs))?;

    // 2. Build one route graph per airline, plus the station tallies
    let (graphs, loop_notices) = graph::builder::build(&legs);
    let tallies = graph::builder::tally(&legs);

    log::info!(
        "Built {} airline route graphs ({} loop legs excluded)",
        graphs.len(),
        loop_notices.len()
    );

    if args.verbose {
        for (airline, stations) in &tallies {
            let summary = stations
                .iter()
                .map(|(code, freq)| format!("{code}:{freq}"))
                .join(", ");
            log::debug!("[{airline}] station tally: {summary}");
        }
    }

    // 3. Decompose the networks and detect outlier stations
    let audit_config = config::AuditConfig::new(args.dist_ratio, args.verbose);

    // Loop-edge notices surface ahead of the audit findings, and only
    // in verbose mode
    let mut reports = Vec::new();
    if args.verbose {
        reports.extend(loop_notices);
    }
    reports.extend(network::detection::audit_airlines(
        &graphs,
        &coords,
        &airline_names,
        &audit_config,
    ));

    // 4. Render the reports, one JSON object per line
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        serde_json::to_writer(&mut out, report)?;
        writeln!(out)?;
    }

    log::info!("Audit complete: {} reports emitted", reports.len());

    Ok(())
}
