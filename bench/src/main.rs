use anyhow::Result;
use clap::{Parser, Subcommand};
use ipranges_bench::config::{BenchConfig, GenerateConfig};
use ipranges_bench::generate::generate;
use ipranges_bench::harness::bench;
use std::time::Instant;

/// Compares lookup strategies for sets of IPs: compacted ranges vs. individual values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct App {
    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Builds every strategy from the known IPs and times the lookup of the requested IPs.
    Bench(BenchConfig),
    /// Generates random known and requested IPs.
    Generate(GenerateConfig),
}

fn main() -> Result<()> {
    let args = App::parse();

    let log_level = match &args.command {
        // per-query verdicts are emitted at the debug level
        Command::Bench(config) if config.debug => args.log_level.max(tracing::Level::DEBUG),
        _ => args.log_level,
    };
    // logs go to stderr, stdout is reserved for the report
    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &args.command {
        Command::Bench(config) => {
            let mut out = std::io::stdout().lock();
            bench(config, &mut out)?;
        }
        Command::Generate(config) => generate(config)?,
    }
    Ok(())
}
