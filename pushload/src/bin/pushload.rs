use std::{io, net::SocketAddr};

use clap::Parser;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use pushload::{
    config::{self, Config},
    driver::{self, Driver},
};
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Push driver returned an error: {0}")]
    Driver(#[from] driver::Error),
    #[error("Failed to install prometheus recorder: {0}")]
    Prometheus(#[from] BuildError),
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// number of push events to send, non-numeric input sends none; flags go
    /// before it
    #[clap(
        default_value = "0",
        value_parser = config::parse_iterations,
        allow_hyphen_values = true
    )]
    iterations: u64,
    /// seed for the event generator, drawn at random when absent
    #[clap(long)]
    seed: Option<u64>,
    /// address to expose prometheus metrics on
    #[clap(long)]
    prometheus_addr: Option<SocketAddr>,
    /// ignored, extra positional input does not stop a run
    #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

async fn inner_main(config: Config, prometheus_addr: Option<SocketAddr>) -> Result<(), Error> {
    if let Some(addr) = prometheus_addr {
        PrometheusBuilder::new().with_http_listener(addr).install()?;
        info!("serving prometheus metrics on {addr}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = Driver::new(config).spin(&mut out).await?;
    info!(
        "sent {iterations} push events, {failed} failed",
        iterations = summary.iterations,
        failed = summary.failed
    );
    Ok(())
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish()
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Starting pushload {} run with seed {seed}.", env!("CARGO_PKG_VERSION"));

    let config = Config::new(args.iterations, seed);
    let runtime = Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .build()?;
    runtime.block_on(inner_main(config, args.prometheus_addr))
}
