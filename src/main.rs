// s3vdu: A tool for reporting current and non-current version usage in S3.
#![forbid(unsafe_code)]
use anyhow::{
    anyhow,
    Result,
};
use clap::ArgMatches;
use s3vdu::common::ClientConfig;
use s3vdu::progress::Progress;
use s3vdu::{
    report,
    s3,
};
use std::io;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

// Scan the bucket named on the command line and print its report.
async fn stats(matches: &ArgMatches) -> Result<()> {
    // clap enforces that BUCKET is present, an empty string is caught by
    // ClientConfig.
    let bucket = matches.get_one::<String>("BUCKET")
        .map(String::as_str)
        .unwrap_or_default();

    let prefix = matches.get_one::<String>("PREFIX")
        .map(String::as_str);

    let config = ClientConfig::new(bucket, prefix)?;

    debug!("stats: {:?}", config);

    let client   = s3::Client::new().await;
    let progress = Progress::spinner();

    let summary = report::run(&client, &config, &progress).await?;

    println!("{}", summary);

    Ok(())
}

async fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some((cli::STATS_COMMAND, sub)) => stats(sub).await,
        Some((name, _)) => Err(anyhow!("unknown subcommand '{}'", name)),
        None            => Err(anyhow!("no subcommand given")),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so stdout only ever carries the report. Nothing but
    // errors is logged unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = cli::parse_args();

    if let Err(e) = run(&matches).await {
        eprintln!("Error: {:#}", e);

        process::exit(cli::FAILURE_EXIT_CODE);
    }
}
