use clap::{Arg, Command};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Command::new("Weather Archiver")
        .version("1.0")
        .about("Archives current weather snapshots to S3")
        .subcommand(
            Command::new("archive")
                .about("Run one archive pass for the configured city")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("Sets a custom config file"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("archive", archive_matches)) => {
            let config_path = archive_matches
                .get_one::<String>("config")
                .map(|s| s.as_str())
                .unwrap_or("config/archiver.toml");
            println!("Starting weather archive run with config: {}", config_path);

            if let Err(e) = archiver::run_archive_pipeline(config_path).await {
                eprintln!("Archive run error: {}", e);
                process::exit(1);
            }
        }

        _ => {
            eprintln!("Please specify a valid subcommand");
            process::exit(1);
        }
    }
}
