use clap::{Parser, Subcommand};
use reqwest::header::ACCEPT;
use std::path::PathBuf;

use vendor_dispatch::config::{load_config, ServerConfig};
use vendor_dispatch::http::versions::{build_dispatcher, describe};
use vendor_dispatch::versioning::{VENDOR_PREFIX, VERSION_SEPARATOR};

#[derive(Parser)]
#[command(name = "vendor-cli")]
#[command(about = "Probe and inspect a vendor dispatch server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a request with a vendor Accept header
    Probe {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,

        #[arg(long, default_value = "gecker.io")]
        vendor: String,

        /// Version suffix; omitted means the server default
        #[arg(long)]
        version: Option<String>,

        #[arg(short, long, default_value = "/")]
        path: String,
    },
    /// Print the configured version table
    Versions {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn accept_value(vendor: &str, version: Option<&str>) -> String {
    match version {
        Some(v) => format!("{}{}{}{}", VENDOR_PREFIX, vendor, VERSION_SEPARATOR, v),
        None => format!("{}{}", VENDOR_PREFIX, vendor),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Probe { url, vendor, version, path } => {
            let accept = accept_value(&vendor, version.as_deref());
            let res = reqwest::Client::new()
                .get(format!("{}{}", url.trim_end_matches('/'), path))
                .header(ACCEPT, &accept)
                .send()
                .await?;

            println!("Accept: {}", accept);
            println!("Status: {}", res.status());
            println!("{}", res.text().await?);
        }
        Commands::Versions { config } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => ServerConfig::default(),
            };
            let dispatcher = build_dispatcher(&config.vendor)?;
            println!("{}", serde_json::to_string_pretty(&describe(&dispatcher))?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_value() {
        assert_eq!(accept_value("gecker.io", None), "application/vnd.gecker.io");
        assert_eq!(accept_value("gecker.io", Some("v1")), "application/vnd.gecker.io-v1");
    }

    #[test]
    fn test_probe_arguments() {
        let cli = Cli::try_parse_from(["vendor-cli", "probe", "--vendor", "acme.com", "--version", "v2"]).unwrap();
        match cli.command {
            Commands::Probe { url, vendor, version, path } => {
                assert_eq!(url, "http://localhost:8080");
                assert_eq!(vendor, "acme.com");
                assert_eq!(version.as_deref(), Some("v2"));
                assert_eq!(path, "/");
            }
            Commands::Versions { .. } => panic!("expected probe"),
        }
    }
}
