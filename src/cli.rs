use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hanstrix-gateway")]
#[command(about = "AI assistant gateway for the Hanstrix Technologies website")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bind address, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overrides the config file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
