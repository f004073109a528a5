//! CLI configuration for the TODO plugin service.

use clap::Parser;
use std::path::PathBuf;

/// Origin the consuming agent calls from; CORS is restricted to it.
pub const DEFAULT_AGENT_ORIGIN: &str = "https://chat.openai.com";

/// TODO plugin server configuration.
#[derive(Parser, Debug)]
#[command(name = "todo-plugin")]
#[command(about = "Per-user TODO list service with agent plugin discovery")]
#[command(version)]
pub struct Config {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Directory holding ai-plugin.json, openapi.yaml and logo.png
    /// (defaults to locating ./assets)
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Origin allowed to make cross-origin requests
    #[arg(long, default_value = DEFAULT_AGENT_ORIGIN)]
    pub agent_origin: String,
}
