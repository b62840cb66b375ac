use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gridfill",
    version,
    about = "Fetches missing Steam library covers from SteamGridDB",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Steam Web API key.
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    pub steam_api_key: Option<String>,

    /// 17-digit Steam id of the account.
    #[arg(long, env = "STEAM_ID64")]
    pub steam_id: Option<String>,

    /// SteamGridDB API key.
    #[arg(long, env = "SGDB_API_KEY", hide_env_values = true)]
    pub sgdb_api_key: Option<String>,

    /// Steam install directory.
    #[arg(long, value_name = "PATH")]
    pub steam_path: Option<PathBuf>,

    /// Directory covers are written to.
    #[arg(long, value_name = "PATH")]
    pub grid_dir: Option<PathBuf>,

    /// Items processed at once per phase.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// SteamGridDB grid styles, comma separated.
    #[arg(long)]
    pub styles: Option<String>,

    /// Keep any readable image instead of applying the size check.
    #[arg(long)]
    pub accept_any_size: bool,

    /// Open the Steam API key page in a browser if no key is set.
    #[arg(long)]
    pub open_key_page: bool,

    /// List missing covers without downloading anything.
    #[arg(long)]
    pub dry_run: bool,
}
