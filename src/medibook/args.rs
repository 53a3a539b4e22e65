use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medibook")]
#[command(about = "Doctor appointment slot booking from the terminal", long_about = None)]
pub struct Cli {
    /// Directory to load config.json from (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}
