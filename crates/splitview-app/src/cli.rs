use clap::Parser;

/// SplitView, a side-panel embedded browser.
#[derive(Parser, Debug)]
#[command(name = "splitview", version, about)]
pub struct Args {
    /// Open this URL instead of the persisted or default one.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not read or write the persisted last-visited URL.
    #[arg(long)]
    pub no_persist: bool,

    /// Minimal panel: no spinner, no error modal, no persistence.
    #[arg(long)]
    pub minimal: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
