use clap::Parser;

/// Typoly layout driver: replays a pane-layout scenario headlessly and
/// prints the resulting geometry after every step.
#[derive(Parser, Debug)]
#[command(name = "typoly-layout", version, about)]
pub struct Args {
    /// Scenario file (TOML) to replay.
    pub scenario: String,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Container width when the scenario does not set one.
    #[arg(long, default_value_t = 1200.0)]
    pub width: f64,

    /// Pretty-print each JSON report.
    #[arg(long)]
    pub pretty: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
