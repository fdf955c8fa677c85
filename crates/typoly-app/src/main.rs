mod cli;
mod headless;
mod scenario;

use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use typoly_common::{Rect, TypolyError};
use typoly_config::TypolyConfig;

use scenario::{Runner, Scenario};

const FALLBACK_DIRECTIVE: &str = "typoly=info";

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| FALLBACK_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    // Reports go to stdout; keep logs out of the way.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::Args, config: &TypolyConfig) -> Result<(), TypolyError> {
    let scenario = Scenario::load(Path::new(&args.scenario))?;
    let width = scenario.width.unwrap_or(args.width);
    info!(
        scenario = %args.scenario,
        steps = scenario.steps.len(),
        width,
        height = scenario.height,
        "replaying scenario"
    );

    let mut runner = Runner::new(config, Rect::new(0.0, 0.0, width, scenario.height));
    for (index, step) in scenario.steps.iter().enumerate() {
        runner
            .apply(step)
            .map_err(|e| TypolyError::Scenario(format!("step {index} ({}): {e}", step.name())))?;
        let report = runner.report(index, step.name());
        let line = if args.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| TypolyError::Other(format!("failed to encode report: {e}")))?;
        println!("{line}");
    }

    info!(groups = runner.workspace().group_count(), "scenario finished");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = typoly_config::load_config_from(args.config.as_deref().map(Path::new));
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => FALLBACK_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    info!("Typoly layout v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        warn!("Config load failed, using defaults: {e}");
        TypolyConfig::default()
    });

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
