use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use enes_cli::cli::Args;
use enes_cli::cli::commands::{show_config, translate};
use enes_cli::config::{ConfigManager, EnvConfig, ResolveOptions, resolve_config};
use enes_cli::output::{self, OutputConfig};
use enes_cli::translation::{FallbackError, print_languages};
use enes_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.verbose, args.no_color));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Translation failures carry their own user-facing wording.
            let message = if err.is::<FallbackError>() {
                err.to_string()
            } else {
                format!("{err:#}")
            };
            eprintln!("{}", Style::error(message));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    if args.list_languages {
        print_languages();
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let file_config = manager.load()?;

    let options = ResolveOptions {
        local_url: args.local_url,
        default_url: args.default_url,
        no_local_short: args.no_local_short,
        short_threshold: args.short_threshold,
        timeout_secs: args.timeout,
    };
    let config = resolve_config(&options, &EnvConfig::from_env(), &file_config)?;

    if args.show_config {
        show_config::print_config(&config, manager.config_path());
        return Ok(());
    }

    let options = translate::TranslateOptions {
        text: args.text,
        source: args.source,
        target: args.target,
        api_url: args.api_url,
    };
    translate::run_translate(options, &config).await
}
