use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::config::Config;
use crate::input::InputReader;
use crate::status;
use crate::translation::{
    EndpointSelection, FallbackController, FallbackError, Language, LibreTranslateClient,
    Prepared, Translator, count_words, prepare, select_endpoint,
};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub source: Option<Language>,
    pub target: Option<Language>,
    pub api_url: Option<String>,
}

pub async fn run_translate(options: TranslateOptions, config: &Config) -> Result<()> {
    let text = InputReader::read(options.text)?;

    let request = match prepare(&text, options.source, options.target)
        .map_err(FallbackError::Detection)?
    {
        Prepared::Done(output) => {
            status!("No translation needed");
            return write_output(&output);
        }
        Prepared::Request(request) => request,
    };

    let selection = select_endpoint(&request.text, options.api_url.as_deref(), config);
    log_selection(&selection, &request.text, config);
    status!("Translating {} -> {}", request.source, request.target);

    let client = LibreTranslateClient::new(
        config.default_url.clone(),
        config.api_key.clone(),
        config.timeout,
    )
    .context("Failed to build HTTP client")?;
    let translator = Translator::new(client);
    let controller = FallbackController::new(&translator, &config.local_url);

    let spinner = Spinner::new("Translating...");
    let result = controller
        .run(
            &request.text,
            Some(request.source),
            Some(request.target),
            &selection,
            |err| {
                status!(
                    "{} {err}; retrying with {}",
                    Style::warning("Local endpoint failed:"),
                    translator.backend().default_url()
                );
                spinner.set_message("Retrying with default endpoint...");
            },
        )
        .await;
    spinner.stop();

    if let Err(FallbackError::Unreachable { source }) = &result {
        status!("{source}");
    }

    write_output(&result?)
}

fn log_selection(selection: &EndpointSelection, text: &str, config: &Config) {
    match selection {
        EndpointSelection::Explicit(url) => status!("Using endpoint {url}"),
        EndpointSelection::Local(url) => status!(
            "Using local endpoint {url} ({} words <= {})",
            count_words(text),
            config.short_threshold
        ),
        EndpointSelection::Default => status!("Using default endpoint {}", config.default_url),
    }
}

fn write_output(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
