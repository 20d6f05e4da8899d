use clap::Parser;

use crate::translation::Language;

#[derive(Parser, Debug)]
#[command(name = "enes")]
#[command(about = "Translate text between English and Spanish (auto-detect by default)")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads from stdin if not provided)
    pub text: Option<String>,

    /// Source language (defaults to auto-detect)
    #[arg(short = 's', long, value_enum)]
    pub source: Option<Language>,

    /// Target language (defaults to the opposite of the source)
    #[arg(short = 't', long, value_enum)]
    pub target: Option<Language>,

    /// LibreTranslate API URL; always used when set
    #[arg(short = 'u', long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Local LibreTranslate URL preferred for short texts [env: LT_LOCAL_URL] [default: http://localhost:5000]
    #[arg(long, value_name = "URL")]
    pub local_url: Option<String>,

    /// Default LibreTranslate URL [env: LT_DEFAULT_URL] [default: https://libretranslate.com]
    #[arg(long, value_name = "URL")]
    pub default_url: Option<String>,

    /// Never prefer the local server for short texts (or set LT_DISABLE_LOCAL_SHORT=1)
    #[arg(long)]
    pub no_local_short: bool,

    /// Maximum word count sent to the local server [env: LT_LOCAL_SHORT_THRESHOLD] [default: 200]
    #[arg(long, value_name = "N")]
    pub short_threshold: Option<usize>,

    /// HTTP request timeout in seconds [env: LT_TIMEOUT] [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print endpoint selection and fallback details to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show the resolved configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// List supported language codes and exit
    #[arg(long)]
    pub list_languages: bool,
}
