use clap::{ArgAction, Parser};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use salute::logging::{init_logging, LoggingConfig};
use salute::{GreetingSnapshot, MemoryDom, Salute, SaluteConfig, SaluteError};

#[derive(Parser, Debug)]
#[command(name = "salute")]
#[command(version)]
#[command(about = "Greet someone formally or informally in English or Spanish")]
#[command(after_help = "Examples:
  salute --first Jane --last Doe              Hello Jane!
  salute --first Jane --last Doe --formal     Greetings Jane Doe
  salute --first Maria --last Garcia --lang es --login")]
struct Cli {
    /// Last name
    #[arg(long, short)]
    last: Option<String>,

    /// First name
    #[arg(long, short)]
    first: Option<String>,

    /// Language code (en, es)
    #[arg(long = "lang", value_name = "CODE")]
    language: Option<String>,

    /// Use the formal greeting
    #[arg(long, conflicts_with = "informal")]
    formal: bool,

    /// Use the informal greeting (overrides the config file)
    #[arg(long)]
    informal: bool,

    /// Also print the login notice
    #[arg(long)]
    login: bool,

    /// Write the greeting into this element and print the element
    #[arg(long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Print the profile as JSON instead of plain lines
    #[arg(long)]
    json: bool,

    /// Path to a TOML config file
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress log output
    #[arg(long, short)]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonOutput {
    #[serde(flatten)]
    profile: GreetingSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    login: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    elements: Vec<(String, String)>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            match err.downcast_ref::<SaluteError>() {
                Some(SaluteError::UnsupportedLanguage(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => SaluteConfig::load(path)?,
        None => SaluteConfig::default(),
    };

    let language = cli.language.unwrap_or(config.language);
    let formal = if cli.formal {
        true
    } else if cli.informal {
        false
    } else {
        config.formal
    };
    let login = cli.login || config.login;
    let selector = cli.selector.or(config.selector);

    let dom = Arc::new(MemoryDom::new());
    let mut handle = Salute::new().with_dom_writer(dom.clone());
    handle = if cli.json {
        handle.without_sink()
    } else {
        handle.with_sink(Arc::new(|line: &str| println!("{}", line)))
    };

    let mut profile = handle.create(
        cli.last.as_deref(),
        cli.first.as_deref(),
        Some(language.as_str()),
    )?;

    match &selector {
        Some(selector) => {
            profile.set_element_greeting(selector, formal)?;
        }
        None => {
            profile.greet(formal);
        }
    }
    if login {
        profile.log();
    }

    if cli.json {
        let output = JsonOutput {
            profile: profile.snapshot(),
            login: login.then(|| profile.login_notice()),
            elements: dom.entries(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (selector, text) in dom.entries() {
            println!("{} = {}", selector, text);
        }
    }

    Ok(())
}
