//! fxpad Console
//!
//! Terminal front end for the fxpad currency keypad.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxpad_common::{parse_timeout, Currency};
use fxpad_flags::{FlagLoader, FlagSet};
use fxpad_fx::{HttpRateProvider, OfflineRateProvider, RateProvider, RateStore};
use fxpad_keypad::{Converter, ConverterState};

mod command;
mod config;
mod render;
mod script;
mod session;

use config::AppConfig;
use render::TerminalView;
use script::Script;
use session::Session;

/// fxpad currency keypad
#[derive(Parser, Debug)]
#[command(name = "fxpad")]
#[command(about = "Currency conversion keypad with live rates and a static fallback")]
pub struct Args {
    /// Starting amount
    #[arg(short, long)]
    amount: Option<String>,

    /// Source currency code
    #[arg(short, long)]
    from: Option<Currency>,

    /// Target currency code
    #[arg(short, long)]
    to: Option<Currency>,

    /// Use the fallback rate table and placeholder flags, no network
    #[arg(long)]
    offline: bool,

    /// Skip flag downloads
    #[arg(long)]
    no_flags: bool,

    /// Rate document URL
    #[arg(long)]
    rates_url: Option<String>,

    /// Timeout for each startup request, in seconds
    #[arg(long, value_parser = timeout_arg)]
    timeout: Option<Duration>,

    /// Run commands separated by ';' and exit
    #[arg(short, long, conflicts_with = "script")]
    keys: Option<String>,

    /// Run a built-in script and exit
    #[arg(short, long)]
    script: Option<String>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn timeout_arg(value: &str) -> Result<Duration, String> {
    parse_timeout(value)
        .ok_or_else(|| format!("expected a positive number of seconds, got {value}"))
}

fn init_logging(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
    );

    // Logs go to stderr so they never interleave with the panel.
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)))
        .init();
}

/// Fetch flags, then rates. Each fails soft.
async fn startup(config: &AppConfig) -> (FlagSet, RateStore) {
    let flags = FlagLoader::new(config.flags.clone())
        .load_all(Currency::ALL)
        .await;

    let provider: Box<dyn RateProvider> = if config.fx.offline {
        Box::new(OfflineRateProvider)
    } else {
        match HttpRateProvider::new(&config.fx) {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                error!(error = %e, "Could not build rate client");
                Box::new(OfflineRateProvider)
            }
        }
    };
    let store = RateStore::fetch(provider.as_ref()).await;

    (flags, store)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env().with_args(&args);

    init_logging(&config.log_level, args.log_json);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    info!("Starting fxpad");

    // Network access happens only here; the runtime is dropped afterwards.
    let (flags, store) = {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(startup(&config))
    };

    let origin = store.origin().to_string();
    info!(origin = %origin, "Rates ready");

    let state = ConverterState::new(store.into_table(), &config.converter)?;
    let stdout = io::stdout().lock();
    let mut view = TerminalView::new(stdout, flags);
    view.message(&format!("Using {origin}"));
    let mut session = Session::new(Converter::new(state, view));

    if let Some(keys) = &args.keys {
        session.run_script(Script::parse("keys", keys)?);
    } else if let Some(name) = &args.script {
        let script = Script::load(name)?;
        info!(description = %script.description, "Loaded script");
        session.run_script(script);
    } else {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            session.execute(command::Command::Help);
        }
        session.run_interactive(stdin.lock())?;
    }

    info!(display = %session.converted_display(), "fxpad finished");
    session.into_writer().flush()?;
    Ok(())
}
