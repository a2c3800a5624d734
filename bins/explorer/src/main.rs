//! Spendscope explorer
//!
//! Loads a JSON file of raw transactions, then reads navigation commands
//! from stdin and prints every resulting view as one line of JSON.
//!
//! Besides the navigation commands (`drill-time 4`, `up-time year`,
//! `drill-cat Food`, `up-cat all`, `clear-cat`, `toggle`) it accepts
//! `export stats`, `export rows`, `reset`, and `quit`.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spendscope_core::export::{statistics_export, transaction_rows};
use spendscope_core::navigation::TransitionOutcome;
use spendscope_core::{
    AggregationCache, AggregationResult, Breadcrumbs, Locale, NavigationState, Navigator,
    TransactionSet, breadcrumbs,
};
use spendscope_shared::config::LogFormat;
use spendscope_shared::{AppConfig, AppError};

/// One rendered view.
#[derive(Serialize)]
struct View<'a> {
    state: &'a NavigationState,
    breadcrumbs: Breadcrumbs,
    result: &'a AggregationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<String>,
}

struct Session {
    transactions: TransactionSet,
    cache: AggregationCache,
    navigator: Navigator,
    locale: Locale,
}

impl Session {
    fn write_view(&self, out: &mut impl Write, rejected: Option<String>) -> anyhow::Result<()> {
        let state = self.navigator.state();
        let result = self.cache.aggregate(&self.transactions, state, self.locale);
        let view = View {
            state,
            breadcrumbs: breadcrumbs(state, self.locale),
            result: &result,
            rejected,
        };
        write_json(out, &view)
    }

    fn write_statistics(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let state = self.navigator.state();
        let result = self.cache.aggregate(&self.transactions, state, self.locale);
        write_json(out, &statistics_export(&result, state, self.locale))
    }

    fn write_rows(&self, out: &mut impl Write) -> anyhow::Result<()> {
        write_json(out, &transaction_rows(&self.transactions, self.navigator.state()))
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(error = %err, code, "explorer failed");
            eprintln!("spendscope: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    let locale: Locale = config
        .engine
        .locale
        .parse()
        .map_err(|e| AppError::Config(format!("engine.locale: {e}")))?;

    let path = std::env::args()
        .nth(1)
        .or_else(|| config.data.transactions_path.clone())
        .ok_or_else(|| {
            AppError::Input(
                "no transaction file given (argument or SPENDSCOPE__DATA__TRANSACTIONS_PATH)"
                    .into(),
            )
        })?;
    let transactions = load_transactions(&path)?;
    info!(
        path = %path,
        transactions = transactions.len(),
        excluded = transactions.excluded_count(),
        %locale,
        "transactions loaded"
    );

    let mut session = Session {
        transactions,
        cache: AggregationCache::with_config(
            config.engine.cache_capacity,
            config.engine.cache_ttl_secs,
        ),
        navigator: Navigator::starting_at(Local::now().date_naive()),
        locale,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.write_view(&mut out, None)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "export stats" => session.write_statistics(&mut out)?,
            "export rows" => session.write_rows(&mut out)?,
            "reset" => {
                session.navigator.reset(Local::now().date_naive());
                session.write_view(&mut out, None)?;
            }
            command => {
                let rejected = match session.navigator.apply_text(command) {
                    TransitionOutcome::Applied => None,
                    TransitionOutcome::Rejected(err) => Some(err.to_string()),
                };
                session.write_view(&mut out, rejected)?;
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.log.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

fn load_transactions(path: &str) -> Result<TransactionSet, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| AppError::Input(format!("{path}: {e}")))?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| AppError::Input(format!("{path}: {e}")))?;
    Ok(TransactionSet::from_json_values(records))
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode output")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
