//! CLI definition and dispatch.

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_market_data::{CsvMarketDataAdapter, load_transactions};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report::JsonReportAdapter;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::analysis::{
    AnalysisReport, do_nothing_simulation, market_weather, persona_analysis, stock_indicators,
};
use crate::domain::date_range::DateRange;
use crate::domain::error::FolioscopeError;
use crate::domain::mood::MoodScore;
use crate::domain::transaction::Ticker;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

const DEFAULT_BENCHMARK: &str = "SPY";

#[derive(Parser, Debug)]
#[command(name = "folioscope", about = "Portfolio behavior and market mood analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current market weather
    Weather {
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Previous mood score, for trend direction
        #[arg(long)]
        previous_score: Option<i32>,
        #[arg(long)]
        json: bool,
    },
    /// Classify the trading persona behind a transaction history
    Persona {
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(short, long)]
        transactions: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Compare actual returns against buying the benchmark and doing nothing
    Simulate {
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(short, long)]
        transactions: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Compute technical indicators for one symbol
    Indicators {
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(short, long)]
        symbol: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Weather {
            data_dir,
            config,
            previous_score,
            json,
        } => run_weather(&data_dir, config.as_ref(), previous_score, json),
        Command::Persona {
            data_dir,
            transactions,
            config,
            json,
        } => run_persona(&data_dir, &transactions, config.as_ref(), json),
        Command::Simulate {
            data_dir,
            transactions,
            config,
            json,
        } => run_simulate(&data_dir, &transactions, config.as_ref(), json),
        Command::Indicators {
            data_dir,
            symbol,
            start,
            end,
            json,
        } => run_indicators(&data_dir, &symbol, start, end, json),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    let Some(path) = path else {
        return Ok(FileConfigAdapter::empty());
    };
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = FolioscopeError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn benchmark_from(config: &dyn ConfigPort) -> Result<Ticker, ExitCode> {
    let symbol = config
        .get_string("market", "benchmark")
        .unwrap_or_else(|| DEFAULT_BENCHMARK.to_string());
    Ticker::new(&symbol).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn print_report(report: &AnalysisReport, json: bool) -> ExitCode {
    let renderer: Box<dyn ReportPort> = if json {
        Box::new(JsonReportAdapter::new())
    } else {
        Box::new(TextReportAdapter::new())
    };
    match renderer.render(report) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn run_weather(
    data_dir: &PathBuf,
    config_path: Option<&PathBuf>,
    previous_score: Option<i32>,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let benchmark = match benchmark_from(&config) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let previous = previous_score.map(MoodScore::clamped);
    let port = CsvMarketDataAdapter::new(data_dir.clone());
    let report = market_weather(&port, &benchmark, previous, today());

    print_report(&AnalysisReport::Weather(report), json)
}

fn run_persona(
    data_dir: &PathBuf,
    transactions_path: &PathBuf,
    config_path: Option<&PathBuf>,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    // Config currently only carries the benchmark, which persona ignores,
    // but a bad config file should still fail loudly.
    let _ = config;

    let transactions = match load_transactions(transactions_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    let port = CsvMarketDataAdapter::new(data_dir.clone());
    let report = persona_analysis(&port, &transactions, today());

    print_report(&AnalysisReport::Persona(report), json)
}

fn run_simulate(
    data_dir: &PathBuf,
    transactions_path: &PathBuf,
    config_path: Option<&PathBuf>,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let benchmark = match benchmark_from(&config) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let transactions = match load_transactions(transactions_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    let port = CsvMarketDataAdapter::new(data_dir.clone());
    let report = do_nothing_simulation(&port, &transactions, &benchmark, today());

    print_report(&AnalysisReport::Simulation(report), json)
}

fn run_indicators(
    data_dir: &PathBuf,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    json: bool,
) -> ExitCode {
    let symbol = match Ticker::new(symbol) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };
    let range = match DateRange::new(start, end) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    let port = CsvMarketDataAdapter::new(data_dir.clone());
    let report = stock_indicators(&port, &symbol, &range);

    print_report(&AnalysisReport::Indicators(report), json)
}
