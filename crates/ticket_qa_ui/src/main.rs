//! ticket-qa: ask the support Q&A endpoint a question from the terminal.
//! Reads config, submits the question through the controller, prints the
//! rendered answer markup and related tickets to stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ticket_qa_client::{config, Client, Config};
use ticket_qa_ui::{MemoryPage, QuestionController, SubmitOutcome};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ticket-qa", about = "Ask a question and list related support tickets")]
struct Cli {
    /// Config file (default: ~/.ticket-qa/config.yaml).
    #[arg(long, env = "TICKET_QA_CONFIG")]
    config: Option<PathBuf>,

    /// Server base URL; overrides `server.base_url`.
    #[arg(long)]
    url: Option<String>,

    /// Question text. Read from the first line of stdin when omitted.
    question: Option<String>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => config::load_default().context("failed to load default config")?,
    };
    if let Some(url) = &cli.url {
        cfg.server.base_url = Some(url.clone());
    }
    Ok(cfg)
}

fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cfg.logging.filter.as_deref().unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_question(cli: &Cli) -> Result<String> {
    if let Some(q) = &cli.question {
        return Ok(q.clone());
    }
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read question from stdin")?;
    Ok(line)
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;
    init_logging(&cfg);

    let question = read_question(&cli)?;
    let client = Client::from_config(&cfg).context("invalid server configuration")?;
    tracing::debug!(endpoint = %client.endpoint(), "using endpoint");

    let page = MemoryPage::new(cfg.ui.submit_label());
    let controller =
        QuestionController::new(client, page.surfaces()).with_busy_label(cfg.ui.busy_label());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create runtime")?;
    let outcome = rt.block_on(controller.submit(&question));
    let state = page.snapshot();

    match outcome {
        SubmitOutcome::Rendered => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", state.content)?;
            writeln!(out, "\nRelated tickets:")?;
            writeln!(out, "{}", state.tickets)?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected => {
            for notice in &state.notices {
                eprintln!("Error: {}", notice);
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Failed | SubmitOutcome::Busy => {
            eprintln!("{}", state.content);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
