//! grapheus - CLI entry point.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grapheus::config::{load_api_key, load_style_guide};
use grapheus::git::{commit_staged, staged_diff};
use grapheus::llm::{GeminiClient, MessageGenerator, build_request};
use grapheus::review::{EditorBridge, ReviewOutcome, review_message};

/// Generate a commit message for the staged changes and review it interactively.
#[derive(Parser, Debug)]
#[command(name = "grapheus")]
#[command(about = "Generate a commit message for staged changes with Gemini")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    // Ctrl-C ends the session without committing anything.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nInterrupted. No commit was made.");
            std::process::exit(1);
        }
    });

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\nError: {e:#}\n");
            ExitCode::FAILURE
        }
    }
}

/// Run the whole pipeline once. Returns `true` only when a commit was created.
async fn run() -> Result<bool> {
    let workdir = Path::new(".");

    // Step 1: Configuration
    let api_key = load_api_key().context("A Gemini API key is required")?;
    let style_guide = load_style_guide(workdir).context("A commit style guide is required")?;

    // Step 2: Staged changes
    let diff = staged_diff(workdir)?;
    println!("Found {} bytes of staged changes", diff.len());

    // Step 3: Generate the initial candidate
    let request = build_request(&style_guide, &diff);
    let client = GeminiClient::new(api_key);

    println!("Generating a commit message with Gemini...");
    let candidate = client
        .generate(&request)
        .await
        .context("Failed to generate a commit message")?;

    // Step 4: Review loop
    let editor = EditorBridge::resolve();
    let stdin = io::stdin();
    let outcome = review_message(&mut stdin.lock(), &mut io::stdout(), &editor, candidate)
        .context("Review session ended unexpectedly")?;

    // Step 5: Commit
    match outcome {
        ReviewOutcome::Approved(message) => Ok(commit_staged(workdir, &message)),
        ReviewOutcome::Rejected => Ok(false),
    }
}
