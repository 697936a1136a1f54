use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use quiz_bank::config::{DEFAULT_QUESTIONS_PATH, LogSettings};
use quiz_bank::{QuestionSource, Quiz, QuizConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Initial number of questions to draw (clamped to the bank size)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for the question sampler, for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging (needs --log-file)
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> QuizConfig {
        QuizConfig {
            questions: self.questions.clone(),
            count: self.count,
            seed: self.seed,
        }
    }
}

/// RUST_LOG wins over the defaults, but without a log file nothing more
/// detailed than `warn` is written so the quiz screens stay clean.
fn init_logging(args: &Args) -> Result<(), std::io::Error> {
    let settings = LogSettings {
        verbose: args.verbose,
        to_file: args.log_file.is_some(),
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    let writer = match &args.log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!settings.to_file)
        .finish()
        .with(settings.ceiling())
        .init();

    if args.verbose && !settings.to_file {
        tracing::warn!("--verbose has no effect without --log-file");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error opening log file: {}", e);
        return ExitCode::FAILURE;
    }

    let config = args.config();
    let source = QuestionSource::new(&config.questions);
    let store = match source.load() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load questions: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        path = %source.path().display(),
        questions = store.len(),
        "question bank ready"
    );

    if let Err(e) = Quiz::new(store, &config).run() {
        eprintln!("Error running quiz: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
