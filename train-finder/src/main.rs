use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use train_finder::cli::{self, Outcome};
use train_finder::config::FinderConfig;
use train_finder::finder::TrainFinder;
use train_finder::records::JsonFileSource;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FinderConfig::from_env();
    info!(path = %config.data_path.display(), "using train dataset");

    let source = JsonFileSource::new(&config.data_path);
    let finder = TrainFinder::with_config(source, &config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match cli::run(stdin.lock(), stdout.lock(), &finder) {
        Ok(Outcome::Trains(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Failed(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
