use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use typeahead::core::config::{self, CliOverrides};
use typeahead::core::dictionary;
use typeahead::tui;

#[derive(Parser)]
#[command(name = "typeahead", about = "Type with frequency-ranked word completion")]
struct Args {
    /// Word list used to seed suggestions
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Quiet period before a suggestion appears, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Where to write the debug log (the terminal is busy with the session)
    #[arg(long, default_value = "typeahead.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - stdout belongs to the session
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("typeahead: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cli = CliOverrides {
        dictionary: args.dictionary,
        debounce_ms: args.debounce_ms,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Typeahead starting up with {:?}", resolved);

    let trie = match dictionary::load(&resolved.dictionary_path) {
        Ok(trie) => trie,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("typeahead: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(&resolved, trie).await {
        Ok(stats) => {
            println!(
                "{} words learned, {} completions accepted",
                stats.words_learned, stats.commits
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("typeahead: {e}");
            ExitCode::FAILURE
        }
    }
}
