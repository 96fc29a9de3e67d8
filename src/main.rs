//! Grabtune CLI entry point

use std::process::ExitCode;

use clap::Parser;

use grabtune::cli::{
    app::{load_merged_config, run_batch},
    args::{Cli, Commands},
    check_cmd::run_check,
    clean_cmd::run_clean,
    watch_cmd::run_watch,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Merge config: CLI/env values override the config file.
    let config = load_merged_config(cli.to_config()).await;

    match cli.command {
        Commands::Run { file } => run_batch(&file, &config).await,
        Commands::Watch { file } => run_watch(&file, &config).await,
        Commands::Check { dir } => run_check(&dir).await,
        Commands::Clean { dir } => run_clean(&dir),
    }
}
