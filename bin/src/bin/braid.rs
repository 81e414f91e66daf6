use braid_bin::{
    cli::{Cli, Command},
    commands,
};
use braid_log::LogConfig;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let _log_guard = braid_log::init(LogConfig {
        log_file_path: cli.log_file,
    })
    .unwrap_or_else(|e| {
        eprintln!("Error: failed to initialize logging: {e}");
        std::process::exit(1);
    });

    let result = match cli.command {
        Command::Concat { parts } => commands::concat::handle(&parts),
        Command::Slice { text, start, end } => commands::slice::handle(&text, start, end),
        Command::Index { text, index } => commands::index::handle(&text, index),
    };

    if let Err(e) = result {
        eprintln!("Command failed: {e}");
        std::process::exit(1);
    }
}
