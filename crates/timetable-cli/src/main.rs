use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "timetable-cli", version, about = "Timetable CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Class management
    Class {
        #[command(subcommand)]
        action: commands::class::ClassAction,
    },
    /// Day agenda and week grid views
    Show {
        #[command(subcommand)]
        action: commands::show::ShowAction,
    },
    /// Schedule statistics
    Stats(commands::stats::StatsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Class { action } => commands::class::run(action),
        Commands::Show { action } => commands::show::run(action),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
