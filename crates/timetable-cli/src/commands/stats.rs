//! Schedule statistics command.

use chrono::Local;
use clap::Args;
use timetable_core::stats;

#[derive(Args)]
pub struct StatsArgs {
    /// Re-print statistics once per minute until interrupted
    #[arg(long)]
    watch: bool,
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;

    loop {
        // Read-only query; re-running it each minute mirrors the view's
        // periodic stats refresh.
        let snapshot = stats::snapshot(&store.all(), Local::now());
        println!("{}", serde_json::to_string_pretty(&snapshot)?);

        if !args.watch {
            return Ok(());
        }
        std::thread::sleep(std::time::Duration::from_secs(60));
    }
}
