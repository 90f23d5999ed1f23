use std::io::IsTerminal;

use clap::Parser;
use gh_annotations::{
    run,
    Args,
    Destination,
};
use gh_annotations_core::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        logging::init_verbose();
    } else {
        logging::init();
    }

    let stdout = std::io::stdout();
    let destination = if stdout.is_terminal() {
        Destination::Terminal {
            width: crossterm::terminal::size()
                .ok()
                .map(|(columns, _)| usize::from(columns))
                .filter(|&columns| columns > 0),
        }
    } else {
        Destination::Pipe
    };

    if let Err(e) = run(&args, &mut stdout.lock(), destination).await {
        tracing::debug!("Aborting: {e:#}");
        return Err(e);
    }

    Ok(())
}
