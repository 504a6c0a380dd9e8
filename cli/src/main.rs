mod commands;
mod terminal;

use commands::{CommandLine, Commands, scan};
use scansheet_core::{names, unscanned};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let quiet: bool = commands.quiet;

    logging::init_logging(quiet);
    print::banner(quiet);

    match commands.command {
        Commands::Scan(args) => {
            print::header("starting scanner", quiet);
            let input = args.input()?;
            scan::scan(input, &args.to_config(quiet)).await
        }
        Commands::Extract { source, output } => {
            print::header("extracting site names", quiet);
            names::extract(&source, output.as_deref()).map(|_| ())
        }
        Commands::Backfill { json, source, export } => {
            print::header("filling site names", quiet);
            names::backfill(&json, &source, &export).map(|_| ())
        }
        Commands::Unscanned { source, export } => {
            print::header("collecting hosts without ports", quiet);
            unscanned::extract_unscanned(&source, &export).map(|_| ())
        }
    }
}
