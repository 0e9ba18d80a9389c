// search binary, looks for a Toffoli circuit implementing the Fredkin gate
use clap::Parser;
use std::io;
use toffoli_search::common::Result;
use toffoli_search::generate::generate;
use toffoli_search::logging::init_console_subscriber;
use toffoli_search::search::{search, SearchConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Give up after this many candidates.
    #[clap(short, long)]
    limit: Option<usize>,

    /// Only print the circuit that was found.
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_console_subscriber();
    let args = Args::parse();
    let config = SearchConfig {
        limit: args.limit,
        verbose: !args.quiet,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // The outcome is logged by the search itself.
    search(generate(), &config, &mut out)?;
    Ok(())
}
