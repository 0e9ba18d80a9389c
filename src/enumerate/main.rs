// enumerate binary, prints the first circuits of the search space
use clap::Parser;
use std::io;
use toffoli_search::common::Result;
use toffoli_search::generate::generate;
use toffoli_search::logging::init_console_subscriber;
use toffoli_search::search::enumerate;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of circuits to print.
    #[clap(short, long, default_value_t = 10)]
    count: usize,
}

fn main() -> Result<()> {
    init_console_subscriber();
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    enumerate(generate(), args.count, &mut out)?;
    Ok(())
}
