use clap::Parser;

fn main() {
    if let Err(err) = pragma_feeds_cli::run(pragma_feeds_cli::args::Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
