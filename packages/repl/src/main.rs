use clap::Parser;

use metagen_repl::Config;

fn main() {
    let config = Config::parse();
    config.init_logging();

    if let Err(e) = metagen_repl::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
