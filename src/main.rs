use cidr_calculator::cli::{self, Cli};
use cidr_calculator::config::Limits;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let cli = Cli::parse();
    let out = cli::run(&cli.command, Limits::from_env())?;
    println!("{out}");

    Ok(())
}
