extern crate rand;
extern crate zipgen;

#[macro_use]
extern crate log;

use std::env;
use std::process;

use log::Log;

use zipgen::config;
use zipgen::logger::init_logger;
use zipgen::output::generate_dataset;
use zipgen::Error;

fn run(args: &[String]) -> Result<(), Error> {
    let program = args.first().map(|p| p.as_str()).unwrap_or("zipgen");

    let config = match config::load(args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print!("{}", config::usage(program));
            return Ok(());
        }
        Err(err) => {
            eprint!("{}", config::usage(program));
            return Err(err);
        }
    };

    init_logger(config.log_level, config.log_file.as_ref().map(|p| p.as_str()))?;
    info!("Logging initialized, processing command line options.");
    info!("Received option: output_file = {}", config.output_file);
    info!("Received option: log_level = {}", config.log_level);
    info!("Received option: log_file = {}",
          config.log_file.as_ref().map(|p| p.as_str()).unwrap_or("stderr"));

    let mut rng = rand::thread_rng();
    generate_dataset(&config.output_file, &mut rng)?;
    log::logger().flush();
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
