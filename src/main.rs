use phonebook::prelude::{AppError, Config, run_app};
use std::process::exit;

fn main() {
    if let Err(err) = start() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}

fn start() -> Result<(), AppError> {
    let config = Config::load()?;
    phonebook::logging::init(config.env_type);

    run_app(&config)
}
