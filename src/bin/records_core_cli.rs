use std::{io, process};

use records_core::{cli, config::ConfigManager, domain::SystemClock, init, render::Presenter};

fn main() {
    init();

    let config = ConfigManager::new().load_or_default();
    let presenter = Presenter::from_config(&config);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = cli::run(&mut handle, &presenter, &SystemClock) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
