use std::process::ExitCode;

use hsh::config::{Config, ConfigLoader};
use hsh::environment::Environment;
use hsh::error::ShellError;
use hsh::io::InputHandler;
use hsh::repl::Shell;

/// Exit code when the config file cannot be loaded.
const EXIT_CONFIG: u8 = 2;

fn load_config() -> Result<Config, ShellError> {
    match std::env::var_os("HSH_CONFIG") {
        Some(path) => Ok(ConfigLoader::load_from_file(path)?),
        None => Ok(ConfigLoader::default_config()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("hsh: {}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let name = config.name.clone();
    let input = InputHandler::stdin(&config);
    let mut shell = Shell::new(config, Environment::new(), input, std::io::stderr());

    match shell.run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{}: {}", name, e);
            ExitCode::FAILURE
        }
    }
}
