use std::io::{self, Write};

use anyhow::Result;
use env_logger::{Builder, Env};

use crate::machine::MachineClient;
use crate::{Config, RunState, load_and_execute, load_program};

/// Entry point of the `gcode-run` binary
pub fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;

    logger(Env::default(), &config.log_level).init();

    run_with(&config, io::stdout().lock())
}

/// Logger reading `RUST_LOG` from `env`, falling back to `log_level`
fn logger(env: Env<'_>, log_level: &str) -> Builder {
    Builder::from_env(env.default_filter_or(log_level.to_string()))
}

/// Run with an explicit configuration and output sink
pub fn run_with(config: &Config, mut out: impl Write) -> Result<()> {
    if config.parse_only {
        let program = load_program(&config.file)?;
        writeln!(out, "{}", program)?;
        return Ok(());
    }

    let mut client = MachineClient::new(out, config.format).with_precision(config.precision);
    let state = load_and_execute(&config.file, &mut client)?;

    match state {
        RunState::Halted => log::info!("{} commands issued", client.commands_issued()),
        RunState::Running => log::warn!(
            "{} ended without M30 after {} commands",
            config.file.display(),
            client.commands_issued()
        ),
    }
    Ok(())
}
