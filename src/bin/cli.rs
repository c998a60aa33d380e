use bevy::{log::LogPlugin, prelude::*};
use std::{
    env,
    io::{self, BufRead, Write},
};
use thiserror::Error;

use liftoff::{
    resources::{ConfigError, TrainerConfig},
    session::{Command, Response, Session},
};

#[derive(Error, Debug)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), CliError> {
    let config = match env::args().nth(1) {
        Some(path) => TrainerConfig::from_file(&path)?,
        None => TrainerConfig::load_or_default()?,
    };

    let mut app = App::new();
    app.add_plugins(LogPlugin::default());
    let mut session = Session::from_app(app, config);
    info!("Session ready, reading commands from stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write_response(&mut stdout, &Response::success(session.snapshot()))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Command>(&line) {
            Ok(command) => match session.handle(command) {
                Ok(snapshot) => Response::success(snapshot),
                Err(e) => Response::failure(e),
            },
            Err(e) => {
                warn!("Failed to parse command '{}': {}", line.trim(), e);
                Response::failure(format!("invalid command: {}", e))
            }
        };
        write_response(&mut stdout, &response)?;

        if session.is_closed() {
            info!("Session closed");
            break;
        }
    }

    Ok(())
}

fn write_response(out: &mut impl Write, response: &Response) -> Result<(), CliError> {
    let line = serde_json::to_string(response)? + "\n";
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}
