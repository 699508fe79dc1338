mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod poller;
mod pretty;
mod runtime;
mod session;
mod sol;
mod step_api;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::poller::{OverlapPolicy, PauseBehavior};
use crate::pretty::{handle_cmd_error, print_cmd_error, print_cmd_info};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Polling settings that override the configuration file.
#[derive(clap::Args, Debug)]
struct PollArgs {
    /// Server to poll: "local", "production" or a base URL such as http://127.0.0.1:8000
    #[arg(long, value_name = "URL")]
    url: Option<Environment>,

    /// Steps to advance after each successful poll
    #[arg(long, value_name = "STEPS")]
    step_size: Option<u64>,

    /// Milliseconds between polls
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Start with polling paused
    #[arg(long)]
    paused: bool,

    /// What the pause key does
    #[arg(long, value_enum)]
    pause_behavior: Option<PauseBehavior>,

    /// Whether a tick may start a request while another is pending
    #[arg(long, value_enum)]
    overlap: Option<OverlapPolicy>,
}

impl PollArgs {
    fn apply(self, config: &mut Config) {
        if let Some(environment) = self.url {
            config.environment = environment;
        }
        if let Some(step_size) = self.step_size {
            config.step_size = step_size;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.poll_interval_ms = interval_ms;
        }
        if self.paused {
            config.start_paused = true;
        }
        if let Some(pause_behavior) = self.pause_behavior {
            config.pause_behavior = pause_behavior;
        }
        if let Some(overlap) = self.overlap {
            config.overlap_policy = overlap;
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start polling the simulation server
    Start {
        #[command(flatten)]
        poll: PollArgs,

        /// Run without the terminal dashboard, printing updates to stdout
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Enable background colors in the dashboard
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Print the sol shown for a step number
    Sol {
        /// Step number; fractional values are accepted
        #[arg(value_name = "STEP")]
        step: f64,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a configuration file from defaults and the given settings
    Init {
        #[command(flatten)]
        poll: PollArgs,
    },
    /// Print the configuration in effect
    Show,
    /// Delete the configuration file
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            poll,
            headless,
            with_background,
        } => {
            let mut config = load_config(&config_path)?;
            poll.apply(&mut config);
            config
                .validate()
                .map_err(|e| handle_cmd_error!(e, "Invalid polling settings."))?;

            let session = setup_session(config)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Sol { step } => {
            if !step.is_finite() || step < 0.0 {
                print_cmd_error!("Step must be a non-negative number.");
                return Err(Box::from(format!("Invalid step: {}", step)));
            }
            println!("Mars: Sol {}", sol::sol_day(step));
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigCommand::Init { poll } => {
                let mut config = Config::new(environment_from_env().unwrap_or_default());
                poll.apply(&mut config);
                config
                    .validate()
                    .map_err(|e| handle_cmd_error!(e, "Invalid polling settings."))?;
                config
                    .save(&config_path)
                    .map_err(|e| handle_cmd_error!(e, "Failed to save config."))?;
                print_cmd_info!(
                    "Configuration saved.",
                    "Wrote {} (polling {})",
                    config_path.display(),
                    config.environment.base_url()
                );
                Ok(())
            }
            ConfigCommand::Show => {
                let config = load_config(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigCommand::Clear => {
                println!("Clearing configuration file...");
                Config::clear(&config_path).map_err(Into::into)
            }
        },
    }
}

/// Environment named by `SIMOC_ENVIRONMENT`, if set and valid.
fn environment_from_env() -> Option<Environment> {
    let value = std::env::var("SIMOC_ENVIRONMENT").ok()?;
    match value.parse::<Environment>() {
        Ok(environment) => Some(environment),
        Err(e) => {
            print_cmd_error!("Ignoring SIMOC_ENVIRONMENT.", "{}", e);
            None
        }
    }
}

/// Configuration file values (or defaults), with `SIMOC_ENVIRONMENT` taking precedence
/// over the stored environment.
fn load_config(config_path: &Path) -> Result<Config, Box<dyn Error>> {
    let mut config = if config_path.exists() {
        Config::load_from_file(config_path)
            .map_err(|e| handle_cmd_error!(e, "Failed to load config."))?
    } else {
        Config::default()
    };
    if let Some(environment) = environment_from_env() {
        config.environment = environment;
    }
    Ok(config)
}
