use std::time::Duration;

use clap::Args;
use intervalwalk_core::{Command, Config, Event, SessionController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::platform::{self, PlatformOptions};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Print display frames and events as JSON lines
    #[arg(long)]
    pub json: bool,
    /// Start walking immediately instead of waiting for a toggle
    #[arg(long)]
    pub autostart: bool,
    /// Exit once the session completes
    #[arg(long)]
    pub until_complete: bool,
    /// Disable tones, vibration, notifications and the wake lock
    #[arg(long)]
    pub no_cues: bool,
    /// Milliseconds per simulated second
    #[arg(long, default_value_t = 1000, hide = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

/// What a line typed on stdin asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Command(Command),
    Status,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "t" | "toggle" | "start" | "stop" => Input::Command(Command::Toggle),
        "r" | "reset" => Input::Command(Command::Reset),
        "s" | "status" => Input::Status,
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Unknown,
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(session_loop(args, config));
    // Stdin is read on a blocking thread that may still be parked on a read.
    runtime.shutdown_background();
    result
}

async fn session_loop(args: RunArgs, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let options = PlatformOptions {
        json: args.json,
        no_cues: args.no_cues,
        tick_period: Duration::from_millis(args.tick_ms),
    };
    let mut controller = SessionController::new(platform::build(&config, &options, tx));
    controller.refresh();

    if !args.json {
        eprintln!("Enter: start/stop   r: reset   s: status   q: quit");
    }

    if args.autostart {
        emit(&args, controller.dispatch(Command::Toggle))?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        if args.until_complete && controller.session().is_complete() {
            info!("session complete, exiting");
            break;
        }

        tokio::select! {
            Some(command) = rx.recv() => {
                emit(&args, controller.dispatch(command))?;
                if !stdin_open && !controller.is_running() {
                    info!("session stopped with stdin closed, exiting");
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    // The ticker keeps its sender alive, so nothing else can end the loop.
                    if !controller.is_running() {
                        debug!("stdin closed while idle, exiting");
                        break;
                    }
                    debug!("stdin closed, running to the end of the session");
                    stdin_open = false;
                    continue;
                };
                match parse_input(&line) {
                    Input::Command(command) => emit(&args, controller.dispatch(command))?,
                    Input::Status => emit(&args, Some(controller.snapshot()))?,
                    Input::Quit => break,
                    Input::Unknown => eprintln!("unknown input: {line:?}"),
                }
            }
            else => break,
        }
    }

    Ok(())
}

fn emit(args: &RunArgs, event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(event) = event else {
        return Ok(());
    };
    if args.json {
        println!("{}", serde_json::to_string(&event)?);
    } else if let Event::StateSnapshot { .. } = event {
        println!();
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    Ok(())
}
