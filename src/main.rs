use std::{
    fs::File,
    io::{self, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
};

use bounce::controller::{AnimationController, ImagePolicy};
use clap::Parser;
use env_logger::{Env, Target};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use termion::{
    async_stdin, cursor::HideCursor, input::TermRead, raw::IntoRawMode,
    screen::IntoAlternateScreen,
};
use terminal_host::TerminalHost;

mod terminal_host;

/// Bounces a DVD logo around the terminal. Quit with q, Esc or Ctrl-C.
#[derive(Parser)]
struct Cli {
    /// Seed for the spawn point, direction and logo colours
    #[arg(long)]
    seed: Option<u64>,
    /// Keep the first logo colour instead of picking a new one on every bounce
    #[arg(long)]
    keep_image: bool,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("could not open log file: {err}");
        return ExitCode::FAILURE;
    }
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let image_policy = if cli.keep_image {
        ImagePolicy::Keep
    } else {
        ImagePolicy::Reroll
    };
    info!("starting with seed {:?}, image policy {image_policy:?}", cli.seed);
    let mut controller = AnimationController::spawn(rng, image_policy);
    let quit = run(&mut controller).unwrap_or_else(Quit::Error);
    match quit {
        Quit::KeyPressed => {
            info!("quit after {} ticks", controller.ticks());
            ExitCode::SUCCESS
        }
        Quit::Error(err) => {
            error!("terminal error: {err}");
            println!("error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the animation on the alternate screen. The terminal is restored when
/// this returns.
fn run(controller: &mut AnimationController<StdRng>) -> io::Result<Quit> {
    let screen = HideCursor::from(stdout().into_raw_mode()?.into_alternate_screen()?);
    let mut host = TerminalHost::new(screen, async_stdin().keys(), termion::terminal_size);
    controller.run(&mut host);
    Ok(host.into_quit())
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("error"));
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

pub enum Quit {
    KeyPressed,
    Error(io::Error),
}
