//! main.rs
//! Entry point for lst

use lst::config::Config;
use lst::core::{LocalFs, Session, run};
use lst::error::LstError;
use lst::utils::cli::Args;

use clap::Parser;

use std::io::{self, BufWriter, IsTerminal, Write};

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "off" }),
    )
    .init();

    match try_main(&args) {
        Ok(status) => std::process::exit(status),
        // Output closed early, eg. piped into `head`
        Err(LstError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => std::process::exit(0),
        Err(e) => {
            eprintln!("lst: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn try_main(args: &Args) -> Result<i32, LstError> {
    if args.init {
        Config::generate_default(&Config::default_path())?;
        return Ok(0);
    }

    let config = Config::load();
    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let terminal = if is_tty {
        crossterm::terminal::size().ok()
    } else {
        None
    };
    let settings = args.settings(&config, is_tty, terminal)?;

    let mut session = Session::new();
    let mut out = BufWriter::new(stdout.lock());
    run(&settings, &args.paths, &LocalFs, &mut session, &mut out)?;
    out.flush()?;

    log::debug!("exit status {}", session.exit_status());
    Ok(session.exit_status())
}
