use crate::lang::Error;
use crate::mach::{Event, Runtime, CYCLES_PER_SLICE};
use ansi_term::Style;
use log::{debug, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static USAGE: &str = "\
Usage: grin [FILE]

Runs the Grin program in FILE, or reads it from standard input when
no file is given. The program ends at a line containing only '.'.

Options:
  -h, --help    Print this message

Logging is controlled with RUST_LOG (error, warn, info, debug, trace).";

enum Cmd {
    Run(Option<String>),
    Help,
    Invalid,
}

pub fn main() {
    if let Err(error) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("{}", error);
    }
    let path = match parse_args() {
        Cmd::Run(path) => path,
        Cmd::Help => {
            println!("{}", USAGE);
            return;
        }
        Cmd::Invalid => {
            eprintln!("{}", USAGE);
            // FreeBSD EX_USAGE (64)
            std::process::exit(64)
        }
    };
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C handler not installed: {}", error);
    }
    let success = match main_loop(path.as_deref(), interrupted) {
        Ok(success) => success,
        Err(error) => {
            eprintln!("{}", error);
            false
        }
    };
    if !success {
        std::process::exit(1);
    }
}

fn parse_args() -> Cmd {
    let mut args = std::env::args().skip(1);
    let cmd = match args.next() {
        None => Cmd::Run(None),
        Some(arg) if arg == "-h" || arg == "--help" => Cmd::Help,
        Some(arg) if arg.starts_with('-') => Cmd::Invalid,
        Some(arg) => Cmd::Run(Some(arg)),
    };
    match args.next() {
        Some(_) => Cmd::Invalid,
        None => cmd,
    }
}

/// Returns false when the program failed to build or stopped on an error.
fn main_loop(path: Option<&str>, interrupted: Arc<AtomicBool>) -> io::Result<bool> {
    let lines = load(path)?;
    debug!("read {} lines", lines.len());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut runtime = match Runtime::compile(&lines) {
        Ok(runtime) => runtime,
        Err(error) => {
            report(&mut out, &error)?;
            return Ok(false);
        }
    };
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES_PER_SLICE) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => out.write_all(s.as_bytes())?,
            Event::Error(error) => {
                report(&mut out, &error)?;
                return Ok(false);
            }
        }
    }
    out.flush()?;
    Ok(true)
}

fn load(path: Option<&str>) -> io::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim() == "." {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

fn report<W: Write>(out: &mut W, error: &Error) -> io::Result<()> {
    writeln!(out, "{}", Style::new().bold().paint(error.to_string()))?;
    out.flush()
}
