extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::error;
use crate::lang::{Error, Listing};
use crate::mach::{Event, Program, Runtime};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{self, BufRead, ErrorKind, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Options {
    /// Print `[line]` as each line runs.
    pub trace: bool,
    /// Lines to run between checks for Ctrl-C.
    pub cycles: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            trace: false,
            cycles: 5000,
        }
    }
}

/// Runs each file with its own runtime. Returns the process exit code.
pub fn main(files: &[PathBuf], options: &Options) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let mut console = match Console::new() {
        Ok(console) => console,
        Err(error) => {
            eprintln!("{}", error);
            return 1;
        }
    };
    for path in files {
        if let Err(error) = run_file(path, options, &mut console, &interrupted) {
            report(&error);
            return 1;
        }
    }
    0
}

pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("sil=debug")
    } else {
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn report(error: &Error) {
    let msg = format!("?{}", error);
    if io::stderr().is_terminal() {
        eprintln!("{}", Style::new().bold().paint(msg));
    } else {
        eprintln!("{}", msg);
    }
}

/// Where `INPUT` lines come from.
pub enum Console {
    Terminal(Interface<DefaultTerminal>),
    Piped(io::Stdin),
}

impl Console {
    pub fn new() -> io::Result<Console> {
        if io::stdin().is_terminal() {
            let interface = Interface::new("SIL")?;
            interface.set_report_signal(Signal::Interrupt, true);
            interface.set_prompt("")?;
            Ok(Console::Terminal(interface))
        } else {
            Ok(Console::Piped(io::stdin()))
        }
    }

    /// `None` at end of input or on Ctrl-C.
    pub fn read_line(&mut self, interrupted: &AtomicBool) -> io::Result<Option<String>> {
        match self {
            Console::Terminal(interface) => match interface.read_line()? {
                ReadResult::Input(string) => Ok(Some(string)),
                ReadResult::Signal(Signal::Interrupt) => {
                    interrupted.store(true, Ordering::SeqCst);
                    Ok(None)
                }
                ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
            },
            Console::Piped(stdin) => {
                let mut string = String::new();
                if stdin.lock().read_line(&mut string)? == 0 {
                    Ok(None)
                } else {
                    Ok(Some(string))
                }
            }
        }
    }
}

pub fn run_file(
    path: &Path,
    options: &Options,
    console: &mut Console,
    interrupted: &AtomicBool,
) -> Result<()> {
    let listing = Listing::parse(&load(path)?)?;
    info!(path = %path.display(), lines = listing.len(), "loaded");
    let mut runtime = Runtime::new(Program::new(&listing));
    runtime.set_trace(options.trace);
    drive(
        &mut runtime,
        options.cycles,
        &mut io::stdout(),
        || console.read_line(interrupted),
        interrupted,
    )
}

/// Runs until the program stops, ends, or fails.
/// End of input answers an `INPUT` with an empty line.
pub fn drive<W, F>(
    runtime: &mut Runtime,
    cycles: usize,
    out: &mut W,
    mut read_line: F,
    interrupted: &AtomicBool,
) -> Result<()>
where
    W: Write,
    F: FnMut() -> io::Result<Option<String>>,
{
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cycles) {
            Event::Print(s) => {
                out.write_all(s.as_bytes()).map_err(io_error)?;
                out.flush().map_err(io_error)?;
            }
            Event::Input => match read_line().map_err(io_error)? {
                Some(line) => {
                    runtime.enter(&line);
                }
                None => {
                    if !interrupted.load(Ordering::SeqCst) {
                        runtime.enter("");
                    }
                }
            },
            Event::Running => {}
            Event::End | Event::Stopped => return Ok(()),
            Event::Error(error) => return Err(error),
        }
    }
}

fn io_error(error: io::Error) -> Error {
    error!(InternalError; &error.to_string())
}

fn load(path: &Path) -> Result<String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(InternalError; &msg)),
            }
        }
    };
    let mut text = String::new();
    if let Err(error) = file.read_to_string(&mut text) {
        return Err(error!(InternalError; &error.to_string()));
    }
    Ok(text)
}
