//! Interactive read loop for the `graphlite` binary.
//!
//! Input comes from a [`LineSource`]: a rustyline editor with keyword
//! completion at a terminal, or any [`BufRead`] when input is piped. The loop
//! only returns once input ends or `EXIT` is entered, so the caller can always
//! follow it with [`shutdown`].

use crate::command::{self, KEYWORDS};
use crate::session::{Response, Session, GOODBYE_MESSAGE, HELP_PROMPT, PROMPT, WELCOME_MESSAGE};
use colored::Colorize;
use graphlite_core::Result;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

pub const INTERRUPT_HINT: &str = "Use 'EXIT' to quit.";

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// A line that could not be decoded. It has been consumed.
    Invalid(String),
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;
}

/// Reads lines from any buffered reader. No prompt is shown.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Input> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(Input::Eof);
        }
        match std::str::from_utf8(&self.buf) {
            Ok(line) => Ok(Input::Line(line.to_string())),
            Err(e) => Ok(Input::Invalid(format!("Input is not valid UTF-8: {e}"))),
        }
    }
}

/// Completes the shell's command keywords.
#[derive(Helper, Highlighter, Hinter, Validator)]
pub struct KeywordCompleter;

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = line.get(..pos).unwrap_or(line);
        let typed = prefix.trim_start();
        let candidates = complete_keyword(typed)
            .into_iter()
            .map(|keyword| Pair {
                display: keyword.to_string(),
                replacement: keyword.to_string(),
            })
            .collect();
        Ok((prefix.len() - typed.len(), candidates))
    }
}

/// Keywords that start with `typed`, ignoring case.
pub fn complete_keyword(typed: &str) -> Vec<&'static str> {
    KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| {
            keyword
                .get(..typed.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(typed))
        })
        .collect()
}

/// Line editor with history and keyword completion.
pub struct EditorSource {
    editor: Editor<KeywordCompleter, DefaultHistory>,
}

impl EditorSource {
    pub fn new() -> rustyline::Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(KeywordCompleter));
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let entry = line.trim();
                if !entry.is_empty() {
                    if let Err(e) = self.editor.add_history_entry(entry) {
                        debug!("Failed to record history: {}", e);
                    }
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(Input::Invalid(format!("Input is not valid UTF-8: {e}")))
            }
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

/// Read and execute commands until `EXIT` or end of input.
///
/// Bad lines and failed commands are reported and the loop goes on. An I/O
/// error from the source or the writer ends the loop and is returned.
pub fn run<S: LineSource, W: Write>(session: &mut Session, source: &mut S, out: &mut W) -> io::Result<()> {
    writeln!(out, "{WELCOME_MESSAGE}")?;
    writeln!(out, "{HELP_PROMPT}")?;
    writeln!(out)?;
    out.flush()?;

    loop {
        let line = match source.read_line(PROMPT)? {
            Input::Line(line) => line,
            Input::Interrupted => {
                writeln!(out, "{INTERRUPT_HINT}")?;
                continue;
            }
            Input::Invalid(message) => {
                print_error(out, &message)?;
                continue;
            }
            Input::Eof => {
                writeln!(out)?;
                return Ok(());
            }
        };

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_error(out, &e)?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Response::Exit) => return Ok(()),
            Ok(response) => render(out, &response)?,
            Err(e) => {
                debug!("Command failed: {}", e);
                print_error(out, &e)?;
            }
        }
        out.flush()?;
    }
}

/// Flush every graph and say goodbye. Write failures on `out` are logged and
/// never stop the save.
pub fn shutdown<W: Write>(session: Session, out: &mut W) -> Result<usize> {
    let saved = session.shutdown();
    if let Err(e) = &saved {
        error!("Failed to save graphs: {}", e);
    }

    let report = match &saved {
        Ok(0) => print_info(out, "No graphs to save"),
        Ok(count) => print_success(out, &format!("Saved {count} graph(s) to disk")),
        Err(e) => print_error(out, &format!("Failed to save graphs: {e}")),
    };
    if let Err(e) = report.and_then(|()| writeln!(out, "{GOODBYE_MESSAGE}")) {
        debug!("Failed to write shutdown report: {}", e);
    }
    saved
}

fn render<W: Write>(out: &mut W, response: &Response) -> io::Result<()> {
    match response {
        Response::Success(message) => print_success(out, message),
        Response::Info(heading, lines) => {
            print_info(out, heading)?;
            for line in lines {
                writeln!(out, "  - {line}")?;
            }
            Ok(())
        }
        Response::Text(text) => writeln!(out, "{text}"),
        Response::Clear => write!(out, "\x1b[2J\x1b[H"),
        Response::Exit => Ok(()),
    }
}

fn print_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "SUCCESS:".green().bold())
}

fn print_info<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "INFO:".blue().bold())
}

fn print_error<W: Write>(out: &mut W, message: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{} {message}", "ERROR:".red().bold())
}
