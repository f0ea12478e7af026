//! The interactive REPL.
//!
//! Each line of plain text is translated and sent to the consumer. Lines
//! starting with `:` are commands.

use std::fmt::Write as _;
use std::io::{self, Write};

use signbridge_foundation::{Error, Result, Token};
use signbridge_transport::{ConsumerTransport, Transport};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Delivery, DeliveryStatus, Session};

const HELP: &str = "\
Type an English sentence to translate it and play its clips.

Commands:
  :explain TEXT   show how each word was classified
  :gloss TEXT     translate without sending
  :send on|off    turn sending on or off (no argument shows the state)
  :help           show this help
  :quit           exit (Ctrl+D also works)";

/// A parsed line of REPL input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Translate and send.
    Submit(&'a str),
    /// Classification trace.
    Explain(&'a str),
    /// Translate only.
    Gloss(&'a str),
    /// Query or change whether sentences are sent.
    Send(Option<bool>),
    /// Show the command list.
    Help,
    /// Leave the REPL.
    Quit,
}

impl<'a> Command<'a> {
    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns an invalid command error for unknown commands or bad arguments.
    pub fn parse(input: &'a str) -> Result<Self> {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return Ok(Self::Submit(input));
        };

        let (name, argument) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "explain" | "e" => Ok(Self::Explain(argument)),
            "gloss" | "g" => Ok(Self::Gloss(argument)),
            "send" => match argument {
                "" => Ok(Self::Send(None)),
                "on" => Ok(Self::Send(Some(true))),
                "off" => Ok(Self::Send(Some(false))),
                other => Err(Error::invalid_command(format!(
                    ":send expects 'on' or 'off', got '{other}'"
                ))),
            },
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(Error::invalid_command(format!(
                "unknown command ':{other}' (try :help)"
            ))),
        }
    }
}

/// What the REPL does after evaluating a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text (possibly empty) and keep reading.
    Text(String),
    /// Stop reading.
    Quit,
}

/// Formats a delivery for display.
///
/// The first line is always the gloss sequence, so batch output can be read
/// back one sentence per block.
#[must_use]
pub fn render_delivery(delivery: &Delivery) -> String {
    let mut out = format!("gloss: {}", join(&delivery.translation.gloss));
    if !delivery.resolution.clips.is_empty() {
        let clips: Vec<&str> = delivery
            .resolution
            .clips
            .iter()
            .map(signbridge_foundation::ClipId::as_str)
            .collect();
        let _ = write!(out, "\nclips: {}", clips.join(" "));
    }
    if !delivery.resolution.unresolved.is_empty() {
        let _ = write!(out, "\nno clip: {}", join(&delivery.resolution.unresolved));
    }
    match &delivery.status {
        DeliveryStatus::Sent => out.push_str("\nsent"),
        DeliveryStatus::Skipped(reason) => {
            let _ = write!(out, "\nnot sent: {reason}");
        }
        DeliveryStatus::Failed(e) => {
            let _ = write!(out, "\ndelivery failed: {e}");
        }
    }
    out
}

fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, T: Transport = ConsumerTransport> {
    /// The line editor for input.
    editor: E,

    /// Translation session.
    session: Session<T>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl<T: Transport> Repl<RustylineEditor, T> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session<T>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor, T: Transport> Repl<E, T> {
    /// Creates a new REPL with the given editor.
    ///
    /// Every gloss the session's lexicon can emit is offered for completion.
    pub fn with_editor(mut editor: E, session: Session<T>) -> Self {
        let keywords = session
            .parser()
            .lexicon()
            .emitted_glosses()
            .into_iter()
            .map(Token::into_string)
            .collect();
        editor.set_keywords(keywords);

        Self {
            editor,
            session,
            show_banner: true,
            prompt: "asl> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<T> {
        &mut self.session
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Reply::Text(text)) => {
                    if !text.is_empty() {
                        println!("{text}");
                    }
                }
                Ok(Reply::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed commands. Delivery failures are part of
    /// the reply, not errors.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let reply = match Command::parse(input)? {
            Command::Submit(text) => render_delivery(&self.session.submit(text)),
            Command::Explain(text) => self.session.explain(text).to_string(),
            Command::Gloss(text) => {
                let (translation, _) = self.session.translate(text);
                format!("gloss: {}", join(&translation.gloss))
            }
            Command::Send(None) => send_state(self.session.is_sending()),
            Command::Send(Some(on)) => {
                self.session.set_sending(on);
                send_state(on)
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(reply))
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mSignbridge v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "Sending to {}. Type :help for commands, Ctrl+D to exit.\n",
            self.session.transport().describe()
        );
        let _ = io::stdout().flush();
    }
}

fn send_state(on: bool) -> String {
    format!("sending {}", if on { "on" } else { "off" })
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
