//! Line-oriented terminal host for a tutoring session.
//!
//! Plays the part of the chat page: reads learner input, hands it to the
//! session, and prints whatever text comes back. Requests run one at a
//! time, so the session never sees overlapping calls.

use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use unfold_ai::{Speaker, TutorSession};
use unfold_common::UnfoldError;

use crate::attachment::load_attachment;

pub const WELCOME: &str = "Welcome to the AI Unfolding Tutor!\n\
I can help you find shortest paths on solids with the unfolding technique.\n\
Type a question, /attach <file> [question] to send a problem image or PDF,\n\
/reset for the practice menu, /help for all commands.";

const HELP: &str = "Commands:\n\
  /attach <file> [question]  send an image or PDF, optionally with a question\n\
  /reset                     start over and show the practice menu\n\
  /history                   list the turns in this conversation\n\
  /usage                     show token usage since the last reset\n\
  /help                      show this list\n\
  /quit                      exit";

/// One line of learner input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    Attach { path: PathBuf, question: String },
    Reset,
    History,
    Usage,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Blank;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let (name, args) = rest
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((rest, ""));

    match name {
        "attach" if !args.is_empty() => {
            let (path, question) = args
                .split_once(char::is_whitespace)
                .map(|(p, q)| (p, q.trim()))
                .unwrap_or((args, ""));
            Command::Attach {
                path: PathBuf::from(path),
                question: question.to_string(),
            }
        }
        "reset" | "menu" => Command::Reset,
        "history" => Command::History,
        "usage" => Command::Usage,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the session for the lifetime of the program.
pub struct Host<W> {
    session: TutorSession,
    out: W,
}

impl<W: Write> Host<W> {
    pub fn new(session: TutorSession, out: W) -> Self {
        Self { session, out }
    }

    pub fn session(&self) -> &TutorSession {
        &self.session
    }

    /// Print the welcome text, optionally seed the practice menu, then
    /// serve input until EOF or `/quit`.
    pub async fn run<R>(&mut self, input: R, greet: bool) -> Result<(), UnfoldError>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{WELCOME}\n")?;
        if greet {
            self.handle(Command::Reset).await?;
        }

        let mut lines = input.lines();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle(parse_command(&line)).await? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    pub async fn handle(&mut self, command: Command) -> Result<Flow, UnfoldError> {
        match command {
            Command::Blank => {}
            Command::Ask(text) => {
                let reply = self.session.send_message(&text, None).await;
                self.print_reply(&reply)?;
            }
            Command::Attach { path, question } => match load_attachment(&path).await {
                Ok(attachment) => {
                    let reply = self.session.send_message(&question, Some(attachment)).await;
                    self.print_reply(&reply)?;
                }
                Err(e) => writeln!(self.out, "Could not attach {}: {e}\n", path.display())?,
            },
            Command::Reset => {
                let reply = self.session.reset_chat().await;
                self.print_reply(&reply)?;
            }
            Command::History => self.print_history()?,
            Command::Usage => {
                let tracker = self.session.tracker();
                writeln!(
                    self.out,
                    "{} call(s), {} input / {} output tokens\n",
                    tracker.call_count(),
                    tracker.total().input_tokens,
                    tracker.total().output_tokens
                )?;
            }
            Command::Help => writeln!(self.out, "{HELP}\n")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(line) => {
                writeln!(self.out, "Unknown command: {line} (try /help)\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_reply(&mut self, reply: &str) -> Result<(), UnfoldError> {
        writeln!(self.out, "\n{reply}\n")?;
        Ok(())
    }

    fn print_history(&mut self) -> Result<(), UnfoldError> {
        let history = self.session.history();
        if history.is_empty() {
            writeln!(self.out, "(no turns yet)\n")?;
            return Ok(());
        }
        for (i, turn) in history.iter().enumerate() {
            let who = match turn.speaker() {
                Speaker::User => "you",
                Speaker::Assistant => "tutor",
            };
            let mut summary = preview(&turn.text(), 60);
            let attached = turn.attachments().count();
            if attached > 0 {
                summary.push_str(&format!(" [+{attached} attachment(s)]"));
            }
            writeln!(self.out, "{:>3}. {who}: {summary}", i + 1)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// First line of `text`, cut to `max` characters.
fn preview(text: &str, max: usize) -> String {
    let first = text.lines().next().unwrap_or("");
    if first.chars().count() > max {
        let cut: String = first.chars().take(max).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}
