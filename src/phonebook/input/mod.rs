//! # Typed Prompt Engine
//!
//! Every interactive question the phonebook asks goes through a [`Prompter`].
//! A prompter owns the console reader and writer plus the currently active help
//! renderer, so nothing here touches process-wide state.
//!
//! ## Control tokens
//!
//! Before a line is validated it is run through [`classify`], the one place
//! that knows the reserved inputs:
//!
//! | Token  | Key    | Effect                                                  |
//! |--------|--------|---------------------------------------------------------|
//! | `\x01` | Ctrl-A | [`InputError::Abort`]: discard the current session      |
//! | `\x18` | Ctrl-X | [`InputError::Exit`]: stop prompting, keep what we have |
//! | `\x04` | Ctrl-D | clear the value (only where a prompt allows it)         |
//! | `?`    |        | run the help renderer and ask again                     |
//!
//! A blank line keeps the default. Anything else is trimmed and handed to the
//! prompt's validator; a rejected line prints the validator's message and the
//! same question is asked again.
//!
//! ## Help scoping
//!
//! [`Prompter::scoped_help`] swaps the help renderer and hands back a
//! [`HelpScope`] guard. The guard derefs to the prompter and puts the previous
//! renderer back when it is dropped.

use std::io::{self, BufRead, Write};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

mod prompts;
pub mod validate;

pub use prompts::IntBounds;

pub const ABORT_TOKEN: &str = "\x01";
pub const EXIT_TOKEN: &str = "\x18";
pub const DELETE_TOKEN: &str = "\x04";
pub const HELP_TOKEN: &str = "?";

/// Outcomes of a prompt other than a value.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input aborted")]
    Abort,

    #[error("input finished early")]
    Exit,

    #[error("input stream closed")]
    Closed,

    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Exit and end-of-input both mean "stop here, keep the edits".
    pub fn is_exit(&self) -> bool {
        matches!(self, InputError::Exit | InputError::Closed)
    }
}

/// A raw console line sorted into control tokens and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Abort,
    Exit,
    Help,
    Delete,
    Blank,
    Text(String),
}

/// Shared classification step used by every prompt and the note editor.
pub fn classify(raw: &str) -> Line {
    let line = raw.trim_end_matches(['\n', '\r']);
    match line {
        ABORT_TOKEN => Line::Abort,
        EXIT_TOKEN => Line::Exit,
        HELP_TOKEN => Line::Help,
        DELETE_TOKEN => Line::Delete,
        _ if line.trim().is_empty() => Line::Blank,
        _ => Line::Text(line.to_string()),
    }
}

pub type HelpRenderer = fn(&mut dyn Write) -> io::Result<()>;

pub fn default_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "^A = abort action; ^X = exit action; ? = display help")
}

/// Line-oriented console with a swappable help renderer.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    help: HelpRenderer,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            help: default_help,
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Installs `renderer` until the returned guard is dropped.
    pub fn scoped_help(&mut self, renderer: HelpRenderer) -> HelpScope<'_, R, W> {
        let previous = std::mem::replace(&mut self.help, renderer);
        HelpScope {
            prompter: self,
            previous,
        }
    }

    pub fn show_help(&mut self) -> io::Result<()> {
        (self.help)(&mut self.writer)
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Prints `label` and reads one line. End of input is [`InputError::Closed`].
    pub fn read_line(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(buf.trim_end_matches(['\n', '\r']).to_string())
    }

    /// The loop every typed prompt runs.
    ///
    /// `default_display` is substituted for the `{}` marker in `label` when it
    /// is not blank. `on_delete` is what the delete token yields; prompts that
    /// pass `None` refuse the token.
    pub fn prompt_with<T, F>(
        &mut self,
        label: &str,
        default_display: &str,
        default: T,
        on_delete: Option<T>,
        mut parse: F,
    ) -> Result<T, InputError>
    where
        T: Clone,
        F: FnMut(&str) -> Result<T, String>,
    {
        let label = render_label(label, default_display);
        loop {
            let raw = self.read_line(&label)?;
            match classify(&raw) {
                Line::Abort => return Err(InputError::Abort),
                Line::Exit => return Err(InputError::Exit),
                Line::Help => self.show_help()?,
                Line::Delete => match &on_delete {
                    Some(empty) => return Ok(empty.clone()),
                    None => self.say("This value cannot be cleared here.")?,
                },
                Line::Blank => return Ok(default),
                Line::Text(text) => match parse(text.trim()) {
                    Ok(value) => return Ok(value),
                    Err(message) => self.say(message)?,
                },
            }
        }
    }
}

/// Restores the previous help renderer on drop.
pub struct HelpScope<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    previous: HelpRenderer,
}

impl<R, W> Deref for HelpScope<'_, R, W> {
    type Target = Prompter<R, W>;

    fn deref(&self) -> &Self::Target {
        self.prompter
    }
}

impl<R, W> DerefMut for HelpScope<'_, R, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.prompter
    }
}

impl<R, W> Drop for HelpScope<'_, R, W> {
    fn drop(&mut self) {
        self.prompter.help = self.previous;
    }
}

/// Fills the `{}` marker of a label with ` (default)` or nothing.
pub fn render_label(template: &str, default_display: &str) -> String {
    if !template.contains("{}") {
        return template.to_string();
    }
    let suffix = if default_display.trim().is_empty() {
        String::new()
    } else {
        format!(" ({})", default_display)
    };
    template.replacen("{}", &suffix, 1)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Prompter;
    use std::io::Cursor;

    pub type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    pub fn prompter(input: &str) -> TestPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub fn output(prompter: TestPrompter) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn upper(s: &str) -> Result<String, String> {
        if s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(s.to_string())
        } else {
            Err("upper case only".to_string())
        }
    }

    #[test]
    fn classify_control_tokens() {
        assert_eq!(classify("\x01"), Line::Abort);
        assert_eq!(classify("\x18\n"), Line::Exit);
        assert_eq!(classify("?"), Line::Help);
        assert_eq!(classify("\x04\r\n"), Line::Delete);
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(classify(" ? "), Line::Text(" ? ".into()));
        assert_eq!(classify("abc"), Line::Text("abc".into()));
    }

    #[test]
    fn blank_line_returns_default_without_validating() {
        let mut p = prompter("\n");
        let value = p
            .prompt_with("Name{}: ", "lower", "lower".to_string(), None, upper)
            .unwrap();
        assert_eq!(value, "lower");
    }

    #[test]
    fn abort_token_never_reaches_validator() {
        let mut p = prompter("\x01\n");
        let mut called = false;
        let result = p.prompt_with("x: ", "", String::new(), None, |s| {
            called = true;
            Ok(s.to_string())
        });
        assert!(matches!(result, Err(InputError::Abort)));
        assert!(!called);
    }

    #[test]
    fn exit_token_signals_exit() {
        let mut p = prompter("\x18\n");
        let result = p.prompt_with("x: ", "", String::new(), None, upper);
        assert!(matches!(result, Err(InputError::Exit)));
    }

    #[test]
    fn invalid_input_reprompts_with_message() {
        let mut p = prompter("abc\nABC\n");
        let value = p
            .prompt_with("Code: ", "", String::new(), None, upper)
            .unwrap();
        assert_eq!(value, "ABC");
        let out = output(p);
        assert_eq!(out.matches("Code: ").count(), 2);
        assert!(out.contains("upper case only"));
    }

    #[test]
    fn delete_token_returns_empty_value_when_allowed() {
        let mut p = prompter("\x04\n");
        let value = p
            .prompt_with("x: ", "OLD", "OLD".to_string(), Some(String::new()), upper)
            .unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn delete_token_is_refused_without_empty_value() {
        let mut p = prompter("\x04\nOK\n");
        let value = p
            .prompt_with("x: ", "", String::new(), None, upper)
            .unwrap();
        assert_eq!(value, "OK");
        assert!(output(p).contains("cannot be cleared"));
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut p = prompter("");
        let result = p.prompt_with("x: ", "", String::new(), None, upper);
        assert!(matches!(result, Err(InputError::Closed)));
        assert!(InputError::Closed.is_exit());
        assert!(!InputError::Abort.is_exit());
    }

    #[test]
    fn help_token_runs_renderer_and_reprompts() {
        let mut p = prompter("?\nOK\n");
        let value = p
            .prompt_with("x: ", "", String::new(), None, upper)
            .unwrap();
        assert_eq!(value, "OK");
        assert!(output(p).contains("^A = abort action"));
    }

    fn custom_help(out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "custom help")
    }

    #[test]
    fn scoped_help_is_restored_on_drop() {
        let mut p = prompter("?\nA\n?\nB\n");
        {
            let mut scoped = p.scoped_help(custom_help);
            scoped
                .prompt_with("x: ", "", String::new(), None, upper)
                .unwrap();
        }
        p.prompt_with("y: ", "", String::new(), None, upper)
            .unwrap();
        let out = output(p);
        let custom_at = out.find("custom help").unwrap();
        let default_at = out.find("^A = abort action").unwrap();
        assert!(custom_at < default_at);
        assert_eq!(out.matches("custom help").count(), 1);
    }

    #[test]
    fn scoped_help_is_restored_after_abort() {
        let mut p = prompter("\x01\n?\nC\n");
        {
            let mut scoped = p.scoped_help(custom_help);
            let result = scoped.prompt_with("x: ", "", String::new(), None, upper);
            assert!(matches!(result, Err(InputError::Abort)));
        }
        p.prompt_with("y: ", "", String::new(), None, upper)
            .unwrap();
        let out = output(p);
        assert!(!out.contains("custom help"));
        assert!(out.contains("^A = abort action"));
    }

    #[test]
    fn label_shows_default_only_when_not_blank() {
        assert_eq!(render_label("Name{}: ", "Max"), "Name (Max): ");
        assert_eq!(render_label("Name{}: ", "  "), "Name: ");
        assert_eq!(render_label("Name: ", "Max"), "Name: ");
    }
}
