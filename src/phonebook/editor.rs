//! Line-addressed note editor.
//!
//! Notes are edited one console line at a time. [`NoteCommand::parse`] turns a
//! line into a command against the current buffer, [`NoteBuffer::apply`] runs
//! it, and [`edit_notes`] drives the loop on a [`Prompter`].
//!
//! Line numbers are 1-based and always refer to the buffer as it was shown
//! right before the line was typed.

use crate::input::{classify, InputError, Line, Prompter, DELETE_TOKEN};
use std::io::{self, BufRead, Write};

const SEPARATOR: &str = "│";
const PLACEHOLDER: &str = "(no notes)";
const HINT: &str = "? = help";

pub fn notes_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "  <text>       append a line")?;
    writeln!(out, "  <n> <text>   replace line n")?;
    writeln!(out, "  <n> ^D       delete line n")?;
    writeln!(out, "  ^D           delete all lines")?;
    writeln!(out, "  ^X           save and leave")?;
    writeln!(out, "  ^A           discard changes and leave")?;
    writeln!(out, "  ?            show this help")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    Commit,
    Abort,
    Clear,
    Help,
    Delete(usize),
    Replace(usize, String),
    Append(String),
    Ignore,
}

impl NoteCommand {
    /// Interprets one raw line against a buffer of `len` lines.
    pub fn parse(raw: &str, len: usize) -> Self {
        let text = match classify(raw) {
            Line::Exit => return NoteCommand::Commit,
            Line::Abort => return NoteCommand::Abort,
            Line::Delete => return NoteCommand::Clear,
            Line::Help => return NoteCommand::Help,
            Line::Blank => return NoteCommand::Ignore,
            Line::Text(text) => text,
        };

        if let Some((head, rest)) = text.split_once(' ') {
            if let Some(n) = parse_line_number(head, len) {
                return if rest == DELETE_TOKEN {
                    NoteCommand::Delete(n)
                } else {
                    NoteCommand::Replace(n, rest.to_string())
                };
            }
        }
        NoteCommand::Append(text)
    }
}

fn parse_line_number(head: &str, len: usize) -> Option<usize> {
    if head.is_empty() || !head.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    head.parse().ok().filter(|n| (1..=len).contains(n))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBuffer {
    lines: Vec<String>,
}

impl NoteBuffer {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Applies a buffer-changing command. Returns whether the buffer changed.
    pub fn apply(&mut self, command: &NoteCommand) -> bool {
        match command {
            NoteCommand::Clear => {
                let changed = !self.lines.is_empty();
                self.lines.clear();
                changed
            }
            NoteCommand::Delete(n) if (1..=self.lines.len()).contains(n) => {
                self.lines.remove(n - 1);
                true
            }
            NoteCommand::Replace(n, text) if (1..=self.lines.len()).contains(n) => {
                self.lines[n - 1] = text.clone();
                true
            }
            NoteCommand::Append(text) => {
                let repeat = self
                    .lines
                    .last()
                    .is_some_and(|last| last.trim() == text.trim());
                if !repeat {
                    self.lines.push(text.clone());
                }
                !repeat
            }
            _ => false,
        }
    }

    /// Renders the numbered lines, or the placeholder when empty.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.lines.is_empty() {
            return writeln!(out, "  {}", PLACEHOLDER);
        }
        let width = self.lines.len().to_string().len();
        for (i, line) in self.lines.iter().enumerate() {
            writeln!(out, "  {:>width$} {} {}", i + 1, SEPARATOR, line, width = width)?;
        }
        Ok(())
    }
}

/// Runs the interactive note editor and returns the resulting lines.
///
/// Exit (or end of input) keeps the edits; abort returns `initial` untouched.
pub fn edit_notes<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    title: &str,
    footer: Option<&str>,
    initial: &[String],
) -> Result<Vec<String>, InputError> {
    let committed = run_editor(prompter, title, footer, initial)?;
    Ok(committed.unwrap_or_else(|| initial.to_vec()))
}

/// Like [`edit_notes`], but reports an abort as `None`.
pub fn run_editor<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    title: &str,
    footer: Option<&str>,
    initial: &[String],
) -> Result<Option<Vec<String>>, InputError> {
    let mut prompter = prompter.scoped_help(notes_help);
    let mut buffer = NoteBuffer::new(initial.to_vec());
    let mut show_help = true;

    loop {
        prompter.say(title)?;
        buffer.render(prompter.writer())?;
        if let Some(footer) = footer {
            prompter.say(footer)?;
        }
        if show_help {
            prompter.show_help()?;
            show_help = false;
        } else {
            prompter.say(HINT)?;
        }

        let raw = match prompter.read_line("> ") {
            Ok(raw) => raw,
            Err(InputError::Closed) => return Ok(Some(buffer.into_lines())),
            Err(e) => return Err(e),
        };

        match NoteCommand::parse(&raw, buffer.len()) {
            NoteCommand::Commit => return Ok(Some(buffer.into_lines())),
            NoteCommand::Abort => return Ok(None),
            NoteCommand::Help => show_help = true,
            command => {
                buffer.apply(&command);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::{output, prompter};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_positional_commands() {
        assert_eq!(NoteCommand::parse("2 c", 2), NoteCommand::Replace(2, "c".into()));
        assert_eq!(NoteCommand::parse("1 \x04", 2), NoteCommand::Delete(1));
        assert_eq!(
            NoteCommand::parse("1 two  words ", 1),
            NoteCommand::Replace(1, "two  words ".into())
        );
    }

    #[test]
    fn out_of_range_numbers_append() {
        assert_eq!(NoteCommand::parse("3 c", 2), NoteCommand::Append("3 c".into()));
        assert_eq!(NoteCommand::parse("0 c", 2), NoteCommand::Append("0 c".into()));
        assert_eq!(NoteCommand::parse("1x c", 2), NoteCommand::Append("1x c".into()));
        assert_eq!(NoteCommand::parse("12", 20), NoteCommand::Append("12".into()));
    }

    #[test]
    fn parse_control_tokens() {
        assert_eq!(NoteCommand::parse("\x18", 0), NoteCommand::Commit);
        assert_eq!(NoteCommand::parse("\x01", 0), NoteCommand::Abort);
        assert_eq!(NoteCommand::parse("\x04", 3), NoteCommand::Clear);
        assert_eq!(NoteCommand::parse("?", 0), NoteCommand::Help);
        assert_eq!(NoteCommand::parse("  ", 0), NoteCommand::Ignore);
    }

    #[test]
    fn replace_then_delete_renumbers() {
        let mut buffer = NoteBuffer::new(lines(&["a", "b"]));
        buffer.apply(&NoteCommand::parse("2 c", buffer.len()));
        assert_eq!(buffer.lines(), lines(&["a", "c"]));

        buffer.apply(&NoteCommand::parse("1 \x04", buffer.len()));
        assert_eq!(buffer.lines(), lines(&["c"]));

        buffer.apply(&NoteCommand::parse("1 d", buffer.len()));
        assert_eq!(buffer.lines(), lines(&["d"]));
    }

    #[test]
    fn immediate_repeat_is_ignored() {
        let mut buffer = NoteBuffer::new(lines(&["a", "c"]));
        assert!(!buffer.apply(&NoteCommand::parse("c", 2)));
        assert!(!buffer.apply(&NoteCommand::parse("  c ", 2)));
        assert_eq!(buffer.lines(), lines(&["a", "c"]));

        // Only the last line counts.
        assert!(buffer.apply(&NoteCommand::parse("a", 2)));
        assert_eq!(buffer.lines(), lines(&["a", "c", "a"]));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = NoteBuffer::new(lines(&["a", "b"]));
        assert!(buffer.apply(&NoteCommand::Clear));
        assert!(buffer.is_empty());
        assert!(!buffer.apply(&NoteCommand::Clear));
    }

    #[test]
    fn render_numbers_lines() {
        let mut out = Vec::new();
        NoteBuffer::new(lines(&["first"])).render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  1 │ first\n");

        let mut out = Vec::new();
        NoteBuffer::default().render(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("(no notes)"));
    }

    #[test]
    fn loop_commits_on_exit() {
        let mut p = prompter("2 c\n1 \x04\nnew\nnew\n\x18\n");
        let result = edit_notes(&mut p, "Notes", None, &lines(&["a", "b"])).unwrap();
        assert_eq!(result, lines(&["c", "new"]));
    }

    #[test]
    fn loop_abort_restores_initial_lines() {
        let mut p = prompter("\x04\nnew\n\x01\n");
        let result = edit_notes(&mut p, "Notes", None, &lines(&["a", "b"])).unwrap();
        assert_eq!(result, lines(&["a", "b"]));
    }

    #[test]
    fn run_editor_tells_abort_from_unchanged_commit() {
        let initial = lines(&["a"]);
        let mut p = prompter("\x18\n");
        assert_eq!(run_editor(&mut p, "Notes", None, &initial).unwrap(), Some(initial.clone()));

        let mut p = prompter("b\n\x01\n");
        assert_eq!(run_editor(&mut p, "Notes", None, &initial).unwrap(), None);
    }

    #[test]
    fn loop_commits_on_end_of_input() {
        let mut p = prompter("x\n");
        let result = edit_notes(&mut p, "Notes", None, &[]).unwrap();
        assert_eq!(result, lines(&["x"]));
    }

    #[test]
    fn help_banner_once_then_hint() {
        let mut p = prompter("a\nb\n?\n\x18\n");
        edit_notes(&mut p, "Notes", Some("-- footer --"), &[]).unwrap();
        let out = output(p);
        assert_eq!(out.matches("append a line").count(), 2);
        assert_eq!(out.matches(HINT).count(), 2);
        assert_eq!(out.matches("-- footer --").count(), 4);
    }

    #[test]
    fn help_renderer_is_restored_after_editing() {
        let mut p = prompter("\x18\n?\n\n");
        edit_notes(&mut p, "Notes", None, &[]).unwrap();
        p.text("after: ", "").unwrap();
        assert!(output(p).contains("^A = abort action"));
    }
}
