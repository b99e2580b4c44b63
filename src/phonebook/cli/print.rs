use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::index::DisplayRecord;
use phonebook::model::{format_birthday, Contact, Record};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const LABEL_WIDTH: usize = 14;
const NAME_WIDTH: usize = 32;

/// Terminal width, or a fixed width when stdout is not a terminal.
pub(super) fn line_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// One line per record: number, display name, then the most useful reachability.
pub(super) fn render_record_list(records: &[DisplayRecord], width: usize) -> String {
    if records.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let idx_width = records
        .iter()
        .map(|dr| dr.index.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for dr in records {
        let idx = format!("{:>w$}. ", dr.index, w = idx_width);
        let name = truncate_to_width(&dr.record.display_name(), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        let available = width.saturating_sub(2 + idx.width() + NAME_WIDTH + 2);
        let detail = truncate_to_width(&summary(&dr.record), available);

        out.push_str(&format!(
            "  {}{}{}  {}\n",
            idx.yellow(),
            name,
            " ".repeat(padding),
            detail.dimmed()
        ));
    }
    out
}

fn summary(record: &Record) -> String {
    let p = &record.personals;
    let reach = [
        record.private.dial_number(),
        record.work.dial_number(),
        Some(record.private.email.trim()),
        Some(record.work.email.trim()),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.is_empty())
    .unwrap_or_default();

    [p.organisation.trim(), reach, record.private.address.city.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

pub(super) fn render_full_records(records: &[DisplayRecord]) -> String {
    records
        .iter()
        .map(|dr| render_full_record(dr.index, &dr.record))
        .collect::<Vec<_>>()
        .join("\n================================\n\n")
}

pub(super) fn render_full_record(index: usize, record: &Record) -> String {
    let mut out = format!(
        "{} {}\n--------------------------------\n",
        format!("{}.", index).yellow(),
        record.display_name().bold()
    );

    let p = &record.personals;
    let birthday = format_birthday(p.birthday);
    let mut personal = vec![
        ("Title", p.title.as_str()),
        ("Nickname", p.nickname.as_str()),
        ("Organisation", p.organisation.as_str()),
        ("Birthday", birthday.as_str()),
    ];
    if !p.is_empty() {
        personal.push(("Gender", if p.male { "male" } else { "female" }));
    }
    push_fields(&mut out, "", &personal);

    push_contact(&mut out, "Private", &record.private);
    push_contact(&mut out, "Work", &record.work);

    if !record.notes.is_empty() {
        out.push_str(&format!("{}\n", "Notes".bold()));
        for note in &record.notes {
            out.push_str(&format!("  {}\n", note));
        }
    }
    out
}

fn push_contact(out: &mut String, heading: &str, contact: &Contact) {
    if contact.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", heading.bold()));
    let address = contact.address.one_line();
    push_fields(
        out,
        "  ",
        &[
            ("Phone", contact.phone.as_str()),
            ("Mobile", contact.mobile.as_str()),
            ("Fax", contact.fax.as_str()),
            ("Email", contact.email.as_str()),
            ("Address", address.as_str()),
        ],
    );
}

fn push_fields(out: &mut String, indent: &str, fields: &[(&str, &str)]) {
    for (label, value) in fields {
        if value.trim().is_empty() {
            continue;
        }
        let label = format!("{}:", label);
        out.push_str(&format!(
            "{}{:<w$} {}\n",
            indent,
            label.dimmed(),
            value,
            w = LABEL_WIDTH
        ));
    }
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
