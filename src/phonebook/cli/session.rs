//! Interactive console session.
//!
//! ```text
//! main menu ── list ─────┐
//!           ── search ───┴─ paged list ── record menu ── edit passes
//!           ── new ──────────────────────────────────── edit passes
//!           ── settings
//! ```
//!
//! Inside a screen `^A` and `^X` go back to the main menu; at the main menu
//! `^X` quits. End of input ends the session wherever it happens.

use super::commands::AppContext;
use super::print::{line_width, render_full_record, render_messages, render_record_list};
use phonebook::api::{CmdMessage, ConfigAction};
use phonebook::config::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use phonebook::edit::{self, EditOutcome};
use phonebook::error::{PhonebookError, Result};
use phonebook::index::{DisplayRecord, ListCommand, Pager};
use phonebook::input::{InputError, IntBounds, Prompter};
use phonebook::launcher::{mailto_uri, open_uri, tel_uri};
use phonebook::model::{Contact, Record};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Pass {
    Basic,
    Details,
    Notes,
}

#[derive(Debug, Clone, Copy)]
enum MainAction {
    List,
    Search,
    New,
    Settings,
    Quit,
}

#[derive(Debug, Clone, Copy)]
enum RecordAction {
    Edit,
    Details,
    Notes,
    Mail { work: bool },
    Call { work: bool },
    Delete,
    Back,
}

#[derive(Debug, Clone, Copy)]
enum SettingsAction {
    PageSize,
    FileExt,
    GenderTokens,
    Back,
}

const MAIN_MENU: [(&str, MainAction); 5] = [
    ("List contacts", MainAction::List),
    ("Search", MainAction::Search),
    ("New contact", MainAction::New),
    ("Settings", MainAction::Settings),
    ("Quit", MainAction::Quit),
];

const RECORD_MENU: [(&str, RecordAction); 9] = [
    ("Edit", RecordAction::Edit),
    ("Edit details", RecordAction::Details),
    ("Edit notes", RecordAction::Notes),
    ("Mail (private)", RecordAction::Mail { work: false }),
    ("Mail (work)", RecordAction::Mail { work: true }),
    ("Call (private)", RecordAction::Call { work: false }),
    ("Call (work)", RecordAction::Call { work: true }),
    ("Delete", RecordAction::Delete),
    ("Back", RecordAction::Back),
];

const SETTINGS_MENU: [(&str, SettingsAction); 4] = [
    ("Page size", SettingsAction::PageSize),
    ("File extension", SettingsAction::FileExt),
    ("Gender tokens", SettingsAction::GenderTokens),
    ("Back", SettingsAction::Back),
];

const SEARCH_LABEL: &str = "Search (org: add: #add: @: #: all: #all:){}: ";

fn list_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "  next / prev   turn the page")?;
    writeln!(out, "  + / -         show more / fewer contacts per page")?;
    writeln!(out, "  <number>      open a contact")?;
    writeln!(out, "  back          return to the menu")?;
    writeln!(out, "  ^A / ^X       return to the menu")
}

pub(super) fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    loop {
        let action = match p.choice("Phonebook", &MAIN_MENU, Some("^X = quit; ? = help")) {
            Ok(action) => action,
            Err(InputError::Abort) => continue,
            Err(e) if e.is_exit() => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let screen = match action {
            MainAction::List => browse(ctx, p, None),
            MainAction::Search => search(ctx, p),
            MainAction::New => new_contact(ctx, p).map(drop),
            MainAction::Settings => settings(ctx, p),
            MainAction::Quit => return Ok(()),
        };
        if !back_to_menu(screen)? {
            return Ok(());
        }
    }
}

/// Whether the session goes on after a screen ended with `result`.
fn back_to_menu(result: Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(PhonebookError::Input(InputError::Closed)) => Ok(false),
        Err(PhonebookError::Input(InputError::Abort | InputError::Exit)) => Ok(true),
        Err(e) => Err(e),
    }
}

fn write_messages<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    messages: &[CmdMessage],
) -> Result<()> {
    write!(p.writer(), "{}", render_messages(messages))?;
    Ok(())
}

fn search<R: BufRead, W: Write>(ctx: &mut AppContext, p: &mut Prompter<R, W>) -> Result<()> {
    let query = p.text(SEARCH_LABEL, "")?;
    if query.trim().is_empty() {
        return Ok(());
    }
    browse(ctx, p, Some(&query))
}

fn browse<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    p: &mut Prompter<R, W>,
    query: Option<&str>,
) -> Result<()> {
    let mut p = p.scoped_help(list_help);
    let mut pager = Pager::new(0, ctx.config.page_size);

    loop {
        let result = ctx.api.list_records(query)?;
        let listed = result.listed_records;
        if listed.is_empty() {
            if result.messages.is_empty() {
                p.say("No contacts yet.")?;
            }
            return write_messages(&mut *p, &result.messages);
        }

        pager.set_total(listed.len());
        write!(
            p.writer(),
            "{}",
            render_record_list(&listed[pager.range()], line_width())
        )?;
        p.say(format_args!(
            "Page {}/{} ({} contacts) | next, prev, +, -, <number>, back",
            pager.page() + 1,
            pager.page_count(),
            listed.len()
        ))?;

        let command = p.prompt_with("> ", "", None, None, |s| {
            s.parse::<ListCommand>().map(Some)
        })?;
        match command {
            None => {}
            Some(ListCommand::Next) => {
                if !pager.next() {
                    p.say("Already on the last page.")?;
                }
            }
            Some(ListCommand::Prev) => {
                if !pager.prev() {
                    p.say("Already on the first page.")?;
                }
            }
            Some(ListCommand::Grow) => {
                if !pager.grow() {
                    p.say(format_args!("Pages hold at most {} contacts.", MAX_PAGE_SIZE))?;
                }
            }
            Some(ListCommand::Shrink) => {
                if !pager.shrink() {
                    p.say(format_args!("Pages hold at least {} contacts.", MIN_PAGE_SIZE))?;
                }
            }
            Some(ListCommand::Back) => return Ok(()),
            Some(ListCommand::Select(n)) => match listed.into_iter().find(|dr| dr.index == n) {
                Some(dr) => record_menu(ctx, &mut *p, dr)?,
                None => p.say(format_args!("No contact number {} in this list.", n))?,
            },
        }
    }
}

fn record_menu<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    p: &mut Prompter<R, W>,
    selected: DisplayRecord,
) -> Result<()> {
    let index = selected.index;
    let mut record = selected.record;

    loop {
        write!(p.writer(), "{}", render_full_record(index, &record))?;
        let action = p.choice("Contact", &RECORD_MENU, None)?;
        match action {
            RecordAction::Edit => record = edit_contact(ctx, p, record, &[Pass::Basic])?,
            RecordAction::Details => record = edit_contact(ctx, p, record, &[Pass::Details])?,
            RecordAction::Notes => record = edit_contact(ctx, p, record, &[Pass::Notes])?,
            RecordAction::Mail { work } => {
                let uri = mailto_uri(&contact(&record, work).email);
                launch(p, uri, "No email address on file.")?;
            }
            RecordAction::Call { work } => {
                let uri = contact(&record, work).dial_number().and_then(tel_uri);
                launch(p, uri, "No phone number on file.")?;
            }
            RecordAction::Delete => {
                let label = format!("Delete {}? (y/n){{}}: ", record.display_name());
                if p.boolean(&label, false, "y", "n")? {
                    let result = ctx.api.delete_record(record)?;
                    return write_messages(p, &result.messages);
                }
            }
            RecordAction::Back => return Ok(()),
        }
    }
}

fn contact(record: &Record, work: bool) -> &Contact {
    if work {
        &record.work
    } else {
        &record.private
    }
}

fn launch<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    uri: Option<String>,
    missing: &str,
) -> Result<()> {
    let Some(uri) = uri else {
        p.say(missing)?;
        return Ok(());
    };
    if let Err(e) = open_uri(&uri) {
        p.say(format_args!("Could not open {}: {}", uri, e))?;
    }
    Ok(())
}

/// Basic pass, then details unless the basic pass was left early. Saves the
/// record when anything was entered.
pub(super) fn new_contact<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    p: &mut Prompter<R, W>,
) -> Result<Option<Record>> {
    let mut record = ctx.api.new_record();
    p.say("New contact (? = help)")?;

    match edit::edit_basic(p, &mut record)? {
        EditOutcome::Aborted => {
            write_messages(p, &[CmdMessage::warning("New contact discarded.")])?;
            return Ok(None);
        }
        EditOutcome::Completed => {
            edit::edit_details(p, &mut record, &ctx.config)?;
        }
        EditOutcome::Exited => {}
    }

    let result = ctx.api.create_record(record)?;
    write_messages(p, &result.messages)?;
    Ok(result.affected_records.into_iter().next())
}

/// Runs `passes` in order and saves the record if it changed. Returns the
/// record as it now stands.
pub(super) fn edit_contact<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    p: &mut Prompter<R, W>,
    record: Record,
    passes: &[Pass],
) -> Result<Record> {
    let mut edited = record.clone();
    for pass in passes {
        let outcome = match pass {
            Pass::Basic => edit::edit_basic(p, &mut edited)?,
            Pass::Details => edit::edit_details(p, &mut edited, &ctx.config)?,
            Pass::Notes => edit::edit_notes(p, &mut edited)?,
        };
        if outcome != EditOutcome::Completed {
            break;
        }
    }

    if edited == record {
        write_messages(p, &[CmdMessage::info("No changes.")])?;
        return Ok(record);
    }
    let result = ctx.api.update_record(edited.clone())?;
    write_messages(p, &result.messages)?;
    Ok(edited)
}

fn settings<R: BufRead, W: Write>(ctx: &mut AppContext, p: &mut Prompter<R, W>) -> Result<()> {
    loop {
        let config = &ctx.config;
        let line = format!(
            "page size {} | file extension {} | gender {}/{}",
            config.page_size, config.file_ext, config.male_token, config.female_token
        );
        p.say(line)?;

        let (key, value) = match p.choice("Settings", &SETTINGS_MENU, None)? {
            SettingsAction::PageSize => {
                let bounds = IntBounds::between(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64);
                let size = p.int("Page size{}: ", config.page_size as i64, bounds)?;
                ("page-size", size.to_string())
            }
            SettingsAction::FileExt => {
                let ext = p.text("File extension{}: ", &config.file_ext)?;
                ("file-ext", ext)
            }
            SettingsAction::GenderTokens => {
                let current = format!("{}/{}", config.male_token, config.female_token);
                ("gender-tokens", p.text("Gender tokens (male/female){}: ", &current)?)
            }
            SettingsAction::Back => return Ok(()),
        };

        let result = ctx.api.config(ConfigAction::Set(key.to_string(), value))?;
        write_messages(p, &result.messages)?;
        if let Some(config) = result.config {
            if key == "file-ext" {
                p.say("The new file extension applies from the next start.")?;
            }
            ctx.config = config;
        }
    }
}
