//! Record edit passes.
//!
//! A pass is a fixed sequence of prompts over part of a record:
//!
//! - [`edit_basic`]: first name, last name, private mobile, private email
//! - [`edit_details`]: the remaining personal fields, then the private and
//!   work contact blocks including their addresses
//! - [`edit_notes`]: the note editor over the record's notes
//!
//! Each pass works on a staged copy of the record. Abort (`^A`) drops the copy
//! and leaves the record as it was. Exit (`^X`, or end of input) keeps every
//! field entered so far and skips the rest. Passes never save; that is the
//! caller's decision.

use crate::config::PhonebookConfig;
use crate::editor;
use crate::input::{InputError, Prompter};
use crate::model::{Contact, Record};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Every prompt of the pass was answered.
    Completed,
    /// The pass was left early; answered fields were kept.
    Exited,
    /// The pass was discarded.
    Aborted,
}

fn field_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Enter = keep the shown value; ^D = clear the field")?;
    writeln!(
        out,
        "^A = discard this pass; ^X = keep what you entered and stop; ? = display help"
    )
}

/// Runs `pass` on a copy of `record` and commits the copy unless aborted.
fn run_pass<F>(record: &mut Record, pass: F) -> Result<EditOutcome, InputError>
where
    F: FnOnce(&mut Record) -> Result<(), InputError>,
{
    let mut staged = record.clone();
    let outcome = match pass(&mut staged) {
        Ok(()) => EditOutcome::Completed,
        Err(e) if e.is_exit() => EditOutcome::Exited,
        Err(InputError::Abort) => {
            debug!(path = %record.file.display(), "edit pass aborted");
            return Ok(EditOutcome::Aborted);
        }
        Err(e) => return Err(e),
    };
    *record = staged;
    Ok(outcome)
}

pub fn edit_basic<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    record: &mut Record,
) -> Result<EditOutcome, InputError> {
    let mut p = prompter.scoped_help(field_help);
    run_pass(record, |r| {
        let personals = &mut r.personals;
        personals.first_name = p.field("First name{}: ", &personals.first_name)?;
        personals.last_name = p.field("Last name{}: ", &personals.last_name)?;
        r.private.mobile = p.phone("Mobile{}: ", &r.private.mobile)?;
        r.private.email = p.email("Email{}: ", &r.private.email)?;
        Ok(())
    })
}

pub fn edit_details<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    record: &mut Record,
    config: &PhonebookConfig,
) -> Result<EditOutcome, InputError> {
    let mut p = prompter.scoped_help(field_help);
    run_pass(record, |r| {
        let personals = &mut r.personals;
        personals.title = p.field("Title{}: ", &personals.title)?;
        personals.nickname = p.field("Nickname{}: ", &personals.nickname)?;
        personals.organisation = p.field("Organisation{}: ", &personals.organisation)?;
        personals.birthday = p.date("Birthday (yyyy-mm-dd){}: ", personals.birthday)?;
        let gender_label = format!(
            "Gender ({}/{}){{}}: ",
            config.male_token, config.female_token
        );
        personals.male = p.boolean(
            &gender_label,
            personals.male,
            &config.male_token,
            &config.female_token,
        )?;

        contact_fields(&mut *p, &mut r.private, "Private", config)?;
        contact_fields(&mut *p, &mut r.work, "Work", config)
    })
}

fn contact_fields<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    contact: &mut Contact,
    block: &str,
    config: &PhonebookConfig,
) -> Result<(), InputError> {
    contact.phone = p.phone(&format!("{} phone{{}}: ", block), &contact.phone)?;
    contact.mobile = p.phone(&format!("{} mobile{{}}: ", block), &contact.mobile)?;
    contact.fax = p.phone(&format!("{} fax{{}}: ", block), &contact.fax)?;
    contact.email = p.email(&format!("{} email{{}}: ", block), &contact.email)?;

    let address = &mut contact.address;
    let street = p.field(&format!("{} street{{}}: ", block), &address.street)?;
    address.street = config.normalize_street(&street);
    address.number = p.field(&format!("{} house number{{}}: ", block), &address.number)?;
    address.zip_code = p.field(&format!("{} zip code{{}}: ", block), &address.zip_code)?;
    address.city = p.field(&format!("{} city{{}}: ", block), &address.city)?;
    address.state = p.field(&format!("{} state{{}}: ", block), &address.state)?;
    address.country = p.field(&format!("{} country{{}}: ", block), &address.country)?;
    Ok(())
}

/// Opens the note editor on the record's notes.
///
/// A commit reports [`EditOutcome::Completed`] even when nothing changed;
/// only `^A` reports [`EditOutcome::Aborted`].
pub fn edit_notes<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    record: &mut Record,
) -> Result<EditOutcome, InputError> {
    let title = format!("Notes for {}", record.display_name());
    match editor::run_editor(prompter, &title, None, &record.notes)? {
        Some(lines) => {
            record.notes = lines;
            Ok(EditOutcome::Completed)
        }
        None => {
            debug!(path = %record.file.display(), "notes edit aborted");
            Ok(EditOutcome::Aborted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::{output, prompter};
    use crate::model::fixtures::max_mustermann;
    use chrono::NaiveDate;

    #[test]
    fn basic_pass_fills_fields() {
        let mut p = prompter("Erika\nMusterfrau\n015 123 456789\nerika@example.org\n");
        let mut record = Record::default();
        let outcome = edit_basic(&mut p, &mut record).unwrap();

        assert_eq!(outcome, EditOutcome::Completed);
        assert_eq!(record.personals.first_name, "Erika");
        assert_eq!(record.personals.last_name, "Musterfrau");
        assert_eq!(record.private.mobile, "015 123 456789");
        assert_eq!(record.private.email, "erika@example.org");
    }

    #[test]
    fn abort_leaves_record_untouched() {
        let mut p = prompter("Erika\nMusterfrau\n\x01\n");
        let mut record = max_mustermann("a.jcontact");
        let before = record.clone();

        let outcome = edit_basic(&mut p, &mut record).unwrap();
        assert_eq!(outcome, EditOutcome::Aborted);
        assert_eq!(record, before);
    }

    #[test]
    fn exit_keeps_fields_entered_so_far() {
        let mut p = prompter("Erika\n\x18\n");
        let mut record = max_mustermann("a.jcontact");

        let outcome = edit_basic(&mut p, &mut record).unwrap();
        assert_eq!(outcome, EditOutcome::Exited);
        assert_eq!(record.personals.first_name, "Erika");
        assert_eq!(record.personals.last_name, "Mustermann");
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let mut p = prompter("Erika\n");
        let mut record = Record::default();
        assert_eq!(edit_basic(&mut p, &mut record).unwrap(), EditOutcome::Exited);
        assert_eq!(record.personals.first_name, "Erika");
    }

    #[test]
    fn blank_answers_keep_values_and_delete_clears() {
        let mut p = prompter("\n\x04\n\n\n");
        let mut record = max_mustermann("a.jcontact");
        edit_basic(&mut p, &mut record).unwrap();
        assert_eq!(record.personals.first_name, "Max");
        assert_eq!(record.personals.last_name, "");
        assert_eq!(record.private.email, "maxi@example.org");
    }

    #[test]
    fn pass_help_mentions_pass_semantics() {
        let mut p = prompter("?\n\x18\n");
        let mut record = Record::default();
        edit_basic(&mut p, &mut record).unwrap();
        assert!(output(p).contains("discard this pass"));
    }

    #[test]
    fn details_pass_walks_all_fields() {
        let input = [
            "Dr.", "Eri", "ACME", "1990-05-17", "f",
            // private
            "", "", "", "", "Hauptstr.", "12", "10115", "Berlin", "", "",
            // work
            "030 123 45678", "", "", "erika@acme.example", "", "", "", "", "", "",
        ]
        .join("\n")
            + "\n";
        let mut p = prompter(&input);
        let mut record = Record::default();
        let config = PhonebookConfig::default();

        let outcome = edit_details(&mut p, &mut record, &config).unwrap();
        assert_eq!(outcome, EditOutcome::Completed);
        assert_eq!(record.personals.title, "Dr.");
        assert_eq!(record.personals.organisation, "ACME");
        assert_eq!(record.personals.birthday, NaiveDate::from_ymd_opt(1990, 5, 17));
        assert!(!record.personals.male);
        assert_eq!(record.private.address.street, "Hauptstrasse");
        assert_eq!(record.private.address.city, "Berlin");
        assert_eq!(record.work.phone, "030 123 45678");
        assert_eq!(record.work.email, "erika@acme.example");
    }

    #[test]
    fn details_pass_exit_after_street_keeps_normalized_street() {
        let input = ["", "", "", "", "", "", "", "", "", "Ringstr.", "\x18"].join("\n") + "\n";
        let mut p = prompter(&input);
        let mut record = Record::default();
        let outcome = edit_details(&mut p, &mut record, &PhonebookConfig::default()).unwrap();

        assert_eq!(outcome, EditOutcome::Exited);
        assert_eq!(record.private.address.street, "Ringstrasse");
    }

    #[test]
    fn notes_pass_updates_notes() {
        let mut p = prompter("1 Ein Musterbeispiel\n\x18\n");
        let mut record = max_mustermann("a.jcontact");
        assert_eq!(edit_notes(&mut p, &mut record).unwrap(), EditOutcome::Completed);
        assert_eq!(record.notes[0], "Ein Musterbeispiel");
        assert_eq!(record.notes.len(), 2);
    }

    #[test]
    fn notes_pass_unchanged_commit_is_completed() {
        let mut p = prompter("\x18\n");
        let mut record = max_mustermann("a.jcontact");
        let before = record.clone();
        assert_eq!(edit_notes(&mut p, &mut record).unwrap(), EditOutcome::Completed);
        assert_eq!(record, before);
    }

    #[test]
    fn notes_pass_abort_reports_aborted() {
        let mut p = prompter("new line\n\x01\n");
        let mut record = max_mustermann("a.jcontact");
        let before = record.notes.clone();
        assert_eq!(edit_notes(&mut p, &mut record).unwrap(), EditOutcome::Aborted);
        assert_eq!(record.notes, before);
    }
}
