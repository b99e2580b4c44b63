//! Prefix-driven record search.
//!
//! A query string is lower-cased, then its leading prefix (if any) picks the
//! fields to look at. The rest of the string is a plain substring searched
//! for in each of those fields.
//!
//! ```text
//! #all:  org, full addresses, emails, phone/mobile/fax
//! all:   org, addresses (city/state/country/street), emails
//! org:   organisation
//! #add:  full addresses (plus number and zip)
//! add:   addresses (city/state/country/street)
//! @:     emails
//! #:     phone/mobile/fax
//! (none) first name, last name, nickname
//! ```

use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    AllExtended,
    All,
    Organisation,
    AddressExtended,
    Address,
    Email,
    Phone,
    Name,
}

/// Checked front to back. `#all:` has to come before `all:` and `#add:`
/// before `add:`.
const PREFIXES: [(&str, QueryMode); 7] = [
    ("#all:", QueryMode::AllExtended),
    ("all:", QueryMode::All),
    ("org:", QueryMode::Organisation),
    ("#add:", QueryMode::AddressExtended),
    ("add:", QueryMode::Address),
    ("@:", QueryMode::Email),
    ("#:", QueryMode::Phone),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mode: QueryMode,
    pub needle: String,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        for (prefix, mode) in PREFIXES {
            if let Some(rest) = lowered.strip_prefix(prefix) {
                return Self {
                    mode,
                    needle: rest.to_string(),
                };
            }
        }
        Self {
            mode: QueryMode::Name,
            needle: lowered,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        fields(self.mode, record)
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// True when `record` matches the raw query string.
pub fn matches(record: &Record, query: &str) -> bool {
    Query::parse(query).matches(record)
}

fn fields(mode: QueryMode, record: &Record) -> Vec<&str> {
    let p = &record.personals;
    let (private, work) = (&record.private, &record.work);
    let mut out: Vec<&str> = Vec::new();

    let organisation = matches!(
        mode,
        QueryMode::AllExtended | QueryMode::All | QueryMode::Organisation
    );
    let emails = matches!(
        mode,
        QueryMode::AllExtended | QueryMode::All | QueryMode::Email
    );
    let numbers = matches!(mode, QueryMode::AllExtended | QueryMode::Phone);

    if organisation {
        out.push(&p.organisation);
    }
    match mode {
        QueryMode::AllExtended | QueryMode::AddressExtended => {
            out.extend(private.address.all_fields());
            out.extend(work.address.all_fields());
        }
        QueryMode::All | QueryMode::Address => {
            out.extend(private.address.place_fields());
            out.extend(work.address.place_fields());
        }
        _ => {}
    }
    if emails {
        out.push(&private.email);
        out.push(&work.email);
    }
    if numbers {
        out.extend(private.numbers());
        out.extend(work.numbers());
    }
    if mode == QueryMode::Name {
        out.extend([p.first_name.as_str(), p.last_name.as_str(), p.nickname.as_str()]);
    }
    out
}
