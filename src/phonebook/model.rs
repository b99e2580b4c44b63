use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Birthday components written for a record without a birthday.
pub const UNSET_BIRTHDAY: [i32; 3] = [1, 1, 1];

const UNNAMED: &str = "(unnamed)";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.all_fields().iter().all(|f| f.trim().is_empty())
    }

    /// The fields searched by the short `add:` family of queries.
    pub fn place_fields(&self) -> [&str; 4] {
        [&self.city, &self.state, &self.country, &self.street]
    }

    /// Place fields plus house number and zip code.
    pub fn all_fields(&self) -> [&str; 6] {
        [
            &self.city,
            &self.state,
            &self.country,
            &self.street,
            &self.number,
            &self.zip_code,
        ]
    }

    /// Single line rendering, skipping blank parts.
    pub fn one_line(&self) -> String {
        let street = join_non_blank(&[&self.street, &self.number], " ");
        let town = join_non_blank(&[&self.zip_code, &self.city], " ");
        join_non_blank(&[&street, &town, &self.state, &self.country], ", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personals {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub nickname: String,
    pub organisation: String,
    #[serde(with = "birthday_format")]
    pub birthday: Option<NaiveDate>,
    pub male: bool,
}

impl Personals {
    /// Gender is a flag, not data: it never makes personals non-empty.
    pub fn is_empty(&self) -> bool {
        self.birthday.is_none()
            && [
                &self.first_name,
                &self.last_name,
                &self.title,
                &self.nickname,
                &self.organisation,
            ]
            .iter()
            .all(|f| f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub mobile: String,
    pub fax: String,
    pub email: String,
    pub address: Address,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.numbers().iter().all(|f| f.trim().is_empty())
            && self.email.trim().is_empty()
    }

    pub fn numbers(&self) -> [&str; 3] {
        [&self.phone, &self.mobile, &self.fax]
    }

    /// First number worth dialling: mobile, then phone.
    pub fn dial_number(&self) -> Option<&str> {
        [&self.mobile, &self.phone]
            .into_iter()
            .map(|n| n.trim())
            .find(|n| !n.is_empty())
    }
}

/// One contact plus the file backing it.
///
/// The file path is the record's identity. It is assigned once when the record
/// is created and is not part of the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip)]
    pub file: PathBuf,
    #[serde(default)]
    pub personals: Personals,
    #[serde(default)]
    pub private: Contact,
    #[serde(default)]
    pub work: Contact,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Record {
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn is_empty(&self) -> bool {
        self.personals.is_empty()
            && self.private.is_empty()
            && self.work.is_empty()
            && self.notes.iter().all(|n| n.trim().is_empty())
    }

    /// Name used for sorting and list rendering.
    pub fn display_name(&self) -> String {
        let p = &self.personals;
        let first = p.first_name.trim();
        let last = p.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{}, {}", last, first),
            (true, false) => last.to_string(),
            (false, true) => first.to_string(),
            (true, true) => [&p.nickname, &p.organisation]
                .into_iter()
                .map(|s| s.trim())
                .find(|s| !s.is_empty())
                .unwrap_or(UNNAMED)
                .to_string(),
        }
    }
}

fn join_non_blank(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Birthdays are stored as `[year, month, day]`; `[1, 1, 1]` means unset.
mod birthday_format {
    use super::UNSET_BIRTHDAY;
    use chrono::{Datelike, NaiveDate};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let parts = match date {
            Some(d) => [d.year(), d.month() as i32, d.day() as i32],
            None => UNSET_BIRTHDAY,
        };
        parts.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let parts = <[i32; 3]>::deserialize(deserializer)?;
        if parts == UNSET_BIRTHDAY {
            return Ok(None);
        }
        let [year, month, day] = parts;
        let month = u32::try_from(month).map_err(D::Error::custom)?;
        let day = u32::try_from(day).map_err(D::Error::custom)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid birthday {year}-{month}-{day}")))
    }
}

/// Formats a birthday for prompts and views (`YYYY-MM-DD`).
pub fn format_birthday(date: Option<NaiveDate>) -> String {
    date.map(|d| format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day()))
        .unwrap_or_default()
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn max_mustermann(file: &str) -> Record {
        Record {
            file: PathBuf::from(file),
            personals: Personals {
                first_name: "Max".into(),
                last_name: "Mustermann".into(),
                title: "Herr".into(),
                nickname: "Maxi".into(),
                organisation: "REWE".into(),
                birthday: NaiveDate::from_ymd_opt(1992, 3, 8),
                male: true,
            },
            private: Contact {
                phone: "+49 217 314 9623".into(),
                mobile: "0122 456 55430".into(),
                fax: "".into(),
                email: "maxi@example.org".into(),
                address: Address {
                    street: "Hasenstrasse".into(),
                    number: "55a".into(),
                    zip_code: "51268".into(),
                    city: "Bielefeld".into(),
                    state: "NRW".into(),
                    country: "Deutschland".into(),
                },
            },
            work: Contact {
                phone: "675 432 4456".into(),
                mobile: "".into(),
                fax: "354 643 3340".into(),
                email: "mustermann@rewe.example".into(),
                address: Address {
                    street: "Stadtmitte".into(),
                    number: "1a".into(),
                    zip_code: "50667".into(),
                    city: "Köln".into(),
                    state: "NRW".into(),
                    country: "Deutschland".into(),
                },
            },
            notes: vec!["Ist ein echtes Musterbeispiel!".into(), "Verstehste?!".into()],
        }
    }

    pub fn named(first: &str, last: &str) -> Record {
        let mut record = Record::new(PathBuf::from(format!("{}-{}.jcontact", first, last)));
        record.personals.first_name = first.into();
        record.personals.last_name = last.into();
        record
    }
}
