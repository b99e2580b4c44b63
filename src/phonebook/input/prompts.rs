use super::{validate, InputError, Prompter};
use crate::model::format_birthday;
use chrono::NaiveDate;
use regex::Regex;
use std::io::{BufRead, Write};

const NUMBER_ERROR: &str = "Please enter a number!";
const CHOICE_ERROR: &str = "Please enter one of the listed options via its number!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntBounds {
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Free text. The delete token is refused.
    pub fn text(&mut self, label: &str, default: &str) -> Result<String, InputError> {
        self.prompt_with(label, default, default.to_string(), None, |s| {
            Ok(s.to_string())
        })
    }

    /// Free text for a record field; the delete token clears it.
    pub fn field(&mut self, label: &str, current: &str) -> Result<String, InputError> {
        self.prompt_with(
            label,
            current,
            current.to_string(),
            Some(String::new()),
            |s| Ok(s.to_string()),
        )
    }

    pub fn rex(
        &mut self,
        label: &str,
        re: &Regex,
        error: &str,
        default: &str,
    ) -> Result<String, InputError> {
        self.prompt_with(label, default, default.to_string(), None, |s| {
            validate::pattern(re, error, s)
        })
    }

    pub fn phone(&mut self, label: &str, current: &str) -> Result<String, InputError> {
        self.prompt_with(
            label,
            current,
            current.to_string(),
            Some(String::new()),
            validate::phone,
        )
    }

    pub fn email(&mut self, label: &str, current: &str) -> Result<String, InputError> {
        self.prompt_with(
            label,
            current,
            current.to_string(),
            Some(String::new()),
            validate::email,
        )
    }

    /// A calendar date; the delete token unsets it.
    pub fn date(
        &mut self,
        label: &str,
        current: Option<NaiveDate>,
    ) -> Result<Option<NaiveDate>, InputError> {
        let shown = format_birthday(current);
        self.prompt_with(label, &shown, current, Some(None), |s| {
            validate::date(s).map(Some)
        })
    }

    pub fn int(
        &mut self,
        label: &str,
        default: i64,
        bounds: IntBounds,
    ) -> Result<i64, InputError> {
        let shown = default.to_string();
        self.prompt_with(label, &shown, default, None, |s| {
            validate::int(s, bounds.min, bounds.max, NUMBER_ERROR)
        })
    }

    /// Two case-insensitive tokens mapping to `true` / `false`.
    pub fn boolean(
        &mut self,
        label: &str,
        default: bool,
        true_token: &str,
        false_token: &str,
    ) -> Result<bool, InputError> {
        let shown = if default { true_token } else { false_token };
        self.prompt_with(label, shown, default, None, |s| {
            validate::boolean(s, true_token, false_token)
        })
    }

    /// Prints a numbered option list and returns the value picked by number.
    pub fn choice<T: Clone>(
        &mut self,
        title: &str,
        options: &[(&str, T)],
        bottom: Option<&str>,
    ) -> Result<T, InputError> {
        let width = options.len().to_string().len();
        let bounds = IntBounds::between(1, options.len() as i64);
        loop {
            self.say(title)?;
            for (i, (name, _)) in options.iter().enumerate() {
                self.say(format_args!("  ({:>width$}) {}", i + 1, name, width = width))?;
            }
            if let Some(bottom) = bottom {
                self.say(bottom)?;
            }
            let picked = self.prompt_with(": ", "", None, None, |s| {
                validate::int(s, bounds.min, bounds.max, CHOICE_ERROR).map(Some)
            })?;
            match picked {
                Some(n) => return Ok(options[(n - 1) as usize].1.clone()),
                None => self.say(CHOICE_ERROR)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn blank_returns_default_for_every_prompt() {
        let mut p = prompter("\n\n\n\n\n\n");
        assert_eq!(p.text("a{}: ", "keep").unwrap(), "keep");
        assert_eq!(p.phone("b{}: ", "not a phone").unwrap(), "not a phone");
        assert_eq!(p.email("c{}: ", "").unwrap(), "");
        let date = NaiveDate::from_ymd_opt(1992, 3, 8);
        assert_eq!(p.date("d{}: ", date).unwrap(), date);
        assert_eq!(p.int("e{}: ", 7, IntBounds::between(5, 6)).unwrap(), 7);
        assert!(p.boolean("f{}: ", true, "m", "f").unwrap());
    }

    #[test]
    fn date_reprompts_on_impossible_day() {
        let mut p = prompter("2021-02-30\n2021-02-28\n");
        let value = p.date("Birthday{}: ", None).unwrap();
        assert_eq!(value, NaiveDate::from_ymd_opt(2021, 2, 28));
        let out = output(p);
        assert!(out.contains("day is out of range for month"));
        assert_eq!(out.matches("Birthday: ").count(), 2);
    }

    #[test]
    fn prompted_birthday_survives_a_round_trip() {
        let mut p = prompter("0001-01-01\n0001-01-02\n");
        let value = p.date("Birthday{}: ", None).unwrap();
        assert!(output(p).contains("reserved for an unset date"));

        let mut record = crate::model::Record::default();
        record.personals.birthday = value;
        let json = serde_json::to_string(&record).unwrap();
        let back: crate::model::Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.personals.birthday, NaiveDate::from_ymd_opt(1, 1, 2));
    }

    #[test]
    fn date_delete_unsets() {
        let mut p = prompter("\x04\n");
        let value = p.date("Birthday{}: ", NaiveDate::from_ymd_opt(2000, 1, 1)).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn phone_reprompts_until_valid() {
        let mut p = prompter("12-34\n+49 217 314 9623\n");
        assert_eq!(p.phone("Phone{}: ", "").unwrap(), "+49 217 314 9623");
        assert!(output(p).contains("Please enter a phone number"));
    }

    #[test]
    fn field_trims_and_clears() {
        let mut p = prompter("  Max  \n\x04\n");
        assert_eq!(p.field("First{}: ", "").unwrap(), "Max");
        assert_eq!(p.field("First{}: ", "Max").unwrap(), "");
    }

    #[test]
    fn label_renders_current_value() {
        let mut p = prompter("\n");
        p.field("First name{}: ", "Max").unwrap();
        assert!(output(p).starts_with("First name (Max): "));
    }

    #[test]
    fn int_enforces_bounds() {
        let mut p = prompter("3\n300\nabc\n50\n");
        assert_eq!(p.int("Size: ", 10, IntBounds::between(5, 200)).unwrap(), 50);
        let out = output(p);
        assert_eq!(out.matches("between 5 and 200").count(), 2);
        assert!(out.contains("Please enter a number!"));
    }

    #[test]
    fn boolean_reprompts_on_unknown_token() {
        let mut p = prompter("x\nF\n");
        assert!(!p.boolean("Male{}: ", true, "m", "f").unwrap());
        assert!(output(p).contains("either 'm' or 'f'"));
    }

    #[test]
    fn rex_uses_caller_pattern() {
        let re = Regex::new(r"^\d{5}$").unwrap();
        let mut p = prompter("abc\n51268\n");
        assert_eq!(p.rex("Zip: ", &re, "five digits", "").unwrap(), "51268");
        assert!(output(p).contains("five digits"));
    }

    #[test]
    fn choice_returns_selected_value() {
        let mut p = prompter("0\n\n2\n");
        let options = [("List", 'l'), ("Search", 's'), ("Quit", 'q')];
        assert_eq!(p.choice("Menu:", &options, Some("pick one")).unwrap(), 's');
        let out = output(p);
        assert!(out.contains("  (1) List"));
        assert!(out.contains("pick one"));
        assert!(out.contains("between 1 and 3"));
    }

    #[test]
    fn choice_passes_abort_through() {
        let mut p = prompter("\x01\n");
        let options = [("List", 1)];
        assert!(matches!(
            p.choice("Menu:", &options, None),
            Err(InputError::Abort)
        ));
    }
}
