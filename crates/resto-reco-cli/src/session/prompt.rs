//! Line-oriented input helpers for the interactive session.
//!
//! Every `ask_*` helper re-asks until the answer parses. Reaching the end of
//! input surfaces as an [`io::ErrorKind::UnexpectedEof`] error so the session
//! can shut down cleanly.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use resto_reco_core::constraint::{is_unconstrained_token, parse_constraint};
use resto_reco_core::{Constraint, CoreError, Cuisine, MealSupport, MealType};

pub(crate) struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `label`, read one line, and return it trimmed.
    pub(crate) fn line(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.out, "  {label}: ")?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.out)?;
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(buf.trim().to_string())
    }

    pub(crate) fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub(crate) fn error(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.out, "  [!] {message}")?;
        Ok(())
    }

    /// Ask until `parse` accepts the answer.
    pub(crate) fn ask<T, E>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> anyhow::Result<T>
    where
        E: std::fmt::Display,
    {
        loop {
            let raw = self.line(label)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    /// Like [`Prompter::ask`], but a blank answer keeps `current`.
    pub(crate) fn ask_or_keep<T, E>(
        &mut self,
        label: &str,
        current: T,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> anyhow::Result<T>
    where
        E: std::fmt::Display,
    {
        let mut current = Some(current);
        self.ask(label, |raw| match current.take() {
            Some(value) if raw.is_empty() => Ok(value),
            kept => {
                current = kept;
                parse(raw)
            }
        })
    }

    /// `Y` or `y` confirms; anything else declines.
    pub(crate) fn confirm(&mut self, label: &str) -> anyhow::Result<bool> {
        Ok(self.line(&format!("{label} (Y/N)"))?.eq_ignore_ascii_case("y"))
    }

    /// Wait for Enter before returning to a menu.
    pub(crate) fn pause(&mut self) -> anyhow::Result<()> {
        self.line("Press Enter to continue")?;
        Ok(())
    }
}

/// Reject blank input, then hand the text on.
pub(crate) fn required(raw: &str) -> Result<&str, String> {
    if raw.is_empty() {
        Err("input cannot be blank".to_string())
    } else {
        Ok(raw)
    }
}

pub(crate) fn number<T: FromStr>(raw: &str) -> Result<T, String> {
    required(raw)?
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid number"))
}

/// Parse a number and run it through a field check.
pub(crate) fn checked<T: FromStr>(
    raw: &str,
    check: impl FnOnce(T) -> Result<T, CoreError>,
) -> Result<T, String> {
    check(number(raw)?).map_err(|e| e.to_string())
}

pub(crate) fn meal_type(raw: &str) -> Result<MealType, String> {
    MealType::from_str(required(raw)?).map_err(|e| e.to_string())
}

/// Comma-separated meal names (`Breakfast, Dinner`) or flags (`BD`).
pub(crate) fn meal_support(raw: &str) -> Result<MealSupport, String> {
    let raw = required(raw)?;
    let by_name = raw
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(MealType::from_str)
        .collect::<Result<Vec<_>, _>>();
    let support = match by_name {
        Ok(meals) => MealSupport::new(meals),
        Err(by_name_err) => MealSupport::from_flags(raw).map_err(|_| by_name_err),
    };
    support.map_err(|e| e.to_string())
}

/// Comma-separated cuisine names; at least one is required.
pub(crate) fn cuisines(raw: &str) -> Result<BTreeSet<Cuisine>, String> {
    let set = required(raw)?
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(Cuisine::from_str)
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|e| e.to_string())?;
    if set.is_empty() {
        return Err("enter at least one cuisine".to_string());
    }
    Ok(set)
}

/// `ANY` (or any other sentinel, including blank) means unconstrained.
pub(crate) fn optional<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<Constraint<T>, String> {
    parse_constraint(raw, parse)
}

/// Like [`optional`], except blank input is refused so that edit prompts can
/// treat blank as "keep".
pub(crate) fn optional_explicit<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<Constraint<T>, String> {
    if !raw.is_empty() && is_unconstrained_token(raw) {
        return Ok(Constraint::Unconstrained);
    }
    parse(raw).map(Constraint::Bound)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rust_decimal::Decimal;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_reasks_until_valid() {
        let mut p = prompter("abc\n-3\n2\n");
        let n: u32 = p.ask("Group size", number).unwrap();
        assert_eq!(n, 2);
        let out = String::from_utf8(p.out).unwrap();
        assert_eq!(out.matches("[!]").count(), 2);
    }

    #[test]
    fn ask_or_keep_keeps_on_blank() {
        let mut p = prompter("\n");
        let value = p.ask_or_keep("Cost", 12.5, |raw| number::<f64>(raw)).unwrap();
        assert!((value - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ask_or_keep_keeps_after_a_bad_answer() {
        let mut p = prompter("nope\n\n");
        let value = p.ask_or_keep("Cost", 12.5, |raw| number::<f64>(raw)).unwrap();
        assert!((value - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn end_of_input_is_unexpected_eof() {
        let mut p = prompter("");
        let err = p.line("Name").unwrap_err();
        let io = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn meal_support_accepts_names_or_flags() {
        assert_eq!(meal_support("dinner, Breakfast").unwrap().flags(), "BD");
        assert_eq!(meal_support("ld").unwrap().flags(), "LD");
        assert!(meal_support("brunch").is_err());
        assert!(meal_support("").is_err());
    }

    #[test]
    fn cuisines_needs_known_names() {
        let set = cuisines("thai, middle eastern").unwrap();
        assert_eq!(set, BTreeSet::from([Cuisine::Thai, Cuisine::MiddleEastern]));
        assert!(cuisines("Martian").is_err());
        assert!(cuisines(" , ").is_err());
    }

    #[test]
    fn optional_treats_blank_and_any_as_unconstrained() {
        let parse = |raw: &str| checked::<f64>(raw, Ok);
        assert_eq!(optional("", parse).unwrap(), Constraint::Unconstrained);
        assert_eq!(optional("any", parse).unwrap(), Constraint::Unconstrained);
        assert_eq!(optional("300", parse).unwrap(), Constraint::Bound(300.0));
    }

    #[test]
    fn money_keeps_exact_cents() {
        let cost: Decimal = checked("2.95", Ok).unwrap();
        assert_eq!(cost * Decimal::from(3), Decimal::new(885, 2));
        assert!(checked::<Decimal>("two", Ok).is_err());
    }

    #[test]
    fn optional_explicit_refuses_blank() {
        let parse = |raw: &str| checked::<f64>(raw, Ok);
        assert!(optional_explicit("", parse).is_err());
        assert_eq!(
            optional_explicit("ANY", parse).unwrap(),
            Constraint::Unconstrained
        );
    }
}
