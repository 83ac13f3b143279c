//! Birth-date normalization to ISO 8601 calendar dates.
//!
//! Parsing runs in two tiers and the order matters:
//!
//! 1. A fixed, priority-ordered list of explicit layouts. Each layout is
//!    anchored to the whole value, so `03/04/2020` is always read day-first
//!    (`2020-04-03`) and never reinterpreted.
//! 2. A permissive scan for a date embedded in noisy text (timestamps,
//!    sentences, textual month names), still preferring day-before-month.
//!
//! Values that yield no complete calendar date normalize to `None`.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};

use crate::text::fold_diacritics;

/// A `strptime` format plus the shape the whole value must have.
///
/// The shape pins the digit count of each component: chrono's `%Y` also
/// accepts one- and two-digit years, which must fall through to the `%y`
/// layouts instead.
struct ExplicitLayout {
    format: &'static str,
    shape: Regex,
}

/// Explicit layouts in priority order.
const EXPLICIT_FORMATS: [(&str, &str); 8] = [
    ("%Y-%m-%d", r"^\d{4}-\d{1,2}-\d{1,2}$"),
    ("%d-%m-%Y", r"^\d{1,2}-\d{1,2}-\d{4}$"),
    ("%d/%m/%Y", r"^\d{1,2}/\d{1,2}/\d{4}$"),
    ("%Y/%m/%d", r"^\d{4}/\d{1,2}/\d{1,2}$"),
    ("%d/%m/%y", r"^\d{1,2}/\d{1,2}/\d{2}$"),
    ("%d-%m-%y", r"^\d{1,2}-\d{1,2}-\d{2}$"),
    ("%d.%m.%Y", r"^\d{1,2}\.\d{1,2}\.\d{4}$"),
    ("%Y.%m.%d", r"^\d{4}\.\d{1,2}\.\d{1,2}$"),
];

static EXPLICIT_LAYOUTS: LazyLock<Vec<ExplicitLayout>> = LazyLock::new(|| {
    EXPLICIT_FORMATS
        .iter()
        .map(|&(format, shape)| ExplicitLayout {
            format,
            shape: Regex::new(shape).expect("Invalid date layout regex"),
        })
        .collect()
});

static EMBEDDED_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d])(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})(?:[^\d]|$)")
        .expect("Invalid embedded y-m-d regex")
});

static EMBEDDED_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d])(\d{1,2})[-/. ](\d{1,2})[-/. ](\d{4}|\d{2})(?:[^\d]|$)")
        .expect("Invalid embedded d-m-y regex")
});

static TEXTUAL_DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{1,2})(?:st|nd|rd|th|º)?\s*(?:de\s+|of\s+)?([a-z]{3,})\.?,?\s*(?:de\s+)?(\d{4})",
    )
    .expect("Invalid textual day-first regex")
});

static TEXTUAL_MONTH_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z]{3,})\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})")
        .expect("Invalid textual month-first regex")
});

static COMPACT_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d])(\d{4})(\d{2})(\d{2})(?:[^\d]|$)").expect("Invalid compact date regex")
});

/// Month names and abbreviations (Portuguese, English, Spanish), diacritics folded.
const MONTH_NAMES: &[(&str, u32)] = &[
    ("jan", 1),
    ("janeiro", 1),
    ("january", 1),
    ("ene", 1),
    ("enero", 1),
    ("fev", 2),
    ("fevereiro", 2),
    ("feb", 2),
    ("february", 2),
    ("febrero", 2),
    ("mar", 3),
    ("marco", 3),
    ("march", 3),
    ("marzo", 3),
    ("abr", 4),
    ("abril", 4),
    ("apr", 4),
    ("april", 4),
    ("mai", 5),
    ("maio", 5),
    ("may", 5),
    ("mayo", 5),
    ("jun", 6),
    ("junho", 6),
    ("june", 6),
    ("junio", 6),
    ("jul", 7),
    ("julho", 7),
    ("july", 7),
    ("julio", 7),
    ("ago", 8),
    ("agosto", 8),
    ("aug", 8),
    ("august", 8),
    ("set", 9),
    ("setembro", 9),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("septiembre", 9),
    ("setiembre", 9),
    ("out", 10),
    ("outubro", 10),
    ("oct", 10),
    ("october", 10),
    ("octubre", 10),
    ("nov", 11),
    ("novembro", 11),
    ("november", 11),
    ("noviembre", 11),
    ("dez", 12),
    ("dezembro", 12),
    ("dec", 12),
    ("december", 12),
    ("dic", 12),
    ("diciembre", 12),
];

/// Parses a birth date from free-form text.
///
/// Returns `None` for blank, partial (year-only, month-year), or
/// unparseable values.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_explicit(trimmed).or_else(|| parse_permissive(trimmed))
}

/// Normalizes a birth date to `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use roster_normalize::normalize_birth_date;
///
/// assert_eq!(normalize_birth_date("15/03/2020").as_deref(), Some("2020-03-15"));
/// assert_eq!(normalize_birth_date("not a date"), None);
/// ```
pub fn normalize_birth_date(value: &str) -> Option<String> {
    parse_birth_date(value).map(|date| date.format("%Y-%m-%d").to_string())
}

fn parse_explicit(value: &str) -> Option<NaiveDate> {
    EXPLICIT_LAYOUTS
        .iter()
        .filter(|layout| layout.shape.is_match(value))
        .find_map(|layout| {
            let date = NaiveDate::parse_from_str(value, layout.format).ok()?;
            if layout.format.contains("%y") {
                // chrono reads `69` as 2069; keep the strptime pivot.
                date.with_year(expand_year(&format!("{:02}", date.year() % 100))?)
            } else {
                (date.year() != 0).then_some(date)
            }
        })
}

fn parse_permissive(value: &str) -> Option<NaiveDate> {
    let folded = fold_diacritics(value);

    first_match(&EMBEDDED_YMD, &folded, |caps| ymd(&caps[1], &caps[2], &caps[3]))
        .or_else(|| {
            first_match(&EMBEDDED_DMY, &folded, |caps| {
                // Day-first wins; month-first only when day-first is impossible.
                ymd(&caps[3], &caps[2], &caps[1]).or_else(|| ymd(&caps[3], &caps[1], &caps[2]))
            })
        })
        .or_else(|| {
            first_match(&TEXTUAL_DAY_FIRST, &folded, |caps| {
                let month = month_from_name(&caps[2])?;
                date_from_parts(&caps[3], month, &caps[1])
            })
        })
        .or_else(|| {
            first_match(&TEXTUAL_MONTH_FIRST, &folded, |caps| {
                let month = month_from_name(&caps[1])?;
                date_from_parts(&caps[3], month, &caps[2])
            })
        })
        .or_else(|| first_match(&COMPACT_YMD, &folded, |caps| ymd(&caps[1], &caps[2], &caps[3])))
}

fn first_match<F>(regex: &Regex, text: &str, build: F) -> Option<NaiveDate>
where
    F: Fn(&Captures<'_>) -> Option<NaiveDate>,
{
    regex.captures_iter(text).find_map(|caps| build(&caps))
}

fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .find(|(label, _)| *label == name)
        .map(|(_, month)| *month)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    date_from_parts(year, month.parse().ok()?, day)
}

fn date_from_parts(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(expand_year(year)?, month, day.parse().ok()?)
}

/// Two-digit years pivot like POSIX `strptime`: 00-68 is 20xx, 69-99 is 19xx.
/// Year zero does not exist on the calendar `strptime` accepts.
fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    if raw.len() <= 2 {
        Some(if year <= 68 { 2000 + year } else { 1900 + year })
    } else {
        (year != 0).then_some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(value: &str) -> Option<String> {
        normalize_birth_date(value)
    }

    #[test]
    fn explicit_layouts() {
        assert_eq!(iso("15/03/2020").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("2020-03-15").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("15-03-2020").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("2020/03/15").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("15.03.2020").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("2020.3.5").as_deref(), Some("2020-03-05"));
        assert_eq!(iso(" 1/2/1999 ").as_deref(), Some("1999-02-01"));
    }

    #[test]
    fn ambiguous_numeric_dates_are_day_first() {
        assert_eq!(iso("03/04/2020").as_deref(), Some("2020-04-03"));
        assert_eq!(iso("12/11/2010").as_deref(), Some("2010-11-12"));
    }

    #[test]
    fn two_digit_years_pivot() {
        assert_eq!(iso("15/03/20").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("15-03-68").as_deref(), Some("2068-03-15"));
        assert_eq!(iso("15/03/69").as_deref(), Some("1969-03-15"));
        assert_eq!(iso("01/01/99").as_deref(), Some("1999-01-01"));
    }

    #[test]
    fn blank_and_garbage_are_none() {
        assert_eq!(iso(""), None);
        assert_eq!(iso("   "), None);
        assert_eq!(iso("not a date"), None);
        assert_eq!(iso("2020"), None);
        assert_eq!(iso("31/02/2020"), None);
    }

    #[test]
    fn year_zero_is_rejected() {
        assert_eq!(iso("0000-01-01"), None);
        assert_eq!(iso("01/01/0000"), None);
        assert_eq!(iso("born 0000-01-01"), None);
        assert_eq!(iso("01/01/00").as_deref(), Some("2000-01-01"));
    }

    #[test]
    fn four_digit_layouts_ignore_short_years() {
        // `%d/%m/%Y` must not claim a two-digit year; `%d/%m/%y` pivots it.
        assert_eq!(iso("15/03/70").as_deref(), Some("1970-03-15"));
        assert_eq!(iso("2020-1-5").as_deref(), Some("2020-01-05"));
    }

    #[test]
    fn timestamps_keep_only_the_date() {
        assert_eq!(iso("2000-03-15 00:00:00").as_deref(), Some("2000-03-15"));
        assert_eq!(iso("2000-03-15T13:45:00Z").as_deref(), Some("2000-03-15"));
    }

    #[test]
    fn noisy_numeric_dates() {
        assert_eq!(iso("nascido em 15/03/2000.").as_deref(), Some("2000-03-15"));
        assert_eq!(iso("DN: 7 8 1990").as_deref(), Some("1990-08-07"));
        // Day-first is impossible here, so month-first is used.
        assert_eq!(iso("born 12/31/1999").as_deref(), Some("1999-12-31"));
        assert_eq!(iso("id 19991231").as_deref(), Some("1999-12-31"));
    }

    #[test]
    fn textual_months() {
        assert_eq!(iso("15 de março de 2020").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("15 Mar 2020").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("1º de Janeiro de 2001").as_deref(), Some("2001-01-01"));
        assert_eq!(iso("March 15, 2020").as_deref(), Some("2020-03-15"));
        assert_eq!(iso("3rd of August 1985").as_deref(), Some("1985-08-03"));
        assert_eq!(iso("15 de Dezembro, 1980").as_deref(), Some("1980-12-15"));
    }
}
