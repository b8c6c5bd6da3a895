//! Holiday value type.

use std::fmt;

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Date format used at the crate boundary (`YYYY-MM-DD`).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date flagged as a holiday, stored in `YYYY-MM-DD` form.
///
/// A `Holiday` can only be built through [`Holiday::new`] or
/// [`Holiday::from_date`], both of which reject empty, malformed, and
/// sentinel dates, so every constructed value is valid. The wrapped
/// text is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Holiday {
    date: NaiveDate,
    text: String,
}

impl Holiday {
    /// Build a holiday from a `YYYY-MM-DD` string.
    ///
    /// The exact input string is wrapped on success. Fails with
    /// [`CalendarError::InvalidDate`] if the string is empty, does not
    /// parse as a real zero-padded `YYYY-MM-DD` date, or parses to the
    /// unset sentinel date.
    pub fn new(value: &str) -> Result<Self, CalendarError> {
        let date = validate_date_string(value)?;

        Ok(Self {
            date,
            text: value.to_owned(),
        })
    }

    /// Build a holiday from an already parsed date.
    ///
    /// Fails with [`CalendarError::InvalidDate`] if the date is the
    /// unset sentinel value. Any other date formats to a well-formed
    /// `YYYY-MM-DD` string, so no further validation is applied.
    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        if date == NaiveDate::default() {
            return Err(CalendarError::InvalidDate(date.to_string()));
        }

        Ok(Self {
            date,
            text: date.format(DATE_FORMAT).to_string(),
        })
    }

    /// The wrapped date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The `YYYY-MM-DD` form of the holiday.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Holiday {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Holiday::new(&value)
    }
}

impl From<Holiday> for String {
    fn from(holiday: Holiday) -> Self {
        holiday.text
    }
}

/// Validate a `YYYY-MM-DD` date string.
///
/// chrono accepts unpadded components for `%Y-%m-%d`, so the parsed
/// date is formatted back and compared to enforce the exact 4-2-2
/// zero-padded form. `NaiveDate::default()` stands in for an unset date
/// and is rejected alongside empty and malformed input.
fn validate_date_string(value: &str) -> Result<NaiveDate, CalendarError> {
    if value.is_empty() {
        return Err(CalendarError::InvalidDate(value.to_owned()));
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(value.to_owned()))?;

    if date.format(DATE_FORMAT).to_string() != value || date == NaiveDate::default() {
        return Err(CalendarError::InvalidDate(value.to_owned()));
    }

    Ok(date)
}
