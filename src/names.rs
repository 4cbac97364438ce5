//! Human readable presentation of months, weekdays and dates.

use core::fmt;

use chrono::Weekday;

use crate::codec::encode_weekday;

static MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

static WEEKDAYS_LONG: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

static DATE_ORDINALS: [&str; 31] = [
    "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th", "11th", "12th", "13th",
    "14th", "15th", "16th", "17th", "18th", "19th", "20th", "21st", "22nd", "23rd", "24th", "25th",
    "26th", "27th", "28th", "29th", "30th", "31st",
];

/// How a month, weekday or date should be presented.
///
/// Selectors that make no sense for a field fall back to `Numeric`: months
/// and weekdays have no ordinal form, dates have no name.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamePresentation {
    /// The decoded number
    #[default]
    Numeric,
    /// Three letter name, e.g. `Mar`
    Abbreviated,
    /// Full name, e.g. `March`
    Full,
    /// Number with ordinal suffix, e.g. `3rd`
    Ordinal,
}

/// A presented field value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldDisplay {
    /// Numeric form
    Number(u8),
    /// Name or ordinal form
    Text(&'static str),
}

impl fmt::Display for FieldDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDisplay::Number(n) => write!(f, "{}", n),
            FieldDisplay::Text(s) => f.write_str(s),
        }
    }
}

/// Presents a month (1-12). Returns `None` if a name is requested for a
/// month outside that range.
pub fn month_display(month: u8, presentation: NamePresentation) -> Option<FieldDisplay> {
    let table = match presentation {
        NamePresentation::Abbreviated => &MONTHS_SHORT,
        NamePresentation::Full => &MONTHS_LONG,
        NamePresentation::Numeric | NamePresentation::Ordinal => {
            return Some(FieldDisplay::Number(month))
        }
    };
    let index = usize::from(month.checked_sub(1)?);
    table.get(index).copied().map(FieldDisplay::Text)
}

/// Presents a day of month (1-31). Returns `None` if an ordinal is requested
/// for a date outside that range.
pub fn date_display(date: u8, presentation: NamePresentation) -> Option<FieldDisplay> {
    match presentation {
        NamePresentation::Ordinal => {
            let index = usize::from(date.checked_sub(1)?);
            DATE_ORDINALS.get(index).copied().map(FieldDisplay::Text)
        }
        _ => Some(FieldDisplay::Number(date)),
    }
}

/// Three letter weekday name.
pub fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    WEEKDAYS_SHORT[usize::from(encode_weekday(weekday))]
}

/// Presents a weekday. The numeric form is the register index (Monday = 0).
pub fn weekday_display(weekday: Weekday, presentation: NamePresentation) -> FieldDisplay {
    let index = encode_weekday(weekday);
    match presentation {
        NamePresentation::Abbreviated => FieldDisplay::Text(weekday_abbreviation(weekday)),
        NamePresentation::Full => FieldDisplay::Text(WEEKDAYS_LONG[usize::from(index)]),
        NamePresentation::Numeric | NamePresentation::Ordinal => FieldDisplay::Number(index),
    }
}
