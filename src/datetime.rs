//! Date and time values exchanged with the RV-3028 driver.
//!
//! This module holds the values read back from the device, the tagged
//! settings accepted by the compound setters, and the validation rules that
//! every write goes through before the bus is touched.
//!
//! # Compound settings
//!
//! The compound setters take one of a fixed set of shapes:
//! - [`DateSetting`]: year, month, date, optionally with a weekday
//! - [`TimeSetting`]: hours, minutes, seconds, optionally with an explicit
//!   clock mode and meridiem
//! - [`DateTimeSetting`]: a date setting followed by a time setting
//!
//! For callers that receive fields as text (a serial console, a config
//! file), each setting can also be built from a token slice. The accepted
//! lengths are 3 or 4 for a date, 3 or 5 for a time and 6, 7 or 9 for a full
//! date-time; anything else is rejected with [`FieldError::InvalidArity`].
//!
//! # Error Handling
//!
//! Validation and conversion errors are reported via [`FieldError`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

#[cfg(feature = "defmt")]
use crate::names::weekday_abbreviation;
use crate::names::{date_display, month_display, weekday_display, FieldDisplay, NamePresentation};
use crate::{ClockMode, Field, Meridiem};

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        use defmt::error;
    } else if #[cfg(feature = "log")] {
        use log::error;
    }
}

const DATE_ARITIES: &[usize] = &[3, 4];
const TIME_ARITIES: &[usize] = &[3, 5];
const DATE_TIME_ARITIES: &[usize] = &[6, 7, 9];

/// Errors raised while validating or converting date and time values.
///
/// None of these involve the bus: a value that fails here is never written.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// A value is outside the range accepted for its field
    InvalidFieldValue {
        /// The offending field
        field: Field,
        /// The rejected value
        value: u32,
        /// Smallest accepted value
        min: u16,
        /// Largest accepted value
        max: u16,
    },
    /// 12-hour mode was requested without a meridiem
    MissingMeridiem,
    /// A meridiem token other than `am` or `pm`
    InvalidMeridiem,
    /// A token slice had an unsupported number of fields
    InvalidArity {
        /// Accepted lengths
        accepted: &'static [usize],
        /// Length received
        got: usize,
    },
    /// A weekday symbol outside `mon`..`sun`
    InvalidWeekday,
    /// A backup switchover mode other than `DEF`, `DSM`, `LSM` or `OFF`
    InvalidBackupSwitchoverMode,
    /// A clock mode other than `12` or `24`
    InvalidClockMode,
    /// A token that is not a number where one is expected
    InvalidNumber,
    /// The fields do not form a valid calendar date and time
    InvalidDateTime,
}

impl Field {
    /// Checks `value` against this field's range for the given clock mode.
    pub fn validate(self, value: u32, clock_mode: ClockMode) -> Result<(), FieldError> {
        let (min, max) = self.range(clock_mode);
        if value < u32::from(min) || value > u32::from(max) {
            #[cfg(any(feature = "log", feature = "defmt"))]
            error!("{:?} value {} must be between {} and {}", self, value, min, max);
            return Err(FieldError::InvalidFieldValue {
                field: self,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// Checks an hour for the given clock mode. 12-hour mode requires a
/// meridiem.
pub fn validate_hours(
    hours: u8,
    clock_mode: ClockMode,
    meridiem: Option<Meridiem>,
) -> Result<(), FieldError> {
    Field::Hours.validate(u32::from(hours), clock_mode)?;
    if clock_mode == ClockMode::Hour12 && meridiem.is_none() {
        #[cfg(any(feature = "log", feature = "defmt"))]
        error!("12-hour clock requires a meridiem");
        return Err(FieldError::MissingMeridiem);
    }
    Ok(())
}

/// Parses one of the seven weekday symbols `mon`, `tue`, `wed`, `thu`,
/// `fri`, `sat`, `sun`.
pub fn parse_weekday(symbol: &str) -> Result<Weekday, FieldError> {
    match symbol {
        "mon" => Ok(Weekday::Mon),
        "tue" => Ok(Weekday::Tue),
        "wed" => Ok(Weekday::Wed),
        "thu" => Ok(Weekday::Thu),
        "fri" => Ok(Weekday::Fri),
        "sat" => Ok(Weekday::Sat),
        "sun" => Ok(Weekday::Sun),
        _ => Err(FieldError::InvalidWeekday),
    }
}

// Parses wide and range-checks before narrowing, so oversized tokens are
// reported against their field.
fn parse_field<T: TryFrom<u32>>(
    token: &str,
    field: Field,
    clock_mode: ClockMode,
) -> Result<T, FieldError> {
    let value: u32 = token.trim().parse().map_err(|_| FieldError::InvalidNumber)?;
    field.validate(value, clock_mode)?;
    T::try_from(value).map_err(|_| FieldError::InvalidNumber)
}

/// Time of day as read from the device.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcTime {
    /// Hours, in the device's current clock mode
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

/// Calendar date as read from the device.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RtcDate {
    /// Day of week
    pub weekday: Weekday,
    /// Day of month (1-31)
    pub date: u8,
    /// Month (1-12)
    pub month: u8,
    /// Four digit year
    pub year: u16,
}

#[cfg(feature = "defmt")]
impl defmt::Format for RtcDate {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "RtcDate({} {}-{}-{})",
            weekday_abbreviation(self.weekday),
            self.year,
            self.month,
            self.date
        );
    }
}

impl RtcDate {
    /// Presents the weekday.
    pub fn weekday_display(&self, presentation: NamePresentation) -> FieldDisplay {
        weekday_display(self.weekday, presentation)
    }

    /// Presents the day of month, `None` if the device holds an impossible
    /// date.
    pub fn date_display(&self, presentation: NamePresentation) -> Option<FieldDisplay> {
        date_display(self.date, presentation)
    }

    /// Presents the month, `None` if the device holds an impossible month.
    pub fn month_display(&self, presentation: NamePresentation) -> Option<FieldDisplay> {
        month_display(self.month, presentation)
    }
}

/// Every calendar and clock field of the device, read in one pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DateTimeFields {
    /// Four digit year
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub date: u8,
    /// Day of week, `None` if the weekday register held a value above 6
    pub weekday: Option<Weekday>,
    /// Hours, in `clock_mode`
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
    /// Hour layout the device was in
    pub clock_mode: ClockMode,
    /// AM/PM, only present in 12-hour mode
    pub meridiem: Option<Meridiem>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for DateTimeFields {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "DateTimeFields({} {}-{}-{} {}:{}:{} {} {})",
            self.weekday.map(weekday_abbreviation).unwrap_or("?"),
            self.year,
            self.month,
            self.date,
            self.hours,
            self.minutes,
            self.seconds,
            self.clock_mode,
            self.meridiem
        );
    }
}

impl DateTimeFields {
    /// The time of day part.
    pub fn rtc_time(&self) -> RtcTime {
        RtcTime {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }

    /// The calendar date part, `None` if the weekday could not be decoded.
    pub fn rtc_date(&self) -> Option<RtcDate> {
        Some(RtcDate {
            weekday: self.weekday?,
            date: self.date,
            month: self.month,
            year: self.year,
        })
    }

    /// Converts to a chrono `NaiveDateTime`, folding 12-hour values back to
    /// 0-23. The weekday register is not consulted.
    pub fn into_datetime(self) -> Result<NaiveDateTime, FieldError> {
        let hours = match (self.clock_mode, self.meridiem) {
            (ClockMode::Hour12, Some(Meridiem::Am)) if self.hours == 12 => 0,
            (ClockMode::Hour12, Some(Meridiem::Pm)) if self.hours == 12 => 12,
            (ClockMode::Hour12, Some(Meridiem::Pm)) => self.hours + 12,
            _ => self.hours,
        };
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.date),
        )
        .and_then(|d| {
            d.and_hms_opt(
                u32::from(hours),
                u32::from(self.minutes),
                u32::from(self.seconds),
            )
        })
        .ok_or(FieldError::InvalidDateTime)
    }
}

/// Date fields for [`RV3028::set_rtc_date`](crate::RV3028::set_rtc_date).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DateSetting {
    /// Year, month and date; the weekday register is left alone
    YearMonthDate {
        /// Four digit year (2000-2099)
        year: u16,
        /// Month (1-12)
        month: u8,
        /// Day of month (1-31)
        date: u8,
    },
    /// Year, month, date and weekday
    YearMonthDateWeekday {
        /// Four digit year (2000-2099)
        year: u16,
        /// Month (1-12)
        month: u8,
        /// Day of month (1-31)
        date: u8,
        /// Day of week
        weekday: Weekday,
    },
}

impl DateSetting {
    /// Four digit year.
    pub fn year(&self) -> u16 {
        match *self {
            DateSetting::YearMonthDate { year, .. }
            | DateSetting::YearMonthDateWeekday { year, .. } => year,
        }
    }

    /// Month.
    pub fn month(&self) -> u8 {
        match *self {
            DateSetting::YearMonthDate { month, .. }
            | DateSetting::YearMonthDateWeekday { month, .. } => month,
        }
    }

    /// Day of month.
    pub fn date(&self) -> u8 {
        match *self {
            DateSetting::YearMonthDate { date, .. }
            | DateSetting::YearMonthDateWeekday { date, .. } => date,
        }
    }

    /// Weekday, if one is being set.
    pub fn weekday(&self) -> Option<Weekday> {
        match *self {
            DateSetting::YearMonthDate { .. } => None,
            DateSetting::YearMonthDateWeekday { weekday, .. } => Some(weekday),
        }
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), FieldError> {
        Field::Year.validate(u32::from(self.year()), ClockMode::Hour24)?;
        Field::Month.validate(u32::from(self.month()), ClockMode::Hour24)?;
        Field::Date.validate(u32::from(self.date()), ClockMode::Hour24)
    }
}

impl TryFrom<&[&str]> for DateSetting {
    type Error = FieldError;

    /// Builds a date setting from `[year, month, date]` or
    /// `[year, month, date, weekday]`.
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        match tokens {
            [year, month, date] => Ok(DateSetting::YearMonthDate {
                year: parse_field(year, Field::Year, ClockMode::Hour24)?,
                month: parse_field(month, Field::Month, ClockMode::Hour24)?,
                date: parse_field(date, Field::Date, ClockMode::Hour24)?,
            }),
            [year, month, date, weekday] => Ok(DateSetting::YearMonthDateWeekday {
                year: parse_field(year, Field::Year, ClockMode::Hour24)?,
                month: parse_field(month, Field::Month, ClockMode::Hour24)?,
                date: parse_field(date, Field::Date, ClockMode::Hour24)?,
                weekday: parse_weekday(weekday)?,
            }),
            _ => Err(FieldError::InvalidArity {
                accepted: DATE_ARITIES,
                got: tokens.len(),
            }),
        }
    }
}

/// Time fields for [`RV3028::set_rtc_time`](crate::RV3028::set_rtc_time).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TimeSetting {
    /// Hours, minutes and seconds in 24-hour mode
    HoursMinutesSeconds {
        /// Hours (0-23)
        hours: u8,
        /// Minutes (0-59)
        minutes: u8,
        /// Seconds (0-59)
        seconds: u8,
    },
    /// Hours, minutes and seconds in an explicit clock mode
    WithClockMode {
        /// Hours (0-23, or 1-12 in 12-hour mode)
        hours: u8,
        /// Minutes (0-59)
        minutes: u8,
        /// Seconds (0-59)
        seconds: u8,
        /// Hour layout to switch the device to
        clock_mode: ClockMode,
        /// AM/PM, required in 12-hour mode
        meridiem: Option<Meridiem>,
    },
}

impl TimeSetting {
    /// Hours.
    pub fn hours(&self) -> u8 {
        match *self {
            TimeSetting::HoursMinutesSeconds { hours, .. }
            | TimeSetting::WithClockMode { hours, .. } => hours,
        }
    }

    /// Minutes.
    pub fn minutes(&self) -> u8 {
        match *self {
            TimeSetting::HoursMinutesSeconds { minutes, .. }
            | TimeSetting::WithClockMode { minutes, .. } => minutes,
        }
    }

    /// Seconds.
    pub fn seconds(&self) -> u8 {
        match *self {
            TimeSetting::HoursMinutesSeconds { seconds, .. }
            | TimeSetting::WithClockMode { seconds, .. } => seconds,
        }
    }

    /// Requested clock mode, `None` for the 24-hour default.
    pub fn clock_mode(&self) -> Option<ClockMode> {
        match *self {
            TimeSetting::HoursMinutesSeconds { .. } => None,
            TimeSetting::WithClockMode { clock_mode, .. } => Some(clock_mode),
        }
    }

    /// Requested meridiem.
    pub fn meridiem(&self) -> Option<Meridiem> {
        match *self {
            TimeSetting::HoursMinutesSeconds { .. } => None,
            TimeSetting::WithClockMode { meridiem, .. } => meridiem,
        }
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), FieldError> {
        let clock_mode = self.clock_mode().unwrap_or_default();
        validate_hours(self.hours(), clock_mode, self.meridiem())?;
        Field::Minutes.validate(u32::from(self.minutes()), clock_mode)?;
        Field::Seconds.validate(u32::from(self.seconds()), clock_mode)
    }
}

impl TryFrom<&[&str]> for TimeSetting {
    type Error = FieldError;

    /// Builds a time setting from `[hours, minutes, seconds]` or
    /// `[hours, minutes, seconds, "12" | "24", "am" | "pm"]`. The meridiem
    /// token is ignored for `"24"`.
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        match tokens {
            [hours, minutes, seconds] => Ok(TimeSetting::HoursMinutesSeconds {
                hours: parse_field(hours, Field::Hours, ClockMode::Hour24)?,
                minutes: parse_field(minutes, Field::Minutes, ClockMode::Hour24)?,
                seconds: parse_field(seconds, Field::Seconds, ClockMode::Hour24)?,
            }),
            [hours, minutes, seconds, clock_mode, meridiem] => {
                let clock_mode: ClockMode = clock_mode.parse()?;
                let meridiem = match clock_mode {
                    ClockMode::Hour12 => Some(meridiem.parse::<Meridiem>()?),
                    ClockMode::Hour24 => None,
                };
                Ok(TimeSetting::WithClockMode {
                    hours: parse_field(hours, Field::Hours, clock_mode)?,
                    minutes: parse_field(minutes, Field::Minutes, clock_mode)?,
                    seconds: parse_field(seconds, Field::Seconds, clock_mode)?,
                    clock_mode,
                    meridiem,
                })
            }
            _ => Err(FieldError::InvalidArity {
                accepted: TIME_ARITIES,
                got: tokens.len(),
            }),
        }
    }
}

/// Full date and time for
/// [`RV3028::set_rtc_date_time`](crate::RV3028::set_rtc_date_time).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DateTimeSetting {
    /// Date part, written first
    pub date: DateSetting,
    /// Time part
    pub time: TimeSetting,
}

impl DateTimeSetting {
    /// Checks every field.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.date.validate()?;
        self.time.validate()
    }

    /// Builds a setting from a chrono `NaiveDateTime`, expressing the hour in
    /// `clock_mode` and deriving the weekday from the date.
    pub fn from_datetime(
        datetime: &NaiveDateTime,
        clock_mode: ClockMode,
    ) -> Result<Self, FieldError> {
        let year = u16::try_from(datetime.year()).map_err(|_| FieldError::InvalidDateTime)?;
        Field::Year.validate(u32::from(year), clock_mode)?;

        // chrono guarantees these fit their registers
        let hour = datetime.hour() as u8;
        let (hours, meridiem) = match clock_mode {
            ClockMode::Hour24 => (hour, None),
            ClockMode::Hour12 => {
                let (hours, meridiem) = match hour {
                    0 => (12, Meridiem::Am),
                    1..=11 => (hour, Meridiem::Am),
                    12 => (12, Meridiem::Pm),
                    _ => (hour - 12, Meridiem::Pm),
                };
                (hours, Some(meridiem))
            }
        };

        Ok(DateTimeSetting {
            date: DateSetting::YearMonthDateWeekday {
                year,
                month: datetime.month() as u8,
                date: datetime.day() as u8,
                weekday: datetime.weekday(),
            },
            time: TimeSetting::WithClockMode {
                hours,
                minutes: datetime.minute() as u8,
                seconds: datetime.second() as u8,
                clock_mode,
                meridiem,
            },
        })
    }
}

impl TryFrom<&[&str]> for DateTimeSetting {
    type Error = FieldError;

    /// Builds a date-time setting from
    /// `[year, month, date, hours, minutes, seconds]`, optionally followed by
    /// `weekday`, optionally followed by `"12" | "24", "am" | "pm"`.
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        let (date, time) = match tokens.len() {
            6 => (
                DateSetting::try_from(&tokens[..3])?,
                TimeSetting::try_from(&tokens[3..6])?,
            ),
            7 => {
                let date = [tokens[0], tokens[1], tokens[2], tokens[6]];
                (
                    DateSetting::try_from(&date[..])?,
                    TimeSetting::try_from(&tokens[3..6])?,
                )
            }
            9 => {
                let date = [tokens[0], tokens[1], tokens[2], tokens[6]];
                let time = [tokens[3], tokens[4], tokens[5], tokens[7], tokens[8]];
                (
                    DateSetting::try_from(&date[..])?,
                    TimeSetting::try_from(&time[..])?,
                )
            }
            got => {
                return Err(FieldError::InvalidArity {
                    accepted: DATE_TIME_ARITIES,
                    got,
                })
            }
        };
        Ok(DateTimeSetting { date, time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validate_bounds() {
        assert!(Field::Seconds.validate(0, ClockMode::Hour24).is_ok());
        assert!(Field::Seconds.validate(59, ClockMode::Hour24).is_ok());
        assert_eq!(
            Field::Seconds.validate(60, ClockMode::Hour24),
            Err(FieldError::InvalidFieldValue {
                field: Field::Seconds,
                value: 60,
                min: 0,
                max: 59
            })
        );
        assert!(Field::Month.validate(0, ClockMode::Hour24).is_err());
        assert!(Field::Month.validate(13, ClockMode::Hour24).is_err());
        assert!(Field::Date.validate(0, ClockMode::Hour24).is_err());
        assert!(Field::Date.validate(32, ClockMode::Hour24).is_err());
        assert!(Field::Year.validate(1999, ClockMode::Hour24).is_err());
        assert!(Field::Year.validate(2100, ClockMode::Hour24).is_err());
        assert!(Field::Year.validate(2099, ClockMode::Hour24).is_ok());
    }

    #[test]
    fn test_validate_hours() {
        assert!(validate_hours(0, ClockMode::Hour24, None).is_ok());
        assert!(validate_hours(23, ClockMode::Hour24, None).is_ok());
        assert!(validate_hours(24, ClockMode::Hour24, None).is_err());
        assert!(validate_hours(12, ClockMode::Hour12, Some(Meridiem::Am)).is_ok());
        assert!(matches!(
            validate_hours(0, ClockMode::Hour12, Some(Meridiem::Am)),
            Err(FieldError::InvalidFieldValue { min: 1, max: 12, .. })
        ));
        assert_eq!(
            validate_hours(11, ClockMode::Hour12, None),
            Err(FieldError::MissingMeridiem)
        );
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("mon"), Ok(Weekday::Mon));
        assert_eq!(parse_weekday("sun"), Ok(Weekday::Sun));
        assert_eq!(parse_weekday("xyz"), Err(FieldError::InvalidWeekday));
        assert_eq!(parse_weekday(""), Err(FieldError::InvalidWeekday));
    }

    #[test]
    fn test_date_setting_from_tokens() {
        let tokens: &[&str] = &["2024", "3", "15"];
        assert_eq!(
            DateSetting::try_from(tokens),
            Ok(DateSetting::YearMonthDate {
                year: 2024,
                month: 3,
                date: 15
            })
        );

        let tokens: &[&str] = &["2024", "3", "15", "fri"];
        let setting = DateSetting::try_from(tokens).unwrap();
        assert_eq!(setting.weekday(), Some(Weekday::Fri));

        let tokens: &[&str] = &["2024", "3", "15", "xyz"];
        assert_eq!(
            DateSetting::try_from(tokens),
            Err(FieldError::InvalidWeekday)
        );

        let tokens: &[&str] = &["2024", "3"];
        assert_eq!(
            DateSetting::try_from(tokens),
            Err(FieldError::InvalidArity {
                accepted: &[3, 4],
                got: 2
            })
        );

        let tokens: &[&str] = &["twenty", "3", "15"];
        assert_eq!(
            DateSetting::try_from(tokens),
            Err(FieldError::InvalidNumber)
        );
    }

    #[test]
    fn test_time_setting_from_tokens() {
        let tokens: &[&str] = &["9", "30", "0"];
        let setting = TimeSetting::try_from(tokens).unwrap();
        assert_eq!(setting.clock_mode(), None);
        assert_eq!(setting.hours(), 9);

        let tokens: &[&str] = &["11", "30", "0", "12", "pm"];
        let setting = TimeSetting::try_from(tokens).unwrap();
        assert_eq!(setting.clock_mode(), Some(ClockMode::Hour12));
        assert_eq!(setting.meridiem(), Some(Meridiem::Pm));

        let tokens: &[&str] = &["11", "30", "0", "12", "noon"];
        assert_eq!(
            TimeSetting::try_from(tokens),
            Err(FieldError::InvalidMeridiem)
        );

        let tokens: &[&str] = &["17", "30", "0", "24", "-"];
        let setting = TimeSetting::try_from(tokens).unwrap();
        assert_eq!(setting.meridiem(), None);

        let tokens: &[&str] = &["11", "30", "0", "12"];
        assert!(matches!(
            TimeSetting::try_from(tokens),
            Err(FieldError::InvalidArity { got: 4, .. })
        ));
    }

    #[test]
    fn test_oversized_tokens_name_their_field() {
        let tokens: &[&str] = &["300", "30", "0"];
        assert_eq!(
            TimeSetting::try_from(tokens),
            Err(FieldError::InvalidFieldValue {
                field: Field::Hours,
                value: 300,
                min: 0,
                max: 23
            })
        );

        let tokens: &[&str] = &["99999", "3", "15"];
        assert_eq!(
            DateSetting::try_from(tokens),
            Err(FieldError::InvalidFieldValue {
                field: Field::Year,
                value: 99999,
                min: 2000,
                max: 2099
            })
        );

        // Hours are checked against the requested clock mode
        let tokens: &[&str] = &["13", "0", "0", "12", "pm"];
        assert!(matches!(
            TimeSetting::try_from(tokens),
            Err(FieldError::InvalidFieldValue {
                field: Field::Hours,
                min: 1,
                max: 12,
                ..
            })
        ));

        let tokens: &[&str] = &["-1", "0", "0"];
        assert_eq!(
            TimeSetting::try_from(tokens),
            Err(FieldError::InvalidNumber)
        );
    }

    #[test]
    fn test_date_time_setting_from_tokens() {
        let tokens: &[&str] = &["2024", "3", "15", "9", "30", "0"];
        let setting = DateTimeSetting::try_from(tokens).unwrap();
        assert_eq!(setting.date.weekday(), None);
        assert_eq!(setting.time.minutes(), 30);

        let tokens: &[&str] = &["2024", "3", "15", "9", "30", "0", "fri"];
        let setting = DateTimeSetting::try_from(tokens).unwrap();
        assert_eq!(setting.date.weekday(), Some(Weekday::Fri));
        assert_eq!(setting.time.clock_mode(), None);

        let tokens: &[&str] = &["2024", "3", "15", "9", "30", "0", "fri", "12", "am"];
        let setting = DateTimeSetting::try_from(tokens).unwrap();
        assert_eq!(setting.time.clock_mode(), Some(ClockMode::Hour12));
        assert_eq!(setting.time.meridiem(), Some(Meridiem::Am));

        let tokens: &[&str] = &["2024", "3", "15", "9", "30", "0", "fri", "12"];
        assert_eq!(
            DateTimeSetting::try_from(tokens),
            Err(FieldError::InvalidArity {
                accepted: &[6, 7, 9],
                got: 8
            })
        );
    }

    #[test]
    fn test_setting_validation() {
        let setting = DateSetting::YearMonthDate {
            year: 2024,
            month: 13,
            date: 1,
        };
        assert!(matches!(
            setting.validate(),
            Err(FieldError::InvalidFieldValue {
                field: Field::Month,
                value: 13,
                ..
            })
        ));

        let setting = TimeSetting::WithClockMode {
            hours: 13,
            minutes: 0,
            seconds: 0,
            clock_mode: ClockMode::Hour12,
            meridiem: Some(Meridiem::Pm),
        };
        assert!(setting.validate().is_err());

        let setting = TimeSetting::HoursMinutesSeconds {
            hours: 23,
            minutes: 59,
            seconds: 59,
        };
        assert!(setting.validate().is_ok());
    }

    #[test]
    fn test_from_datetime_twelve_hour_mode() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap();
        let setting = DateTimeSetting::from_datetime(&dt, ClockMode::Hour12).unwrap();
        assert_eq!(setting.time.hours(), 12);
        assert_eq!(setting.time.meridiem(), Some(Meridiem::Am));
        assert_eq!(setting.date.weekday(), Some(Weekday::Mon));

        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap();
        let setting = DateTimeSetting::from_datetime(&dt, ClockMode::Hour12).unwrap();
        assert_eq!(setting.time.hours(), 1);
        assert_eq!(setting.time.meridiem(), Some(Meridiem::Pm));

        let setting = DateTimeSetting::from_datetime(&dt, ClockMode::Hour24).unwrap();
        assert_eq!(setting.time.hours(), 13);
        assert_eq!(setting.time.meridiem(), None);
    }

    #[test]
    fn test_from_datetime_year_out_of_range() {
        let dt = NaiveDate::from_ymd_opt(2100, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            DateTimeSetting::from_datetime(&dt, ClockMode::Hour24),
            Err(FieldError::InvalidFieldValue {
                field: Field::Year,
                ..
            })
        ));
    }

    #[test]
    fn test_into_datetime() {
        let fields = DateTimeFields {
            year: 2024,
            month: 3,
            date: 14,
            weekday: Some(Weekday::Thu),
            hours: 2,
            minutes: 45,
            seconds: 30,
            clock_mode: ClockMode::Hour12,
            meridiem: Some(Meridiem::Pm),
        };
        let dt = fields.into_datetime().unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 45);
        assert_eq!(dt.second(), 30);

        let midnight = DateTimeFields {
            hours: 12,
            meridiem: Some(Meridiem::Am),
            ..fields
        };
        assert_eq!(midnight.into_datetime().unwrap().hour(), 0);

        let invalid = DateTimeFields {
            date: 31,
            month: 2,
            ..fields
        };
        assert_eq!(invalid.into_datetime(), Err(FieldError::InvalidDateTime));

        let unknown_weekday = DateTimeFields {
            weekday: None,
            ..fields
        };
        assert_eq!(unknown_weekday.rtc_date(), None);
        assert_eq!(unknown_weekday.into_datetime().unwrap().day(), 14);
        assert_eq!(fields.rtc_date().unwrap().weekday, Weekday::Thu);
    }
}
