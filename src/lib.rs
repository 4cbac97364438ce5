//! A platform-agnostic driver for the RV-3028 real-time clock.
//!
//! The driver talks to the device through the `embedded-hal` I2C traits and
//! translates between the device's BCD registers and plain integers, and
//! between its 12/24-hour hour encodings and caller supplied hours with a
//! meridiem.
//!
//! # Features
//!
//! - Field level getters and setters for seconds, minutes, hours, weekday,
//!   date, month and year, each validated before anything is written
//! - Compound reads and writes of the time, the date, or both
//! - 12/24-hour clock mode, read from the device on every query
//! - Backup switchover mode configuration at construction time
//! - Conversion to and from chrono's `NaiveDateTime`
//! - Optional logging through the `log` or `defmt` features
//!
//! # Example
//!
//! ```rust,ignore
//! use rv3028::{BackupSwitchoverMode, DateTimeSetting, RV3028};
//!
//! let mut rtc = RV3028::new(i2c, BackupSwitchoverMode::LevelSwitchingMode)?;
//!
//! let tokens: &[&str] = &["2024", "3", "15", "9", "30", "0", "fri"];
//! rtc.set_rtc_date_time(&DateTimeSetting::try_from(tokens)?)?;
//!
//! let now = rtc.rtc_date_time()?;
//! ```
//!
//! # Consistency
//!
//! Every getter reads the device again; nothing is cached. Compound
//! operations access one register at a time, so a compound read can straddle
//! a seconds rollover and a bus failure during a compound write leaves the
//! earlier fields written. Compound setters validate every field before the
//! first write, so only bus failures can interrupt them.

#![no_std]

use chrono::{NaiveDateTime, Weekday};
use embedded_hal::i2c::I2c;
use paste::paste;

pub mod codec;
pub mod datetime;
pub mod names;
mod registers;

pub use datetime::{
    parse_weekday, validate_hours, DateSetting, DateTimeFields, DateTimeSetting, FieldError,
    RtcDate, RtcTime, TimeSetting,
};
pub use names::{FieldDisplay, NamePresentation};
pub use registers::{
    BackupSwitchoverMode, ClockMode, Control2, EepromBackup, Field, Hours, Meridiem, RegAddr,
    RegisterField,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        use defmt::{debug, error};
    } else if #[cfg(feature = "log")] {
        use log::{debug, error};
    }
}

/// Fixed 7-bit I2C address of the RV-3028.
pub const RV3028_ADDRESS: u8 = 0x52;

/// Session configuration applied by [`RV3028::with_config`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    /// I2C address of the device
    pub address: u8,
    /// Backup switchover mode merged into the EEPROM backup register
    pub backup_switchover_mode: BackupSwitchoverMode,
    /// Compare the EEPROM backup register with the intended value after
    /// writing it
    pub verify_backup_switchover: bool,
}

impl Config {
    /// Configuration for the default address with read-back verification.
    pub const fn new(backup_switchover_mode: BackupSwitchoverMode) -> Self {
        Self {
            address: RV3028_ADDRESS,
            backup_switchover_mode,
            verify_backup_switchover: true,
        }
    }
}

/// Errors returned by the driver.
#[derive(Debug)]
pub enum RV3028Error<I2CE> {
    /// The I2C transport failed; no retry was attempted
    I2c(I2CE),
    /// A value was rejected before any write
    Field(FieldError),
    /// The EEPROM backup register did not read back as written
    BackupSwitchoverMismatch {
        /// Byte that was written
        expected: u8,
        /// Byte that was read back
        actual: u8,
    },
    /// The device holds a value the driver cannot represent
    InvalidRegisterValue {
        /// Register that was read
        register: RegAddr,
        /// Raw register content
        value: u8,
    },
}

impl<I2CE> From<I2CE> for RV3028Error<I2CE> {
    fn from(e: I2CE) -> Self {
        RV3028Error::I2c(e)
    }
}

/// RV-3028 Real-Time Clock driver.
///
/// Owns the I2C bus handle for its lifetime. All operations block until the
/// bus returns.
pub struct RV3028<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> RV3028<I2C> {
    /// Creates a driver at the default address and merges
    /// `backup_switchover_mode` into the EEPROM backup register.
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus implementation
    /// * `backup_switchover_mode` - The backup power switchover mode
    ///
    /// # Returns
    /// * `Ok(RV3028)` on success
    /// * `Err(RV3028Error)` if the bus fails or the register does not read
    ///   back as written
    pub fn new(
        i2c: I2C,
        backup_switchover_mode: BackupSwitchoverMode,
    ) -> Result<Self, RV3028Error<I2C::Error>> {
        Self::with_config(i2c, &Config::new(backup_switchover_mode))
    }

    /// Creates a driver from a [`Config`].
    pub fn with_config(i2c: I2C, config: &Config) -> Result<Self, RV3028Error<I2C::Error>> {
        let mut rtc = Self {
            i2c,
            address: config.address,
        };
        rtc.merge_backup_switchover_mode(
            config.backup_switchover_mode,
            config.verify_backup_switchover,
        )?;
        Ok(rtc)
    }

    /// The I2C address this driver talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    // The mode bits are OR-ed into the existing byte so the other EEPROM
    // backup settings survive.
    fn merge_backup_switchover_mode(
        &mut self,
        mode: BackupSwitchoverMode,
        verify: bool,
    ) -> Result<(), RV3028Error<I2C::Error>> {
        let current = self.eeprom_backup()?;
        let merged = EepromBackup::from(u8::from(current) | mode.bits());
        #[cfg(any(feature = "log", feature = "defmt"))]
        debug!(
            "RV3028: backup switchover {:?}, eeprom backup {} -> {}",
            mode,
            u8::from(current),
            u8::from(merged)
        );
        self.set_eeprom_backup(merged)?;

        let readback = self.eeprom_backup()?;
        if verify && readback != merged {
            #[cfg(any(feature = "log", feature = "defmt"))]
            error!(
                "RV3028: eeprom backup reads {} after writing {}",
                u8::from(readback),
                u8::from(merged)
            );
            return Err(RV3028Error::BackupSwitchoverMismatch {
                expected: merged.into(),
                actual: readback.into(),
            });
        }
        Ok(())
    }

    /// Reads the backup switchover mode currently configured on the device.
    pub fn backup_switchover_mode(
        &mut self,
    ) -> Result<BackupSwitchoverMode, RV3028Error<I2C::Error>> {
        Ok(self.eeprom_backup()?.backup_switchover_mode())
    }

    fn read_register(&mut self, register: RegAddr) -> Result<u8, RV3028Error<I2C::Error>> {
        let mut data = [0];
        self.i2c
            .write_read(self.address, &[register as u8], &mut data)?;
        Ok(data[0])
    }

    fn write_register(
        &mut self,
        register: RegAddr,
        value: u8,
    ) -> Result<(), RV3028Error<I2C::Error>> {
        #[cfg(any(feature = "log", feature = "defmt"))]
        debug!("RV3028: writing {:?} = {}", register, value);
        self.i2c.write(self.address, &[register as u8, value])?;
        Ok(())
    }

    fn read_field(&mut self, field: Field) -> Result<u8, RV3028Error<I2C::Error>> {
        self.read_register(field.register_field().address)
    }

    fn write_field(&mut self, field: Field, value: u8) -> Result<(), RV3028Error<I2C::Error>> {
        self.write_register(field.register_field().address, value)
    }

    fn read_flag(&mut self, flag: RegisterField) -> Result<bool, RV3028Error<I2C::Error>> {
        let value = self.read_register(flag.address)?;
        Ok((value & flag.mask.unwrap_or(0xFF)) != 0)
    }

    /// Reads the hour layout from control 2.
    pub fn clock_mode(&mut self) -> Result<ClockMode, RV3028Error<I2C::Error>> {
        Ok(self.control_2()?.clock_mode())
    }

    /// Returns `true` if the device is in 12-hour mode.
    pub fn is_12_hour_clock(&mut self) -> Result<bool, RV3028Error<I2C::Error>> {
        self.read_flag(RegisterField::CONTROL_2)
    }

    /// Returns `true` if the AM/PM flag of the hours register is set (AM).
    ///
    /// Only meaningful in 12-hour mode.
    pub fn is_am(&mut self) -> Result<bool, RV3028Error<I2C::Error>> {
        self.read_flag(RegisterField::HOURS_AM_PM)
    }

    /// Switches the hour layout, keeping the other control 2 bits.
    ///
    /// The hours register is not rewritten; set the hours afterwards.
    pub fn set_clock_mode(&mut self, clock_mode: ClockMode) -> Result<(), RV3028Error<I2C::Error>> {
        let mut control = self.control_2()?;
        control.set_clock_mode(clock_mode);
        #[cfg(any(feature = "log", feature = "defmt"))]
        debug!("RV3028: clock mode {:?}", clock_mode);
        self.set_control_2(control)
    }

    /// Reads the seconds (0-59).
    pub fn seconds(&mut self) -> Result<u8, RV3028Error<I2C::Error>> {
        Ok(codec::decode_bcd(self.read_field(Field::Seconds)?))
    }

    /// Reads the minutes (0-59).
    pub fn minutes(&mut self) -> Result<u8, RV3028Error<I2C::Error>> {
        Ok(codec::decode_bcd(self.read_field(Field::Minutes)?))
    }

    /// Reads the hours in the device's current clock mode.
    ///
    /// Reads control 2 for the mode, then the hours register.
    pub fn hours(&mut self) -> Result<u8, RV3028Error<I2C::Error>> {
        let clock_mode = self.clock_mode()?;
        let raw = self.read_field(Field::Hours)?;
        Ok(codec::decode_hours(raw, clock_mode).0)
    }

    /// Reads the weekday.
    pub fn weekday(&mut self) -> Result<Weekday, RV3028Error<I2C::Error>> {
        let raw = self.read_field(Field::Weekday)?;
        codec::decode_weekday(raw).ok_or(RV3028Error::InvalidRegisterValue {
            register: RegAddr::Weekday,
            value: raw,
        })
    }

    /// Reads the day of month (1-31).
    pub fn date(&mut self) -> Result<u8, RV3028Error<I2C::Error>> {
        Ok(codec::decode_bcd(self.read_field(Field::Date)?))
    }

    /// Reads the month (1-12).
    pub fn month(&mut self) -> Result<u8, RV3028Error<I2C::Error>> {
        Ok(codec::decode_bcd(self.read_field(Field::Month)?))
    }

    /// Reads the four digit year.
    pub fn year(&mut self) -> Result<u16, RV3028Error<I2C::Error>> {
        Ok(codec::decode_year(self.read_field(Field::Year)?))
    }

    /// Reads the weekday and presents it.
    pub fn weekday_as(
        &mut self,
        presentation: NamePresentation,
    ) -> Result<FieldDisplay, RV3028Error<I2C::Error>> {
        Ok(names::weekday_display(self.weekday()?, presentation))
    }

    /// Reads the day of month and presents it.
    pub fn date_as(
        &mut self,
        presentation: NamePresentation,
    ) -> Result<FieldDisplay, RV3028Error<I2C::Error>> {
        let raw = self.read_field(Field::Date)?;
        names::date_display(codec::decode_bcd(raw), presentation).ok_or(
            RV3028Error::InvalidRegisterValue {
                register: RegAddr::Date,
                value: raw,
            },
        )
    }

    /// Reads the month and presents it.
    pub fn month_as(
        &mut self,
        presentation: NamePresentation,
    ) -> Result<FieldDisplay, RV3028Error<I2C::Error>> {
        let raw = self.read_field(Field::Month)?;
        names::month_display(codec::decode_bcd(raw), presentation).ok_or(
            RV3028Error::InvalidRegisterValue {
                register: RegAddr::Month,
                value: raw,
            },
        )
    }

    /// Sets the seconds (0-59).
    pub fn set_seconds(&mut self, seconds: u8) -> Result<(), RV3028Error<I2C::Error>> {
        Field::Seconds
            .validate(u32::from(seconds), ClockMode::Hour24)
            .map_err(RV3028Error::Field)?;
        self.write_field(Field::Seconds, codec::encode_bcd(seconds))
    }

    /// Sets the minutes (0-59).
    pub fn set_minutes(&mut self, minutes: u8) -> Result<(), RV3028Error<I2C::Error>> {
        Field::Minutes
            .validate(u32::from(minutes), ClockMode::Hour24)
            .map_err(RV3028Error::Field)?;
        self.write_field(Field::Minutes, codec::encode_bcd(minutes))
    }

    /// Sets the hours, switching the device to `clock_mode` first.
    ///
    /// # Arguments
    /// * `hours` - 0-23 in 24-hour mode, 1-12 in 12-hour mode
    /// * `clock_mode` - Hour layout to use, `None` for 24-hour
    /// * `meridiem` - AM/PM, required in 12-hour mode and ignored otherwise
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RV3028Error::Field)` before any bus access if the hour is out
    ///   of range or a 12-hour meridiem is missing
    pub fn set_hours(
        &mut self,
        hours: u8,
        clock_mode: Option<ClockMode>,
        meridiem: Option<Meridiem>,
    ) -> Result<(), RV3028Error<I2C::Error>> {
        let clock_mode = clock_mode.unwrap_or_default();
        validate_hours(hours, clock_mode, meridiem).map_err(RV3028Error::Field)?;
        self.set_clock_mode(clock_mode)?;
        self.write_field(
            Field::Hours,
            codec::encode_hours(hours, clock_mode, meridiem),
        )
    }

    /// Sets the weekday.
    pub fn set_weekday(&mut self, weekday: Weekday) -> Result<(), RV3028Error<I2C::Error>> {
        self.write_field(Field::Weekday, codec::encode_weekday(weekday))
    }

    /// Sets the day of month (1-31).
    pub fn set_date(&mut self, date: u8) -> Result<(), RV3028Error<I2C::Error>> {
        Field::Date
            .validate(u32::from(date), ClockMode::Hour24)
            .map_err(RV3028Error::Field)?;
        self.write_field(Field::Date, codec::encode_bcd(date))
    }

    /// Sets the month (1-12).
    pub fn set_month(&mut self, month: u8) -> Result<(), RV3028Error<I2C::Error>> {
        Field::Month
            .validate(u32::from(month), ClockMode::Hour24)
            .map_err(RV3028Error::Field)?;
        self.write_field(Field::Month, codec::encode_bcd(month))
    }

    /// Sets the four digit year (2000-2099).
    pub fn set_year(&mut self, year: u16) -> Result<(), RV3028Error<I2C::Error>> {
        Field::Year
            .validate(u32::from(year), ClockMode::Hour24)
            .map_err(RV3028Error::Field)?;
        self.write_field(Field::Year, codec::encode_year(year))
    }

    /// Reads hours, minutes and seconds, in that order.
    pub fn rtc_time(&mut self) -> Result<RtcTime, RV3028Error<I2C::Error>> {
        let hours = self.hours()?;
        let minutes = self.minutes()?;
        let seconds = self.seconds()?;
        Ok(RtcTime {
            hours,
            minutes,
            seconds,
        })
    }

    /// Reads weekday, date, month and year, in that order.
    pub fn rtc_date(&mut self) -> Result<RtcDate, RV3028Error<I2C::Error>> {
        let weekday = self.weekday()?;
        let date = self.date()?;
        let month = self.month()?;
        let year = self.year()?;
        Ok(RtcDate {
            weekday,
            date,
            month,
            year,
        })
    }

    /// Reads every calendar and clock field.
    ///
    /// Eight reads: hours, minutes, seconds, weekday, date, month, year and
    /// finally control 2 for the clock mode, which decides how the hours
    /// byte is decoded. A weekday register outside 0-6 does not stop the
    /// pass; it is reported as `weekday: None`.
    pub fn rtc_date_time(&mut self) -> Result<DateTimeFields, RV3028Error<I2C::Error>> {
        let hours = self.read_field(Field::Hours)?;
        let minutes = self.minutes()?;
        let seconds = self.seconds()?;
        let raw_weekday = self.read_field(Field::Weekday)?;
        let weekday = codec::decode_weekday(raw_weekday);
        if weekday.is_none() {
            #[cfg(any(feature = "log", feature = "defmt"))]
            error!("RV3028: weekday register holds {}", raw_weekday);
        }
        let date = self.date()?;
        let month = self.month()?;
        let year = self.year()?;
        let clock_mode = self.clock_mode()?;
        let (hours, meridiem) = codec::decode_hours(hours, clock_mode);
        Ok(DateTimeFields {
            year,
            month,
            date,
            weekday,
            hours,
            minutes,
            seconds,
            clock_mode,
            meridiem,
        })
    }

    /// Writes the weekday (if given), then year, month and date.
    pub fn set_rtc_date(&mut self, setting: &DateSetting) -> Result<(), RV3028Error<I2C::Error>> {
        setting.validate().map_err(RV3028Error::Field)?;
        if let Some(weekday) = setting.weekday() {
            self.set_weekday(weekday)?;
        }
        self.set_year(setting.year())?;
        self.set_month(setting.month())?;
        self.set_date(setting.date())
    }

    /// Writes hours (with the clock mode), minutes and seconds.
    pub fn set_rtc_time(&mut self, setting: &TimeSetting) -> Result<(), RV3028Error<I2C::Error>> {
        setting.validate().map_err(RV3028Error::Field)?;
        self.set_hours(setting.hours(), setting.clock_mode(), setting.meridiem())?;
        self.set_minutes(setting.minutes())?;
        self.set_seconds(setting.seconds())
    }

    /// Writes the date part, then the time part.
    pub fn set_rtc_date_time(
        &mut self,
        setting: &DateTimeSetting,
    ) -> Result<(), RV3028Error<I2C::Error>> {
        setting.validate().map_err(RV3028Error::Field)?;
        self.set_rtc_date(&setting.date)?;
        self.set_rtc_time(&setting.time)
    }

    /// Gets the current date and time from the device.
    ///
    /// # Returns
    /// * `Ok(NaiveDateTime)` - The current date and time
    /// * `Err(RV3028Error)` on error
    pub fn datetime(&mut self) -> Result<NaiveDateTime, RV3028Error<I2C::Error>> {
        self.rtc_date_time()?
            .into_datetime()
            .map_err(RV3028Error::Field)
    }

    /// Sets the date, weekday and time, keeping the device's current clock
    /// mode.
    ///
    /// # Arguments
    /// * `datetime` - The date and time to set
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RV3028Error)` on error
    pub fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), RV3028Error<I2C::Error>> {
        let clock_mode = self.clock_mode()?;
        let setting =
            DateTimeSetting::from_datetime(datetime, clock_mode).map_err(RV3028Error::Field)?;
        self.set_rtc_date_time(&setting)
    }
}

// Raw register access for the multi-purpose registers
macro_rules! impl_register_access {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        impl<I2C: I2c> RV3028<I2C> {
            $(
                paste! {
                    #[doc = concat!("Gets the value of the ", stringify!($name), " register.")]
                    pub fn $name(&mut self) -> Result<$typ, RV3028Error<I2C::Error>> {
                        Ok(<$typ>::from(self.read_register($regaddr)?))
                    }

                    #[doc = concat!("Sets the value of the ", stringify!($name), " register.")]
                    pub fn [<set_ $name>](&mut self, value: $typ) -> Result<(), RV3028Error<I2C::Error>> {
                        self.write_register($regaddr, value.into())
                    }
                }
            )+
        }
    }
}

impl_register_access!(
    (control_2, RegAddr::Control2, Control2),
    (eeprom_backup, RegAddr::EepromBackup, EepromBackup)
);
