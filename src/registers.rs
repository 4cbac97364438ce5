//! Register definitions and bitfield structures for the RV-3028 RTC.
//!
//! This module contains the register address map, the field descriptors used
//! by the driver to locate each calendar value, and bitfield views of the
//! multi-purpose registers (hours, control 2 and the EEPROM backup mirror).

use core::str::FromStr;

use bitfield::bitfield;

use crate::datetime::FieldError;

/// Register addresses for the RV-3028 RTC.
#[allow(unused)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// Seconds register (0-59)
    Seconds = 0x00,
    /// Minutes register (0-59)
    Minutes = 0x01,
    /// Hours register (1-12 + AM/PM or 0-23)
    Hours = 0x02,
    /// Weekday register (0-6)
    Weekday = 0x03,
    /// Date register (1-31)
    Date = 0x04,
    /// Month register (1-12)
    Month = 0x05,
    /// Year register (0-99)
    Year = 0x06,
    /// Minutes alarm register
    MinutesAlarm = 0x07,
    /// Hours alarm register
    HoursAlarm = 0x08,
    /// Weekday/date alarm register
    WeekdayDateAlarm = 0x09,
    /// Timer value, low byte
    TimerValue0 = 0x0A,
    /// Timer value, high nibble
    TimerValue1 = 0x0B,
    /// Timer status, low byte
    TimerStatus0 = 0x0C,
    /// Timer status, high nibble
    TimerStatus1 = 0x0D,
    /// Status register
    Status = 0x0E,
    /// Control 1 register
    Control1 = 0x0F,
    /// Control 2 register
    Control2 = 0x10,
    /// General purpose bits
    GpBits = 0x11,
    /// Clock interrupt mask
    ClockInterruptMask = 0x12,
    /// Event control register
    EventControl = 0x13,
    /// Time stamp event counter
    CountTimeStamp = 0x14,
    /// Time stamp seconds
    SecondsTimeStamp = 0x15,
    /// Time stamp minutes
    MinutesTimeStamp = 0x16,
    /// Time stamp hours
    HoursTimeStamp = 0x17,
    /// Time stamp date
    DateTimeStamp = 0x18,
    /// Time stamp month
    MonthTimeStamp = 0x19,
    /// Time stamp year
    YearTimeStamp = 0x1A,
    /// Unix time counter, byte 0
    UnixTime0 = 0x1B,
    /// Unix time counter, byte 1
    UnixTime1 = 0x1C,
    /// Unix time counter, byte 2
    UnixTime2 = 0x1D,
    /// Unix time counter, byte 3
    UnixTime3 = 0x1E,
    /// User RAM 1
    UserRam1 = 0x1F,
    /// User RAM 2
    UserRam2 = 0x20,
    /// Write protection password, byte 0
    Password0 = 0x21,
    /// Write protection password, byte 1
    Password1 = 0x22,
    /// Write protection password, byte 2
    Password2 = 0x23,
    /// Write protection password, byte 3
    Password3 = 0x24,
    /// EEPROM address
    EeAddress = 0x25,
    /// EEPROM data
    EeData = 0x26,
    /// EEPROM command
    EeCommand = 0x27,
    /// Part identifier
    Id = 0x28,
    /// EEPROM password enable (RAM mirror)
    EepromPasswordEnable = 0x30,
    /// EEPROM password, byte 0 (RAM mirror)
    EepromPassword0 = 0x31,
    /// EEPROM password, byte 1 (RAM mirror)
    EepromPassword1 = 0x32,
    /// EEPROM password, byte 2 (RAM mirror)
    EepromPassword2 = 0x33,
    /// EEPROM password, byte 3 (RAM mirror)
    EepromPassword3 = 0x34,
    /// EEPROM clock output configuration (RAM mirror)
    EepromClkout = 0x35,
    /// EEPROM frequency offset (RAM mirror)
    EepromOffset = 0x36,
    /// EEPROM backup configuration (RAM mirror)
    EepromBackup = 0x37,
}

/// Location of a logical value on the device.
///
/// `mask` is set for flags that share a register with other data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterField {
    /// Register holding the value
    pub address: RegAddr,
    /// Bits of interest, `None` when the whole register is the value
    pub mask: Option<u8>,
}

impl RegisterField {
    /// Seconds, BCD 00-59
    pub const SECONDS: Self = Self::whole(RegAddr::Seconds);
    /// Minutes, BCD 00-59
    pub const MINUTES: Self = Self::whole(RegAddr::Minutes);
    /// Hours, BCD in either 12 or 24 hour layout
    pub const HOURS: Self = Self::whole(RegAddr::Hours);
    /// AM/PM flag of the hours register (12-hour mode only)
    pub const HOURS_AM_PM: Self = Self::masked(RegAddr::Hours, 0b0010_0000);
    /// Weekday, raw 0-6
    pub const WEEKDAY: Self = Self::whole(RegAddr::Weekday);
    /// Date, BCD 01-31
    pub const DATE: Self = Self::whole(RegAddr::Date);
    /// Month, BCD 01-12
    pub const MONTH: Self = Self::whole(RegAddr::Month);
    /// Year, BCD 00-99
    pub const YEAR: Self = Self::whole(RegAddr::Year);
    /// 12/24 hour mode bit of control 2 (set = 12-hour)
    pub const CONTROL_2: Self = Self::masked(RegAddr::Control2, 0b0000_0010);
    /// Backup switchover mode bits of the EEPROM backup register
    pub const EEPROM_BACKUP: Self = Self::masked(RegAddr::EepromBackup, 0b0000_1100);

    const fn whole(address: RegAddr) -> Self {
        Self {
            address,
            mask: None,
        }
    }

    const fn masked(address: RegAddr, mask: u8) -> Self {
        Self {
            address,
            mask: Some(mask),
        }
    }
}

/// Calendar and clock fields exposed by the driver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Seconds (0-59)
    Seconds,
    /// Minutes (0-59)
    Minutes,
    /// Hours (0-23, or 1-12 in 12-hour mode)
    Hours,
    /// Day of week (0-6, Monday = 0)
    Weekday,
    /// Day of month (1-31)
    Date,
    /// Month (1-12)
    Month,
    /// Four digit year (2000-2099)
    Year,
}

impl Field {
    /// Returns where this field lives on the device.
    pub const fn register_field(self) -> RegisterField {
        match self {
            Field::Seconds => RegisterField::SECONDS,
            Field::Minutes => RegisterField::MINUTES,
            Field::Hours => RegisterField::HOURS,
            Field::Weekday => RegisterField::WEEKDAY,
            Field::Date => RegisterField::DATE,
            Field::Month => RegisterField::MONTH,
            Field::Year => RegisterField::YEAR,
        }
    }

    /// Returns the inclusive range of values accepted for this field.
    pub const fn range(self, clock_mode: ClockMode) -> (u16, u16) {
        match self {
            Field::Seconds | Field::Minutes => (0, 59),
            Field::Hours => match clock_mode {
                ClockMode::Hour24 => (0, 23),
                ClockMode::Hour12 => (1, 12),
            },
            Field::Weekday => (0, 6),
            Field::Date => (1, 31),
            Field::Month => (1, 12),
            Field::Year => (2000, 2099),
        }
    }
}

/// Hour layout of the hours register.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    /// 24-hour format (0-23), the power-on default
    #[default]
    Hour24 = 0,
    /// 12-hour format (1-12 + AM/PM)
    Hour12 = 1,
}
impl From<u8> for ClockMode {
    /// Creates a `ClockMode` from the 12/24 bit of control 2.
    fn from(v: u8) -> Self {
        match v & 0b1 {
            0 => ClockMode::Hour24,
            _ => ClockMode::Hour12,
        }
    }
}
impl From<ClockMode> for u8 {
    fn from(v: ClockMode) -> Self {
        v as u8
    }
}
impl FromStr for ClockMode {
    type Err = FieldError;

    /// Parses `"12"` or `"24"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24" => Ok(ClockMode::Hour24),
            "12" => Ok(ClockMode::Hour12),
            _ => Err(FieldError::InvalidClockMode),
        }
    }
}

/// AM/PM designator, encoded in bit 5 of the hours register in 12-hour mode.
///
/// The bit is set for AM and clear for PM.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    /// Ante meridiem
    Am = 1,
    /// Post meridiem
    Pm = 0,
}
impl From<u8> for Meridiem {
    fn from(v: u8) -> Self {
        match v & 0b1 {
            0 => Meridiem::Pm,
            _ => Meridiem::Am,
        }
    }
}
impl From<Meridiem> for u8 {
    fn from(v: Meridiem) -> Self {
        v as u8
    }
}
impl FromStr for Meridiem {
    type Err = FieldError;

    /// Parses `"am"` or `"pm"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            _ => Err(FieldError::InvalidMeridiem),
        }
    }
}

/// Backup switchover mode (BSM), bits 3:2 of the EEPROM backup register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackupSwitchoverMode {
    /// Switchover disabled (factory default)
    Default = 0b00,
    /// Direct switching mode
    DirectSwitchingMode = 0b01,
    /// Switchover disabled, only main supply used
    Disabled = 0b10,
    /// Level switching mode
    LevelSwitchingMode = 0b11,
}

impl BackupSwitchoverMode {
    /// The mode's bit pattern in register position (bits 3:2).
    pub const fn bits(self) -> u8 {
        (self as u8) << 2
    }
}
impl From<u8> for BackupSwitchoverMode {
    fn from(v: u8) -> Self {
        match v & 0b11 {
            0b00 => BackupSwitchoverMode::Default,
            0b01 => BackupSwitchoverMode::DirectSwitchingMode,
            0b10 => BackupSwitchoverMode::Disabled,
            _ => BackupSwitchoverMode::LevelSwitchingMode,
        }
    }
}
impl From<BackupSwitchoverMode> for u8 {
    fn from(v: BackupSwitchoverMode) -> Self {
        v as u8
    }
}
impl FromStr for BackupSwitchoverMode {
    type Err = FieldError;

    /// Parses the datasheet abbreviations `DEF`, `DSM`, `LSM` and `OFF`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEF" => Ok(BackupSwitchoverMode::Default),
            "DSM" => Ok(BackupSwitchoverMode::DirectSwitchingMode),
            "LSM" => Ok(BackupSwitchoverMode::LevelSwitchingMode),
            "OFF" => Ok(BackupSwitchoverMode::Disabled),
            _ => Err(FieldError::InvalidBackupSwitchoverMode),
        }
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ty) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                paste::paste!([< $typ >](v))
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
    };
}

bitfield! {
    /// Hours register.
    ///
    /// Bit 5 is the tens-of-twenty digit in 24-hour mode and the AM/PM flag in
    /// 12-hour mode.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Hours(u8);
    impl Debug;
    /// Tens place of hours in 24-hour mode (0-2)
    pub ten_hours, set_ten_hours: 5, 4;
    /// AM/PM flag in 12-hour mode
    pub from into Meridiem, meridiem, set_meridiem: 5, 5;
    /// Tens place of hours in 12-hour mode (0-1)
    pub ten_hours_12, set_ten_hours_12: 4, 4;
    /// Ones place of hours (0-9)
    pub hours, set_hours: 3, 0;
}
from_register_u8!(Hours);

bitfield! {
    /// Control 2 register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control2(u8);
    impl Debug;
    /// Time stamp enable
    pub time_stamp_enable, set_time_stamp_enable: 7;
    /// Interrupt controlled clock output enable
    pub clock_interrupt_enable, set_clock_interrupt_enable: 6;
    /// Periodic time update interrupt enable
    pub update_interrupt_enable, set_update_interrupt_enable: 5;
    /// Periodic countdown timer interrupt enable
    pub timer_interrupt_enable, set_timer_interrupt_enable: 4;
    /// Alarm interrupt enable
    pub alarm_interrupt_enable, set_alarm_interrupt_enable: 3;
    /// External event interrupt enable
    pub event_interrupt_enable, set_event_interrupt_enable: 2;
    /// 12/24 hour mode select
    pub from into ClockMode, clock_mode, set_clock_mode: 1, 1;
    /// Time prescaler reset
    pub reset, set_reset: 0;
}
from_register_u8!(Control2);

bitfield! {
    /// EEPROM backup register (RAM mirror at 0x37).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct EepromBackup(u8);
    impl Debug;
    /// Bit 0 of the EEPROM frequency offset
    pub eeprom_offset_lsb, set_eeprom_offset_lsb: 7;
    /// Backup switchover interrupt enable
    pub backup_switch_interrupt_enable, set_backup_switch_interrupt_enable: 6;
    /// Trickle charger enable
    pub trickle_charge_enable, set_trickle_charge_enable: 5;
    /// Fast edge detection enable
    pub fast_edge_detection, set_fast_edge_detection: 4;
    /// Backup switchover mode
    pub from into BackupSwitchoverMode, backup_switchover_mode, set_backup_switchover_mode: 3, 2;
    /// Trickle charger series resistance
    pub trickle_charge_resistor, set_trickle_charge_resistor: 1, 0;
}
from_register_u8!(EepromBackup);
