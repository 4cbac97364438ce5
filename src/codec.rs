//! BCD and hour encoding for the RV-3028 time registers.
//!
//! Every function here is pure. Range checking is the caller's job: the
//! session validates each value before it reaches an encoder, and decoders
//! report whatever the device holds.

use chrono::Weekday;

use crate::{ClockMode, Hours, Meridiem};

/// Decodes a packed BCD byte.
///
/// Nibbles above 9 are not rejected; a malformed register decodes to a
/// malformed number.
pub const fn decode_bcd(byte: u8) -> u8 {
    ((byte & 0xF0) >> 4) * 10 + (byte & 0x0F)
}

/// Encodes a value in 0-99 as packed BCD.
pub const fn encode_bcd(value: u8) -> u8 {
    debug_assert!(value <= 99);
    ((value / 10) << 4) | (value % 10)
}

/// Decodes the hours register for the given clock mode.
///
/// In 12-hour mode only bit 4 contributes to the tens digit; bit 5 is the
/// meridiem flag.
pub fn decode_hours(byte: u8, clock_mode: ClockMode) -> (u8, Option<Meridiem>) {
    match clock_mode {
        ClockMode::Hour24 => (decode_bcd(byte), None),
        ClockMode::Hour12 => {
            let raw = Hours::from(byte);
            (10 * raw.ten_hours_12() + raw.hours(), Some(raw.meridiem()))
        }
    }
}

/// Encodes an hour for the given clock mode.
///
/// The meridiem is ignored in 24-hour mode. In 12-hour mode a missing
/// meridiem leaves the flag clear (PM).
pub fn encode_hours(hours: u8, clock_mode: ClockMode, meridiem: Option<Meridiem>) -> u8 {
    match clock_mode {
        ClockMode::Hour24 => encode_bcd(hours),
        ClockMode::Hour12 => {
            let mut raw = Hours::from(encode_bcd(hours));
            raw.set_meridiem(meridiem.unwrap_or(Meridiem::Pm));
            raw.into()
        }
    }
}

/// Raw weekday index, Monday = 0.
pub fn encode_weekday(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// Weekday for a raw index, `None` for anything above 6.
pub const fn decode_weekday(raw: u8) -> Option<Weekday> {
    match raw {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Encodes a year in 2000-2099 as the BCD year offset.
pub const fn encode_year(year: u16) -> u8 {
    debug_assert!(year >= 2000 && year <= 2099);
    encode_bcd((year - 2000) as u8)
}

/// Decodes the year register, adding the 2000 offset.
pub const fn decode_year(byte: u8) -> u16 {
    2000 + decode_bcd(byte) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcd_roundtrip() {
        for v in 0..=99u8 {
            assert_eq!(decode_bcd(encode_bcd(v)), v, "value {}", v);
        }
    }

    #[test]
    fn test_bcd_nibbles() {
        assert_eq!(encode_bcd(0), 0x00);
        assert_eq!(encode_bcd(9), 0x09);
        assert_eq!(encode_bcd(10), 0x10);
        assert_eq!(encode_bcd(59), 0x59);
        assert_eq!(encode_bcd(99), 0x99);
        for v in 0..=99u8 {
            let byte = encode_bcd(v);
            assert!(byte >> 4 <= 9 && byte & 0x0F <= 9, "value {}", v);
        }
    }

    #[test]
    fn test_decode_malformed_bcd() {
        // The codec reports what the device holds
        assert_eq!(decode_bcd(0x6A), 70);
        assert_eq!(decode_bcd(0xFF), 165);
    }

    #[test]
    fn test_hours_roundtrip_24() {
        for h in 0..=23u8 {
            let byte = encode_hours(h, ClockMode::Hour24, None);
            assert_eq!(decode_hours(byte, ClockMode::Hour24), (h, None));
        }
    }

    #[test]
    fn test_hours_roundtrip_12() {
        for h in 1..=12u8 {
            for meridiem in [Meridiem::Am, Meridiem::Pm] {
                let byte = encode_hours(h, ClockMode::Hour12, Some(meridiem));
                assert_eq!(decode_hours(byte, ClockMode::Hour12), (h, Some(meridiem)));
            }
        }
    }

    #[test]
    fn test_hours_meridiem_bit() {
        assert_eq!(encode_hours(11, ClockMode::Hour12, Some(Meridiem::Am)), 0x31);
        assert_eq!(encode_hours(11, ClockMode::Hour12, Some(Meridiem::Pm)), 0x11);
        assert_eq!(encode_hours(7, ClockMode::Hour12, None), 0x07);
        // Meridiem does not leak into 24-hour encoding
        assert_eq!(encode_hours(9, ClockMode::Hour24, Some(Meridiem::Am)), 0x09);
        assert_eq!(encode_hours(21, ClockMode::Hour24, None), 0x21);
    }

    #[test]
    fn test_decode_hours_ignores_upper_bits_in_12_hour_mode() {
        // Bits 7:6 are not part of the tens digit
        assert_eq!(
            decode_hours(0xD2, ClockMode::Hour12),
            (12, Some(Meridiem::Pm))
        );
    }

    #[test]
    fn test_weekday_codec() {
        assert_eq!(encode_weekday(Weekday::Mon), 0);
        assert_eq!(encode_weekday(Weekday::Sun), 6);
        for raw in 0..=6u8 {
            let weekday = decode_weekday(raw).unwrap();
            assert_eq!(encode_weekday(weekday), raw);
        }
        assert_eq!(decode_weekday(7), None);
    }

    #[test]
    fn test_year_codec() {
        assert_eq!(encode_year(2000), 0x00);
        assert_eq!(encode_year(2024), 0x24);
        assert_eq!(encode_year(2099), 0x99);
        assert_eq!(decode_year(0x24), 2024);
        assert_eq!(decode_year(0x99), 2099);
    }
}
