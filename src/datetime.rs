use std::fmt;

use serde::Serialize;

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if Self::is_valid(year, month, day) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    pub fn is_valid(year: i32, month: u8, day: u8) -> bool {
        if !(1..=12).contains(&month) || day < 1 {
            return false;
        }
        day <= days_in_month(year, month)
    }

    pub fn to_text(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A UTC offset for a time value. Absence of an offset means local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOffset {
    pub negative: bool,
    pub hour: u8,
    pub minute: u8,
}

impl TimeOffset {
    pub fn utc() -> Self {
        Self {
            negative: false,
            hour: 0,
            minute: 0,
        }
    }

    pub fn is_utc(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    pub fn to_text(&self) -> String {
        if self.is_utc() {
            return "z".to_string();
        }
        let sign = if self.negative { '-' } else { '+' };
        format!("{}{:02}:{:02}", sign, self.hour, self.minute)
    }
}

/// A time of day with nanosecond fraction and optional offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
    pub offset: Option<TimeOffset>,
}

impl Time {
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32, offset: Option<TimeOffset>) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return None;
        }
        if let Some(offset) = offset {
            if offset.hour > 23 || offset.minute > 59 {
                return None;
            }
        }
        Some(Self {
            hour,
            minute,
            second,
            nanosecond,
            offset,
        })
    }

    pub fn to_text(&self) -> String {
        let mut text = format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        if self.nanosecond != 0 {
            let fraction = format!("{:09}", self.nanosecond);
            text.push('.');
            text.push_str(fraction.trim_end_matches('0'));
        }
        if let Some(offset) = &self.offset {
            text.push_str(&offset.to_text());
        }
        text
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// A combined date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    pub fn to_text(&self) -> String {
        format!("{} {}", self.date.to_text(), self.time.to_text())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// The unit of a time-delta value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Weeks => "w",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

/// A count of time units, e.g. `500 ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeDelta {
    pub unit: TimeUnit,
    pub count: i64,
}

impl TimeDelta {
    pub fn new(unit: TimeUnit, count: i64) -> Self {
        Self { unit, count }
    }

    pub fn to_text(&self) -> String {
        format!("{} {}", self.count, self.unit.suffix())
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
