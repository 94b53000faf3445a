use crate::datetime::TimeUnit;

/// What an integer unit suffix resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixInfo {
    /// Multiply the value by this factor; a non-positive factor marks a
    /// declared but unrepresentable unit (`zb`, `yb`, `zib`, `yib`).
    ByteCount(i64),
    TimeUnit(TimeUnit),
}

/// The closed set of unit suffixes accepted after a decimal integer.
pub const INTEGER_SUFFIXES: &[(&str, SuffixInfo)] = &[
    // SI byte counts.
    ("kb", SuffixInfo::ByteCount(1_000)),
    ("mb", SuffixInfo::ByteCount(1_000_000)),
    ("gb", SuffixInfo::ByteCount(1_000_000_000)),
    ("tb", SuffixInfo::ByteCount(1_000_000_000_000)),
    ("pb", SuffixInfo::ByteCount(1_000_000_000_000_000)),
    ("eb", SuffixInfo::ByteCount(1_000_000_000_000_000_000)),
    ("zb", SuffixInfo::ByteCount(-1)),
    ("yb", SuffixInfo::ByteCount(-1)),
    // IEC byte counts.
    ("kib", SuffixInfo::ByteCount(1_024)),
    ("mib", SuffixInfo::ByteCount(1_048_576)),
    ("gib", SuffixInfo::ByteCount(1_073_741_824)),
    ("tib", SuffixInfo::ByteCount(1_099_511_627_776)),
    ("pib", SuffixInfo::ByteCount(1_125_899_906_842_624)),
    ("eib", SuffixInfo::ByteCount(1_152_921_504_606_846_976)),
    ("zib", SuffixInfo::ByteCount(-1)),
    ("yib", SuffixInfo::ByteCount(-1)),
    // Time units.
    ("ns", SuffixInfo::TimeUnit(TimeUnit::Nanoseconds)),
    ("nanosecond", SuffixInfo::TimeUnit(TimeUnit::Nanoseconds)),
    ("nanoseconds", SuffixInfo::TimeUnit(TimeUnit::Nanoseconds)),
    ("us", SuffixInfo::TimeUnit(TimeUnit::Microseconds)),
    ("\u{00B5}s", SuffixInfo::TimeUnit(TimeUnit::Microseconds)),
    ("microsecond", SuffixInfo::TimeUnit(TimeUnit::Microseconds)),
    ("microseconds", SuffixInfo::TimeUnit(TimeUnit::Microseconds)),
    ("ms", SuffixInfo::TimeUnit(TimeUnit::Milliseconds)),
    ("millisecond", SuffixInfo::TimeUnit(TimeUnit::Milliseconds)),
    ("milliseconds", SuffixInfo::TimeUnit(TimeUnit::Milliseconds)),
    ("s", SuffixInfo::TimeUnit(TimeUnit::Seconds)),
    ("second", SuffixInfo::TimeUnit(TimeUnit::Seconds)),
    ("seconds", SuffixInfo::TimeUnit(TimeUnit::Seconds)),
    ("m", SuffixInfo::TimeUnit(TimeUnit::Minutes)),
    ("minute", SuffixInfo::TimeUnit(TimeUnit::Minutes)),
    ("minutes", SuffixInfo::TimeUnit(TimeUnit::Minutes)),
    ("h", SuffixInfo::TimeUnit(TimeUnit::Hours)),
    ("hour", SuffixInfo::TimeUnit(TimeUnit::Hours)),
    ("hours", SuffixInfo::TimeUnit(TimeUnit::Hours)),
    ("d", SuffixInfo::TimeUnit(TimeUnit::Days)),
    ("day", SuffixInfo::TimeUnit(TimeUnit::Days)),
    ("days", SuffixInfo::TimeUnit(TimeUnit::Days)),
    ("w", SuffixInfo::TimeUnit(TimeUnit::Weeks)),
    ("week", SuffixInfo::TimeUnit(TimeUnit::Weeks)),
    ("weeks", SuffixInfo::TimeUnit(TimeUnit::Weeks)),
    ("month", SuffixInfo::TimeUnit(TimeUnit::Months)),
    ("months", SuffixInfo::TimeUnit(TimeUnit::Months)),
    ("year", SuffixInfo::TimeUnit(TimeUnit::Years)),
    ("years", SuffixInfo::TimeUnit(TimeUnit::Years)),
];

pub fn integer_suffix(identifier: &str) -> Option<SuffixInfo> {
    INTEGER_SUFFIXES
        .iter()
        .find(|(suffix, _)| *suffix == identifier)
        .map(|(_, info)| *info)
}

/// Case-folded keywords that resolve to boolean tokens.
pub const BOOLEAN_LITERALS: &[(&str, bool)] = &[
    ("true", true),
    ("yes", true),
    ("enabled", true),
    ("on", true),
    ("false", false),
    ("no", false),
    ("disabled", false),
    ("off", false),
];

pub fn boolean_literal(identifier: &str) -> Option<bool> {
    BOOLEAN_LITERALS
        .iter()
        .find(|(keyword, _)| *keyword == identifier)
        .map(|(_, value)| *value)
}
