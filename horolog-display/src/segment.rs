//! Fixed-width formatting for the quad-digit display
//!
//! Every formatter here targets a four-character field. Time and date
//! formatting is total; temperature formatting reproduces the device's
//! historical width rules and may come out short, in which case the
//! caller substitutes [`FALLBACK`] (the display validates, it never
//! panics).

use core::fmt::Write;

use heapless::String;
use horolog_core::StatusMessage;

/// Substituted whenever a formatted string is not exactly four characters
pub const FALLBACK: &str = "Err1";

/// PM indicator bit on the rightmost digit's decimal point
pub const PM_DOT: u8 = 0x08;

/// Formatted time plus its PM flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeField {
    pub text: String<4>,
    pub pm: bool,
}

/// Format hour/minute as a four-character 12-hour field.
///
/// Hour is space-padded under 10, minute always two digits. Hour 0
/// renders as 12 without the PM flag; the flag is computed on the
/// 24-hour value before conversion.
pub fn format_time(hour: u8, minute: u8) -> TimeField {
    let pm = hour >= 12;
    let h = match hour {
        0 => 12,
        13..=23 => hour - 12,
        _ => hour,
    };

    let mut text = String::new();
    if h < 10 {
        let _ = text.push(' ');
    }
    let _ = write!(text, "{}{:02}", h, minute);
    TimeField { text, pm }
}

/// Format month/day as a four-character field.
///
/// Month is space-padded under 10; the day keeps a fixed two-character
/// field with the pad after the month.
pub fn format_date(month: u8, day: u8) -> String<4> {
    let mut text = String::new();
    if month < 10 {
        let _ = text.push(' ');
    }
    let _ = write!(text, "{}", month);
    if day < 10 {
        let _ = text.push(' ');
    }
    let _ = write!(text, "{}", day);
    text
}

/// Temperature category shown as the leading character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempKind {
    /// Current reading ('C')
    Current,
    /// Forecast low ('L')
    Low,
    /// Forecast high ('h' - the display has no uppercase H)
    High,
}

impl TempKind {
    fn prefix(self) -> char {
        match self {
            TempKind::Current => 'C',
            TempKind::Low => 'L',
            TempKind::High => 'h',
        }
    }
}

/// Format a temperature as category prefix plus value.
///
/// Two-digit values get a pad space after the prefix so the field stays
/// four characters wide. Values outside 10..=99 (and negatives past one
/// digit) fall out of that width; the quad variant catches the length
/// and shows [`FALLBACK`] instead.
pub fn format_temp(kind: TempKind, degrees: i16) -> String<8> {
    let mut text = String::new();
    let _ = text.push(kind.prefix());
    if degrees > 0 && degrees < 100 {
        let _ = text.push(' ');
    }
    let _ = write!(text, "{}", degrees);
    text
}

/// Fixed four-letter code for a status message.
///
/// Restricted to the seven-segment alphabet (no k, m, q, v, w, x, y,
/// z). Unrecognized codes map to `"Err "`.
pub fn status_code(msg: StatusMessage) -> &'static str {
    match msg {
        StatusMessage::NetConfig => "CNFG",
        StatusMessage::Startup => "HC-1",
        StatusMessage::Connecting => "Conn",
        StatusMessage::NetFail => "NtFL",
        StatusMessage::UpdateFail => "UPFL",
        StatusMessage::AskRestart => "Str?",
        StatusMessage::AskResetNetwork => "rSt?",
        StatusMessage::VerifyResetNetwork => "Sur?",
        _ => "Err ",
    }
}
