//! Person lines for commit and tag headers
//!
//! ## Format
//!
//! ```text
//! <name> <<email>> <seconds> <sign><HH><MM>
//! ```
//!
//! e.g. `Tim Caswell <tim@creationix.com> 1391790884 -0700`. The date part is
//! optional; without it the line ends right after the closing `>`.

use crate::artifacts::codec::error::{CodecError, CodecResult};
use crate::artifacts::codec::text;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use derive_new::new;

/// Point in time as stored in person lines
///
/// `offset` counts minutes *west* of UTC: a positive offset is written with
/// a `-` sign, so `420` is `-0700` and `-60` is `+0100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Timestamp {
    /// Seconds since the Unix epoch
    pub seconds: i64,
    /// Minutes west of UTC
    pub offset: i32,
}

impl Timestamp {
    /// Convert from a chrono timestamp, keeping its UTC offset
    pub fn from_datetime(datetime: &DateTime<FixedOffset>) -> Self {
        Timestamp {
            seconds: datetime.timestamp(),
            offset: -(datetime.offset().local_minus_utc() / 60),
        }
    }

    /// Convert to a chrono timestamp in its own UTC offset
    ///
    /// Returns `None` when the seconds or the offset are outside what chrono
    /// can represent.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let east = i32::try_from(-i64::from(self.offset) * 60).ok()?;
        let zone = FixedOffset::east_opt(east)?;
        DateTime::from_timestamp(self.seconds, 0).map(|utc| utc.with_timezone(&zone))
    }

    /// Format the signed `+HHMM` / `-HHMM` token
    pub fn timezone(&self) -> String {
        let sign = if self.offset > 0 { '-' } else { '+' };
        let minutes = self.offset.unsigned_abs();
        format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
    }

    /// Parse the `<seconds> <+HHMM>` pair that closes a person line
    pub fn parse(value: &str) -> Option<Self> {
        let (seconds, timezone) = value.split_once(' ')?;
        let seconds = text::parse_signed(seconds)?;
        let offset = parse_timezone(timezone)?;

        Some(Timestamp { seconds, offset })
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.seconds, self.timezone())
    }
}

fn parse_timezone(timezone: &str) -> Option<i32> {
    let bytes = timezone.as_bytes();
    if bytes.len() != 5 || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let hours = i32::try_from(text::parse_decimal(&bytes[1..3])?).ok()?;
    let minutes = i32::try_from(text::parse_decimal(&bytes[3..5])?).ok()?;
    if minutes >= 60 {
        return None;
    }
    let magnitude = hours * 60 + minutes;

    // `-0000` would come back out as `+0000`
    match bytes[0] {
        b'+' => Some(-magnitude),
        b'-' if magnitude > 0 => Some(magnitude),
        _ => None,
    }
}

/// Author, committer or tagger information
///
/// Name and email must not contain `<`, `>` or newlines; the codec does not
/// check this when encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct PersonDate {
    name: String,
    email: String,
    date: Option<Timestamp>,
}

impl PersonDate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date(&self) -> Option<&Timestamp> {
        self.date.as_ref()
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000", or `None` without a date
    pub fn readable_timestamp(&self) -> Option<String> {
        self.date
            .and_then(|date| date.to_datetime())
            .map(|datetime| datetime.format("%a %b %-d %H:%M:%S %Y %z").to_string())
    }

    /// Serialize to the header line form
    pub fn encode(&self) -> String {
        match &self.date {
            Some(date) => format!("{} {}", self.display_name(), date),
            None => self.display_name(),
        }
    }

    /// Parse the header line form
    ///
    /// Only the exact text [`encode`](Self::encode) produces is accepted:
    /// padded seconds or a missing space before `<` are errors, not
    /// rewritten.
    pub fn decode(line: &str) -> CodecResult<Self> {
        let open = line
            .find('<')
            .ok_or_else(|| CodecError::person(line, "missing '<'"))?;
        let close = line[open..]
            .find('>')
            .map(|position| open + position)
            .ok_or_else(|| CodecError::person(line, "missing '>'"))?;

        let name = &line[..open];
        let name = name.strip_suffix(' ').unwrap_or(name);
        let email = &line[open + 1..close];

        let date = match &line[close + 1..] {
            "" => None,
            rest => {
                let date = rest
                    .strip_prefix(' ')
                    .and_then(Timestamp::parse)
                    .ok_or_else(|| {
                        CodecError::person(line, "expected '<seconds> <+|-HHMM>' after email")
                    })?;
                Some(date)
            }
        };

        let person = PersonDate {
            name: name.to_string(),
            email: email.to_string(),
            date,
        };
        if person.encode() != line {
            return Err(CodecError::person(line, "not in canonical form"));
        }

        Ok(person)
    }

    /// Load person information from environment variables
    ///
    /// Reads `GIT_<ROLE>_NAME`, `GIT_<ROLE>_EMAIL` and optionally
    /// `GIT_<ROLE>_DATE`, e.g. `GIT_AUTHOR_NAME` for the `AUTHOR` role.
    /// If no date is provided, uses the current local time.
    pub fn load_from_env(role: &str) -> anyhow::Result<Self> {
        let name_var = format!("GIT_{role}_NAME");
        let email_var = format!("GIT_{role}_EMAIL");
        let date_var = format!("GIT_{role}_DATE");

        let name = std::env::var(&name_var).context(format!("{name_var} not set"))?;
        let email = std::env::var(&email_var).context(format!("{email_var} not set"))?;
        let date = match std::env::var(&date_var) {
            Ok(date) => parse_date(&date).context(format!("{date_var} is not a valid date"))?,
            Err(_) => Timestamp::from_datetime(&chrono::Local::now().fixed_offset()),
        };

        Ok(PersonDate::new(name, email, Some(date)))
    }
}

fn parse_date(date: &str) -> Option<Timestamp> {
    chrono::DateTime::parse_from_rfc2822(date)
        .or_else(|_| chrono::DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
        .map(|datetime| Timestamp::from_datetime(&datetime))
        .or_else(|| Timestamp::parse(date))
}

impl std::fmt::Display for PersonDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}
