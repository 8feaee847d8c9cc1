//! Header block shared by commits and tags
//!
//! ```text
//! <key> <value>\n
//! <key> <value>\n
//!  <continuation of the previous value>\n
//! \n
//! <message>
//! ```
//!
//! A value containing newlines is written with a single space after each
//! embedded newline and joined back when read.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum HeaderError {
    #[error("missing blank line between headers and message")]
    MissingBlankLine,
    #[error("header line {0:?} has no value")]
    MissingValue(String),
    #[error("continuation line before any header")]
    OrphanContinuation,
}

/// Append `<key> <value>\n`, folding embedded newlines into continuation lines
pub(crate) fn write_header(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(' ');
    out.push_str(&value.replace('\n', "\n "));
    out.push('\n');
}

/// Split a body into its headers, in order, and the message after the blank line
pub(crate) fn split_headers(body: &str) -> Result<(Vec<(String, String)>, &str), HeaderError> {
    let mut headers: Vec<(String, String)> = Vec::new();
    let mut rest = body;

    loop {
        let (line, after) = rest
            .split_once('\n')
            .ok_or(HeaderError::MissingBlankLine)?;
        rest = after;

        if line.is_empty() {
            return Ok((headers, rest));
        }

        if let Some(continuation) = line.strip_prefix(' ') {
            let (_, value) = headers
                .last_mut()
                .ok_or(HeaderError::OrphanContinuation)?;
            value.push('\n');
            value.push_str(continuation);
            continue;
        }

        let (key, value) = line
            .split_once(' ')
            .ok_or_else(|| HeaderError::MissingValue(line.to_string()))?;
        headers.push((key.to_string(), value.to_string()));
    }
}
