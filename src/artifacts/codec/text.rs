//! Binary-safe scanning and checked number/text parsing
//!
//! Every helper works on borrowed byte slices and never allocates unless it
//! has to hand back owned text. Nothing here coerces: a single stray byte
//! makes the parse fail.

/// Split `bytes` around the first occurrence of `separator`.
///
/// The separator itself belongs to neither half.
pub fn split_once(bytes: &[u8], separator: u8) -> Option<(&[u8], &[u8])> {
    let position = bytes.iter().position(|&b| b == separator)?;
    Some((&bytes[..position], &bytes[position + 1..]))
}

/// Decode `bytes` as UTF-8 without replacing invalid sequences.
pub fn utf8(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok()
}

/// Parse an unsigned decimal made only of ASCII digits.
///
/// Unlike `str::parse`, a leading `+` is rejected.
pub fn parse_decimal(bytes: &[u8]) -> Option<usize> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    bytes.iter().try_fold(0usize, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(usize::from(digit - b'0'))
    })
}

/// Parse an unsigned octal made only of the digits `0` to `7`.
pub fn parse_octal(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }

    bytes.iter().try_fold(0u32, |acc, &digit| {
        if !(b'0'..=b'7').contains(&digit) {
            return None;
        }
        acc.checked_mul(8)?.checked_add(u32::from(digit - b'0'))
    })
}

/// Parse a signed decimal: an optional `-` followed by ASCII digits.
pub fn parse_signed(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse::<i64>().ok()
}
