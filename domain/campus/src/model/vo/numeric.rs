/// Integer coercion used by every numeric form field.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the longest
/// run of ASCII digits is read. Anything unreadable, or out of range, becomes `0`.
pub fn coerce_int(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    match rest[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}
