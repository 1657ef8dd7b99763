//! Pure form validation and input shaping.
//!
//! DESIGN
//! ======
//! Everything here runs before a network request exists, so invalid
//! input never leaves the browser. Functions take raw input strings and
//! return either the shaped value or a message suitable for inline
//! display. Character limits count chars, not bytes.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Hard cap on event descriptions, enforced while typing.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

#[must_use]
pub fn description_fits(text: &str) -> bool {
    text.chars().count() <= DESCRIPTION_MAX_CHARS
}

/// Apply a description keystroke: an edit that would exceed the limit is
/// rejected and the last accepted value kept. Returns the value to store
/// and whether the edit was accepted.
#[must_use]
pub fn apply_description_edit(current: &str, proposed: &str) -> (String, bool) {
    if description_fits(proposed) {
        (proposed.to_owned(), true)
    } else {
        (current.to_owned(), false)
    }
}

/// Remaining characters for the live counter under the description box.
#[must_use]
pub fn description_remaining(text: &str) -> usize {
    DESCRIPTION_MAX_CHARS.saturating_sub(text.chars().count())
}

#[must_use]
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !password.is_empty() && password == confirm
}

/// Combine separate date and time inputs into the backend's timestamp
/// shape, `YYYY-MM-DDTHH:MM:SS`. Both parts are required.
#[must_use]
pub fn combine_start_time(date: &str, time: &str) -> Option<String> {
    if date.trim().is_empty() || time.trim().is_empty() {
        return None;
    }
    Some(format!("{}T{}:00", date.trim(), time.trim()))
}

/// Parse the capacity input: blank means unlimited, anything else must
/// be a positive integer.
pub fn parse_capacity(input: &str) -> Result<Option<i64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err("capacity must be a positive number".to_owned()),
    }
}
