//! Normalization and validation of airport names.

const FULL_WIDTH_START: u32 = 0xFF01;
const FULL_WIDTH_END: u32 = 0xFF5E;
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

pub const MIN_NAME_LENGTH: usize = 3;

/// Folds full-width ASCII variants (`Ａ`, `１`, `（`, ...) and the ideographic
/// space into their ASCII counterparts.
pub fn full_width_to_half_width(name: &str) -> String {
    name.chars()
        .map(|c| match c as u32 {
            code @ FULL_WIDTH_START..=FULL_WIDTH_END => {
                char::from_u32(code - FULL_WIDTH_OFFSET).unwrap_or(c)
            }
            _ if c == IDEOGRAPHIC_SPACE => ' ',
            _ => c,
        })
        .collect()
}

/// `true` for names tagged as spam, either by a `(spam)` marker or by `spam`
/// as a word of its own.
pub fn contains_spam(name: &str) -> bool {
    let lowercase = name.to_lowercase();
    lowercase.contains("(spam)") || lowercase.split_whitespace().any(|word| word == "spam")
}

pub fn clean_airport_name(name: &str) -> String {
    full_width_to_half_width(name)
}

pub fn is_valid_airport_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LENGTH && !contains_spam(name)
}

/// Cleans a name and validates the result. `Err` carries the reason the name
/// was rejected.
pub fn clean_and_validate(name: &str) -> Result<String, String> {
    let cleaned = clean_airport_name(name);
    if cleaned.chars().count() < MIN_NAME_LENGTH {
        return Err(format!("name too short: {:?}", name));
    }
    if contains_spam(&cleaned) {
        return Err(format!("name marked as spam: {:?}", name));
    }
    Ok(cleaned)
}
