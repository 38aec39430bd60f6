use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static NAMED_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(nbsp|amp|quot|lt|gt);").expect("valid named entity pattern"));

static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#([0-9]+);").expect("valid numeric entity pattern"));

/// Decode the five common named entities, then decimal `&#NNN;` references.
///
/// The two passes run in sequence, so `&amp;#65;` decodes to `A`.
/// Numeric references map to a single UTF-16 code unit (the value modulo
/// 65536); lone surrogates become U+FFFD.
pub fn decode_entities(encoded: &str) -> String {
    let named = NAMED_ENTITY.replace_all(encoded, |caps: &Captures| match &caps[1] {
        "nbsp" => " ",
        "amp" => "&",
        "quot" => "\"",
        "lt" => "<",
        _ => ">",
    });

    NUMERIC_ENTITY
        .replace_all(&named, |caps: &Captures| {
            code_unit_to_char(&caps[1]).to_string()
        })
        .into_owned()
}

fn code_unit_to_char(digits: &str) -> char {
    let unit = digits
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 0x1_0000);
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}
