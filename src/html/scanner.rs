use once_cell::sync::Lazy;
use regex::Regex;

use super::{decode_entities, PropertyMap};

static TRAILING_BLANKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)[ \t]+($|[\u{2028}\u{2029}])").expect("valid trailing blank pattern")
});

/// Strip quoting and layout noise from a raw attribute value.
///
/// Removes every `"` and `'`, every ` /`, every newline, and spaces or tabs
/// at the end of each remaining line. Lines end at `\r`, U+2028 and U+2029
/// as well as the end of the text.
pub fn clean_content(content: &str) -> String {
    let stripped = content
        .replace('"', "")
        .replace('\'', "")
        .replace(" /", "")
        .replace('\n', "");

    TRAILING_BLANKS.replace_all(&stripped, "$1").into_owned()
}

/// Scan `page_head` for `<{tag_name} ...>` tags and collect the value of
/// `attribute` for each requested property.
///
/// This is a textual scan. The head is cut on every `<{tag_name}` and a
/// chunk counts as a match for `property` when it contains `property`
/// immediately followed by a closing quote, wherever that happens to be in
/// the chunk. The value is whatever sits between the first `{attribute}="`
/// and the next `>`. Later chunks overwrite earlier ones, and properties
/// with no matching chunk are absent from the result.
pub fn find_html_value<S: AsRef<str>>(
    page_head: &str,
    tag_name: &str,
    attribute: &str,
    properties: &[S],
) -> PropertyMap {
    let tag_open = format!("<{tag_name}");
    let attribute_open = format!("{attribute}=\"");
    let mut results = PropertyMap::new();

    for chunk in page_head.split(&tag_open) {
        for property in properties {
            let property = property.as_ref();
            if !chunk.contains(&format!("{property}\"")) {
                continue;
            }

            // Only the segment between the first and second attribute
            // occurrence carries the value.
            let Some(value_segment) = chunk.split(&attribute_open).nth(1) else {
                continue;
            };

            let raw = value_segment.split('>').next().unwrap_or_default();
            let raw = raw.strip_suffix('/').unwrap_or(raw);

            results.insert(property.to_owned(), decode_entities(&clean_content(raw)));
        }
    }

    results
}
