use std::sync::LazyLock;

use regex::Regex;

/// An uppercase letter followed by lowercase ones, preceded by any character.
#[allow(clippy::expect_used)]
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("pattern is valid"));

/// A lowercase letter or digit directly followed by an uppercase letter.
#[allow(clippy::expect_used)]
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("pattern is valid"));

/// Converts `CamelCase` or `camelCase` to `snake_case`.
///
/// Runs of capitals are kept together as one word: `"getHTTPResponse"`
/// becomes `"get_http_response"`.
#[must_use]
pub fn camel_to_snake(name: &str) -> String {
    let split = CAPITALIZED_WORD.replace_all(name, "${1}_${2}");
    LOWER_UPPER.replace_all(&split, "${1}_${2}").to_lowercase()
}

/// Converts `snake_case` to `CamelCase`.
///
/// Each underscore-separated word is title-cased: a letter that follows a
/// non-letter is uppercased, every other letter is lowercased.
#[must_use]
pub fn snake_to_camel(name: &str) -> String {
    name.split('_').map(title_case).collect()
}

fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}
