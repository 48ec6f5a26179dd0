//! HTML pages served by the navigation service.
//!
//! Pages are rendered from `&'static str` templates bundled in the binary,
//! so no template directory needs to be present at runtime.

pub mod index;
pub mod map;

/// Escape text for use in HTML element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize a value as a JavaScript literal safe to inline in `<script>`
pub(crate) fn script_literal<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Capitalize the first letter of every word, lower-casing the rest
///
/// A word starts after any non-alphabetic character, so `"gate 1"` becomes
/// `"Gate 1"` and `"o'neil hall"` becomes `"O'Neil Hall"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
