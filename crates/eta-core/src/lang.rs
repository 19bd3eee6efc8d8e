//! Display language and bilingual labels.
//!
//! The upstream route metadata carries every name in both Traditional Chinese
//! and English; views pick one side at render time via [`LangText::get`].

use serde::{Deserialize, Serialize};

/// Display language selected by the user.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

/// A label carried in both supported languages.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LangText {
    pub zh: String,
    pub en: String,
}

impl LangText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self { zh: zh.into(), en: en.into() }
    }

    /// The label in `lang`, falling back to the other language when the
    /// requested side is empty (feeds occasionally ship one side only).
    pub fn get(&self, lang: Lang) -> &str {
        let (wanted, fallback) = match lang {
            Lang::Zh => (&self.zh, &self.en),
            Lang::En => (&self.en, &self.zh),
        };
        if wanted.is_empty() { fallback } else { wanted }
    }
}

/// Proper-case a Latin-script place name: first letter of each word upper,
/// rest lower.  Non-ASCII text (Chinese names) passes through unchanged.
pub fn to_proper_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            if at_word_start {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
            at_word_start = false;
        } else {
            at_word_start = c.is_whitespace() || c == '(' || c == '-' || c == '/';
            out.push(c);
        }
    }
    out
}
