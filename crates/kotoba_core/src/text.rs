//! crates/kotoba_core/src/text.rs
//!
//! Helpers over tokenized Japanese text and dictionary lookup matching.

use crate::domain::{DictionaryEntry, Token};

/// The text as written, e.g. `食べる`.
pub fn surface(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// The text with every annotated token replaced by its reading, e.g. `たべる`.
pub fn kana(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.reading.as_deref().unwrap_or(&t.text))
        .collect()
}

/// Bracket notation used by flashcard tools, e.g. `食[た]べる`.
///
/// Annotated tokens are separated from a preceding annotated token by a space
/// so readings attach to the right kanji run.
pub fn bracketed(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut previous_annotated = false;
    for token in tokens {
        match &token.reading {
            Some(reading) => {
                if previous_annotated {
                    out.push(' ');
                }
                out.push_str(&token.text);
                out.push('[');
                out.push_str(reading);
                out.push(']');
                previous_annotated = true;
            }
            None => {
                out.push_str(&token.text);
                previous_annotated = false;
            }
        }
    }
    out
}

impl DictionaryEntry {
    /// Case-insensitive substring match over surface form, reading and translations.
    /// A blank query matches every entry.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        surface(&self.word).to_lowercase().contains(&needle)
            || kana(&self.word).to_lowercase().contains(&needle)
            || self.reading.to_lowercase().contains(&needle)
            || self
                .translations
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JlptLevel, PartOfSpeech};

    fn tabemono() -> Vec<Token> {
        vec![
            Token {
                text: "食".into(),
                reading: Some("た".into()),
            },
            Token {
                text: "べ".into(),
                reading: None,
            },
            Token {
                text: "物".into(),
                reading: Some("もの".into()),
            },
        ]
    }

    fn entry() -> DictionaryEntry {
        DictionaryEntry {
            word: tabemono(),
            reading: "たべもの".into(),
            translations: vec!["Food".into(), "Provisions".into()],
            part_of_speech: PartOfSpeech::Noun,
            jlpt_level: JlptLevel::N5,
            examples: vec![],
            audio_url: "/audio/tabemono.mp3".into(),
        }
    }

    #[test]
    fn surface_and_kana_renderings() {
        assert_eq!(surface(&tabemono()), "食べ物");
        assert_eq!(kana(&tabemono()), "たべもの");
    }

    #[test]
    fn bracketed_keeps_plain_tokens_bare() {
        assert_eq!(bracketed(&tabemono()), "食[た]べ物[もの]");
    }

    #[test]
    fn bracketed_separates_adjacent_annotations() {
        let tokens = vec![
            Token {
                text: "日本".into(),
                reading: Some("にほん".into()),
            },
            Token {
                text: "語".into(),
                reading: Some("ご".into()),
            },
        ];
        assert_eq!(bracketed(&tokens), "日本[にほん] 語[ご]");
    }

    #[test]
    fn matches_on_every_searchable_field() {
        let entry = entry();
        assert!(entry.matches("食べ"));
        assert!(entry.matches("たべ"));
        assert!(entry.matches("food"));
        assert!(entry.matches("  PROVISION "));
        assert!(!entry.matches("drink"));
    }

    #[test]
    fn latin_surface_matches_ignoring_case() {
        let mut entry = entry();
        entry.word = vec![
            Token {
                text: "Tシャツ".into(),
                reading: None,
            },
        ];
        entry.reading = "ティーシャツ".into();
        assert!(entry.matches("tシャツ"));
        assert!(entry.matches("Tシャツ"));

        entry.word[0].text = "ＣＤ".into();
        assert!(entry.matches("ｃｄ"));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(entry().matches(""));
        assert!(entry().matches("   "));
    }
}
