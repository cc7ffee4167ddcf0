//! Short spellings for keys in chord specs like `cmd+s`.

use crate::Key;

/// Keys written as the character they type without Shift.
const SYMBOLS: &[(Key, &str)] = &[
    (Key::Digit0, "0"),
    (Key::Digit1, "1"),
    (Key::Digit2, "2"),
    (Key::Digit3, "3"),
    (Key::Digit4, "4"),
    (Key::Digit5, "5"),
    (Key::Digit6, "6"),
    (Key::Digit7, "7"),
    (Key::Digit8, "8"),
    (Key::Digit9, "9"),
    (Key::Space, " "),
    (Key::Minus, "-"),
    (Key::Equal, "="),
    (Key::LeftBracket, "["),
    (Key::RightBracket, "]"),
    (Key::Backslash, "\\"),
    (Key::Semicolon, ";"),
    (Key::Quote, "'"),
    (Key::Comma, ","),
    (Key::Period, "."),
    (Key::Slash, "/"),
    (Key::Grave, "`"),
];

/// Words accepted when parsing (any case) but never emitted.
const ALIASES: &[(&str, Key)] = &[
    ("cmd", Key::Command),
    ("ctrl", Key::Control),
    ("opt", Key::Option),
    ("alt", Key::Option),
    ("caps", Key::CapsLock),
    ("fn", Key::Function),
    ("enter", Key::Return),
    ("esc", Key::Escape),
    ("backspace", Key::Delete),
    ("space", Key::Space),
];

impl Key {
    /// Parses one key of a chord spec.
    ///
    /// Tries the variant name (any case), then the exact symbol for digits,
    /// punctuation and space, then alias words such as `cmd` and `backspace`.
    pub fn from_spec(s: &str) -> Option<Self> {
        Self::from_name(s)
            .or_else(|| SYMBOLS.iter().find(|(_, sym)| *sym == s).map(|(k, _)| *k))
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
                    .map(|(_, k)| *k)
            })
    }

    /// The spelling used when displaying a chord: the symbol where the key
    /// has one, otherwise the lowercased variant name.
    pub fn to_spec(self) -> String {
        SYMBOLS
            .iter()
            .find(|(k, _)| *k == self)
            .map_or_else(|| self.name().to_ascii_lowercase(), |(_, s)| (*s).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_and_display() {
        for &(k, sym) in SYMBOLS {
            assert_eq!(Key::from_spec(sym), Some(k), "{sym:?}");
            assert_eq!(k.to_spec(), sym);
        }
    }

    #[test]
    fn names_are_case_insensitive_and_lowercased() {
        assert_eq!(Key::from_spec("S"), Some(Key::S));
        assert_eq!(Key::from_spec("delete"), Some(Key::Delete));
        assert_eq!(Key::from_spec("Digit7"), Some(Key::Digit7));
        assert_eq!(Key::Delete.to_spec(), "delete");
        assert_eq!(Key::Command.to_spec(), "command");
    }

    #[test]
    fn aliases_parse_but_are_not_emitted() {
        assert_eq!(Key::from_spec("CMD"), Some(Key::Command));
        assert_eq!(Key::from_spec("alt"), Some(Key::Option));
        assert_eq!(Key::from_spec("backspace"), Some(Key::Delete));
        assert_eq!(Key::from_spec("space"), Some(Key::Space));
        assert_eq!(Key::Space.to_spec(), " ");
        assert_eq!(Key::from_spec("hyper"), None);
    }
}
