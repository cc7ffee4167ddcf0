use std::{collections::HashSet, fmt};

use crate::{Key, Modifier};

/// A key chord: a set of modifiers plus a single key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chord {
    /// Set of modifier keys held down for this chord.
    pub modifiers: HashSet<Modifier>,
    /// The non-modifier key for this chord.
    pub key: Key,
}

impl From<Key> for Chord {
    fn from(key: Key) -> Self {
        Self {
            modifiers: HashSet::new(),
            key,
        }
    }
}

impl Chord {
    /// A chord of `key` held together with `modifiers`.
    pub fn new(key: Key, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            key,
        }
    }

    /// Parses a chord specification of the form "shift+opt+k".
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by "+"; the last component is always the key spec.
    /// - Modifiers may use aliases handled by `Modifier::from_spec` (e.g., cmd/ctrl/opt/alt/shift).
    pub fn parse(s: &str) -> Option<Self> {
        let mut buf: Vec<&str> = s.split('+').collect();
        // keep raw to allow literal space
        let key_raw = buf.pop()?;
        let key = if key_raw == " " {
            Key::from_spec(" ")
        } else {
            Key::from_spec(key_raw.trim())
        }?;
        let mut modifiers = HashSet::new();
        for m in buf {
            let mt = m.trim();
            if mt.is_empty() {
                return None;
            }
            modifiers.insert(Modifier::from_spec(mt)?);
        }
        Some(Self { modifiers, key })
    }

    /// The chord that types `c` on a US ANSI layout, adding Shift where needed.
    pub fn for_char(c: char) -> Option<Self> {
        if let Some(key) = Key::for_char(c) {
            return Some(key.into());
        }
        let key = match c {
            c if c.is_ascii_uppercase() => Key::for_char(c.to_ascii_lowercase())?,
            '!' => Key::Digit1,
            '@' => Key::Digit2,
            '#' => Key::Digit3,
            '$' => Key::Digit4,
            '%' => Key::Digit5,
            '^' => Key::Digit6,
            '&' => Key::Digit7,
            '*' => Key::Digit8,
            '(' => Key::Digit9,
            ')' => Key::Digit0,
            '_' => Key::Minus,
            '+' => Key::Equal,
            '{' => Key::LeftBracket,
            '}' => Key::RightBracket,
            '|' => Key::Backslash,
            ':' => Key::Semicolon,
            '"' => Key::Quote,
            '<' => Key::Comma,
            '>' => Key::Period,
            '?' => Key::Slash,
            '~' => Key::Grave,
            _ => return None,
        };
        Some(Self::new(key, [Modifier::Shift]))
    }

    /// Canonical order: Command, Option, Control, Shift, Function, CapsLock, Right*
    fn modifier_order(m: &Modifier) -> usize {
        match m {
            Modifier::Command => 0,
            Modifier::Option => 1,
            Modifier::Control => 2,
            Modifier::Shift => 3,
            Modifier::Function => 4,
            Modifier::CapsLock => 5,
            Modifier::RightCommand => 6,
            Modifier::RightControl => 7,
            Modifier::RightOption => 8,
            Modifier::RightShift => 9,
        }
    }

    /// Modifiers of this chord in canonical order.
    pub fn ordered_modifiers(&self) -> Vec<Modifier> {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(Self::modifier_order);
        mods
    }

    /// Returns the canonical string form of this chord.
    pub fn to_string_canonical(&self) -> String {
        let mut out: Vec<String> = self
            .ordered_modifiers()
            .into_iter()
            .map(Modifier::to_spec)
            .collect();
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_save_chord() {
        let c = Chord::parse("cmd+s").expect("parse");
        assert!(c.modifiers.contains(&Modifier::Command));
        assert_eq!(c.key, Key::S);
        assert_eq!(c.to_string(), "cmd+s");
    }

    #[test]
    fn parse_canonicalizes_order() {
        let c = Chord::parse("shift+opt+k").expect("parse");
        assert_eq!(c.to_string(), "opt+shift+k");
        let c = Chord::parse("CTRL+ALT+Space").expect("parse");
        assert_eq!(c.to_string(), "opt+ctrl+ ");
    }

    #[test]
    fn parse_rejects_bad_specs() {
        assert_eq!(Chord::parse("cmd+"), None);
        assert_eq!(Chord::parse("+s"), None);
        assert_eq!(Chord::parse("s+cmd"), None);
        assert_eq!(Chord::parse("hyper+s"), None);
    }

    #[test]
    fn for_char_adds_shift() {
        assert_eq!(Chord::for_char('a'), Some(Chord::from(Key::A)));
        assert_eq!(
            Chord::for_char('A'),
            Some(Chord::new(Key::A, [Modifier::Shift]))
        );
        assert_eq!(
            Chord::for_char('?'),
            Some(Chord::new(Key::Slash, [Modifier::Shift]))
        );
        assert_eq!(Chord::for_char('\u{1F600}'), None);
    }
}
