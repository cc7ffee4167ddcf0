// Keycode table taken from HIToolbox/Events.h (kVK_* constants).
macro_rules! keys {
    ( $( $name:ident = $code:literal, )* ) => {
        /// A macOS virtual keycode.
        #[repr(u16)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Key {
            $(
                #[allow(missing_docs)]
                $name = $code,
            )*
        }

        impl Key {
            /// Returns the canonical name for this key (the enum variant string).
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )*
                }
            }

            /// Looks up a `Key` from a hardware virtual keycode.
            pub fn from_keycode(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$name), )*
                    _ => None,
                }
            }

            /// Case-insensitive lookup of a `Key` from its name.
            ///
            /// Accepts strings like "Tab", "tab", or "TAB".
            pub fn from_name(name: &str) -> Option<Self> {
                [$( Self::$name, )*]
                    .into_iter()
                    .find(|k| k.name().eq_ignore_ascii_case(name))
            }
        }
    };
}

keys! {
    A = 0x00,
    S = 0x01,
    D = 0x02,
    F = 0x03,
    H = 0x04,
    G = 0x05,
    Z = 0x06,
    X = 0x07,
    C = 0x08,
    V = 0x09,
    B = 0x0B,
    Q = 0x0C,
    W = 0x0D,
    E = 0x0E,
    R = 0x0F,
    Y = 0x10,
    T = 0x11,
    Digit1 = 0x12,
    Digit2 = 0x13,
    Digit3 = 0x14,
    Digit4 = 0x15,
    Digit6 = 0x16,
    Digit5 = 0x17,
    Equal = 0x18,
    Digit9 = 0x19,
    Digit7 = 0x1A,
    Minus = 0x1B,
    Digit8 = 0x1C,
    Digit0 = 0x1D,
    RightBracket = 0x1E,
    O = 0x1F,
    U = 0x20,
    LeftBracket = 0x21,
    I = 0x22,
    P = 0x23,
    Return = 0x24,
    L = 0x25,
    J = 0x26,
    Quote = 0x27,
    K = 0x28,
    Semicolon = 0x29,
    Backslash = 0x2A,
    Comma = 0x2B,
    Slash = 0x2C,
    N = 0x2D,
    M = 0x2E,
    Period = 0x2F,
    Tab = 0x30,
    Space = 0x31,
    Grave = 0x32,
    Delete = 0x33,
    Escape = 0x35,
    RightCommand = 0x36,
    Command = 0x37,
    Shift = 0x38,
    CapsLock = 0x39,
    Option = 0x3A,
    Control = 0x3B,
    RightShift = 0x3C,
    RightOption = 0x3D,
    RightControl = 0x3E,
    Function = 0x3F,
    ForwardDelete = 0x75,
    LeftArrow = 0x7B,
    RightArrow = 0x7C,
    DownArrow = 0x7D,
    UpArrow = 0x7E,
}

impl Key {
    /// Returns the key that types `c` on a US ANSI layout without Shift.
    ///
    /// Lowercase letters, digits, unshifted punctuation, space, tab and
    /// newline map here. Characters that need Shift return `None`; use
    /// [`crate::Chord::for_char`] for those.
    pub fn for_char(c: char) -> Option<Self> {
        match c {
            '\n' => Some(Self::Return),
            '\t' => Some(Self::Tab),
            c if c.is_ascii_lowercase() => Self::from_name(c.encode_utf8(&mut [0; 4])),
            c if c.is_ascii_uppercase() => None,
            c => Self::from_spec(c.encode_utf8(&mut [0; 4])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycode_roundtrip() {
        for k in [Key::A, Key::Digit5, Key::Delete, Key::Command, Key::UpArrow] {
            assert_eq!(Key::from_keycode(k as u16), Some(k));
        }
        assert_eq!(Key::from_keycode(0x0A), None);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(Key::from_name("tab"), Some(Key::Tab));
        assert_eq!(Key::from_name("TAB"), Some(Key::Tab));
        assert_eq!(Key::from_name("nope"), None);
    }

    #[test]
    fn for_char_unshifted() {
        assert_eq!(Key::for_char('s'), Some(Key::S));
        assert_eq!(Key::for_char('7'), Some(Key::Digit7));
        assert_eq!(Key::for_char(' '), Some(Key::Space));
        assert_eq!(Key::for_char('/'), Some(Key::Slash));
        assert_eq!(Key::for_char('\n'), Some(Key::Return));
        assert_eq!(Key::for_char('S'), None);
        assert_eq!(Key::for_char('é'), None);
    }
}
