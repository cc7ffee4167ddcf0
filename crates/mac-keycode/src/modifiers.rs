use std::{collections::HashSet, convert::TryFrom};

use crate::Key;

/// Modifier keys available on macOS keyboards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
pub enum Modifier {
    Command,
    Shift,
    Option,
    Control,
    CapsLock,
    Function,
    RightCommand,
    RightShift,
    RightOption,
    RightControl,
}

impl From<Modifier> for Key {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Command => Self::Command,
            Modifier::Shift => Self::Shift,
            Modifier::Option => Self::Option,
            Modifier::Control => Self::Control,
            Modifier::CapsLock => Self::CapsLock,
            Modifier::Function => Self::Function,
            Modifier::RightCommand => Self::RightCommand,
            Modifier::RightShift => Self::RightShift,
            Modifier::RightOption => Self::RightOption,
            Modifier::RightControl => Self::RightControl,
        }
    }
}

impl TryFrom<Key> for Modifier {
    type Error = ();
    fn try_from(k: Key) -> Result<Self, Self::Error> {
        match k {
            Key::Command => Ok(Self::Command),
            Key::Shift => Ok(Self::Shift),
            Key::Option => Ok(Self::Option),
            Key::Control => Ok(Self::Control),
            Key::CapsLock => Ok(Self::CapsLock),
            Key::Function => Ok(Self::Function),
            Key::RightCommand => Ok(Self::RightCommand),
            Key::RightShift => Ok(Self::RightShift),
            Key::RightOption => Ok(Self::RightOption),
            Key::RightControl => Ok(Self::RightControl),
            _ => Err(()),
        }
    }
}

impl Modifier {
    /// Parses a modifier specification string via key specs, then converts.
    ///
    /// Accepts case-insensitive variant names and common alias words
    /// (cmd/ctrl/opt/alt/caps/fn). If the parsed key is not a modifier,
    /// parsing fails.
    pub fn from_spec(s: &str) -> Option<Self> {
        Key::from_spec(s).and_then(|k| Self::try_from(k).ok())
    }

    /// Returns the canonical spec string for this modifier, always lowercased.
    pub fn to_spec(self) -> String {
        match self {
            Self::Command => "cmd".to_string(),
            Self::Control => "ctrl".to_string(),
            Self::Option => "opt".to_string(),
            _ => Key::from(self).name().to_ascii_lowercase(),
        }
    }

    /// CGEventFlags bit carried by key events while this modifier is held.
    ///
    /// Left and right variants share a bit. CapsLock and Function carry no
    /// flag here: they are never held for synthetic chords.
    pub fn cg_flag(self) -> u64 {
        match self {
            Self::Shift | Self::RightShift => 1 << 17,
            Self::Control | Self::RightControl => 1 << 18,
            Self::Option | Self::RightOption => 1 << 19,
            Self::Command | Self::RightCommand => 1 << 20,
            Self::CapsLock | Self::Function => 0,
        }
    }
}

/// Fold a modifier set into the CGEventFlags bits for a synthetic key event.
pub fn modifiers_to_cg_flags(mods: &HashSet<Modifier>) -> u64 {
    mods.iter().fold(0, |bits, m| bits | m.cg_flag())
}
