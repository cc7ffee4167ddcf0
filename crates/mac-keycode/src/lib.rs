//! mac-keycode: Virtual keycodes and specs for macOS.
//!
//! - `Key`: Enum of the macOS virtual keycodes codepulse can type.
//! - `Modifier`: Enum of modifier keys with conversions to/from `Key`.
//! - `Chord`: A key plus held modifiers, parsed from specs like `cmd+s`.
//! - Spec helpers: `Key::from_spec`, `Key::to_spec`, and
//!   `Modifier::from_spec`, `Modifier::to_spec`.
//!
//! Values are the hardware codes from the HIToolbox `kVK_` constants, with
//! the ANSI_ prefix stripped and digits prefixed with `Digit`.

mod key;
pub use key::Key;

mod spec;

mod modifiers;
pub use modifiers::{Modifier, modifiers_to_cg_flags};

mod chord;
pub use chord::Chord;
