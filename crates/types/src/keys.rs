//! Keyboard event vocabulary shared by the input decoder and the frame loop.

use bitflags::bitflags;

/// Whether a key went down or up.
///
/// Terminals in raw mode only report presses, so the byte decoder only ever
/// produces `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Down,
    Up,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyMods: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

/// A single decoded key event. Letters are reported upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: char,
    pub action: KeyAction,
    pub modifiers: KeyMods,
}

impl KeyEvent {
    pub const fn new(key: char, action: KeyAction, modifiers: KeyMods) -> Self {
        Self {
            key,
            action,
            modifiers,
        }
    }

    pub const fn down(key: char, modifiers: KeyMods) -> Self {
        Self::new(key, KeyAction::Down, modifiers)
    }

    /// Ctrl+C, in any action state.
    pub fn is_interrupt(&self) -> bool {
        self.key == 'C' && self.modifiers.contains(KeyMods::CTRL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_requires_ctrl() {
        assert!(KeyEvent::down('C', KeyMods::CTRL).is_interrupt());
        assert!(KeyEvent::down('C', KeyMods::CTRL | KeyMods::SHIFT).is_interrupt());
        assert!(!KeyEvent::down('C', KeyMods::empty()).is_interrupt());
        assert!(!KeyEvent::down('X', KeyMods::CTRL).is_interrupt());
    }
}
