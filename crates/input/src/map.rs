//! Decoding raw terminal bytes into key events, and key events into camera moves.

use arrayvec::ArrayVec;

use crate::types::{KeyAction, KeyEvent, KeyMods, INTERRUPT_BYTE};

/// Largest chunk [`decode_bytes`] accepts in one call.
pub const MAX_CHUNK: usize = 64;

/// Decode one raw-mode byte.
///
/// Only Ctrl+C (byte 3) and printable ASCII produce events; letters are
/// upper-cased. Everything else, including escape sequences, is dropped.
pub fn decode_key_byte(b: u8) -> Option<KeyEvent> {
    match b {
        INTERRUPT_BYTE => Some(KeyEvent::down('C', KeyMods::CTRL)),
        0x20..=0x7e => Some(KeyEvent::down(
            (b as char).to_ascii_uppercase(),
            KeyMods::empty(),
        )),
        _ => None,
    }
}

/// Decode a chunk of at most [`MAX_CHUNK`] bytes, in order. Extra bytes are ignored.
pub fn decode_bytes(bytes: &[u8]) -> ArrayVec<KeyEvent, MAX_CHUNK> {
    bytes
        .iter()
        .take(MAX_CHUNK)
        .filter_map(|&b| decode_key_byte(b))
        .collect()
}

/// Check if the event should stop the frame loop.
pub fn should_quit(event: &KeyEvent) -> bool {
    event.is_interrupt()
}

/// Map WASD presses to a one-pixel camera pan.
pub fn pan_delta(event: &KeyEvent) -> Option<(i32, i32)> {
    if event.action != KeyAction::Down || !event.modifiers.is_empty() {
        return None;
    }
    match event.key {
        'W' => Some((0, -1)),
        'S' => Some((0, 1)),
        'A' => Some((-1, 0)),
        'D' => Some((1, 0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_byte() {
        let ev = decode_key_byte(3).unwrap();
        assert_eq!(ev, KeyEvent::down('C', KeyMods::CTRL));
        assert!(should_quit(&ev));
    }

    #[test]
    fn test_printable_bytes_are_upper_cased() {
        assert_eq!(decode_key_byte(b'w'), Some(KeyEvent::down('W', KeyMods::empty())));
        assert_eq!(decode_key_byte(b'W'), Some(KeyEvent::down('W', KeyMods::empty())));
        assert_eq!(decode_key_byte(b' '), Some(KeyEvent::down(' ', KeyMods::empty())));
        assert_eq!(decode_key_byte(b'~'), Some(KeyEvent::down('~', KeyMods::empty())));
        assert!(!should_quit(&decode_key_byte(b'c').unwrap()));
    }

    #[test]
    fn test_other_bytes_are_dropped() {
        for b in [0u8, 1, 2, 4, 0x1b, b'\r', b'\n', 0x7f, 0x80, 0xff] {
            assert_eq!(decode_key_byte(b), None, "byte {b:#x}");
        }
    }

    #[test]
    fn test_decode_bytes_keeps_order() {
        // Arrow up arrives as ESC [ A; only the printable tail survives.
        let events = decode_bytes(b"a\x1b[Ad\x03");
        let keys: Vec<char> = events.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!['A', '[', 'A', 'D', 'C']);
        assert!(events[4].is_interrupt());
    }

    #[test]
    fn test_decode_bytes_caps_chunk() {
        let bytes = [b'x'; MAX_CHUNK + 10];
        assert_eq!(decode_bytes(&bytes).len(), MAX_CHUNK);
    }

    #[test]
    fn test_pan_keys() {
        let key = |c: u8| decode_key_byte(c).unwrap();
        assert_eq!(pan_delta(&key(b'w')), Some((0, -1)));
        assert_eq!(pan_delta(&key(b's')), Some((0, 1)));
        assert_eq!(pan_delta(&key(b'a')), Some((-1, 0)));
        assert_eq!(pan_delta(&key(b'd')), Some((1, 0)));
        assert_eq!(pan_delta(&key(b'x')), None);
        assert_eq!(pan_delta(&KeyEvent::new('W', KeyAction::Up, KeyMods::empty())), None);
    }
}
