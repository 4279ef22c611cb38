//! Live color plus a ring of stored colors.

use huepick_core::Color;

/// Number of stored slots.
pub const SLOT_COUNT: usize = 6;

/// The swatch: a live main color and six stored slots.
///
/// Slots are addressed 1 through 6; the active slot receives the next
/// stored color.
///
/// ```rust
/// use huepick_core::Color;
/// use huepick_sample::Swatch;
///
/// let mut swatch = Swatch::new();
/// swatch.set_main(Color::new(1.0, 0.0, 0.0));
/// swatch.store_main(true);
/// assert_eq!(swatch.get(1), Some(Color::new(1.0, 0.0, 0.0)));
/// assert_eq!(swatch.active(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    main: Color,
    slots: [Color; SLOT_COUNT],
    active: usize,
}

impl Default for Swatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Swatch {
    /// Black main color, black slots, slot 1 active.
    pub fn new() -> Self {
        Self {
            main: Color::BLACK,
            slots: [Color::BLACK; SLOT_COUNT],
            active: 1,
        }
    }

    /// Live color.
    pub fn main(&self) -> Color {
        self.main
    }

    /// Replaces the live color.
    pub fn set_main(&mut self, color: Color) {
        self.main = color;
    }

    /// Active slot, `1..=6`.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Selects a slot. Out-of-range indices are ignored and return `false`.
    pub fn set_active(&mut self, index: usize) -> bool {
        if (1..=SLOT_COUNT).contains(&index) {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Moves the active slot by `delta`, wrapping around.
    pub fn move_active(&mut self, delta: isize) {
        let n = SLOT_COUNT as isize;
        let zero_based = (self.active as isize - 1 + delta).rem_euclid(n);
        self.active = zero_based as usize + 1;
    }

    /// Stored color in slot `index`.
    pub fn get(&self, index: usize) -> Option<Color> {
        index.checked_sub(1).and_then(|i| self.slots.get(i)).copied()
    }

    /// Copies the main color into the active slot, then optionally advances.
    ///
    /// Returns the slot that was written.
    pub fn store_main(&mut self, rotate: bool) -> usize {
        let written = self.active;
        self.slots[written - 1] = self.main;
        if rotate {
            self.move_active(1);
        }
        written
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Color; SLOT_COUNT] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_wraps() {
        let mut s = Swatch::new();
        s.move_active(-1);
        assert_eq!(s.active(), 6);
        s.move_active(2);
        assert_eq!(s.active(), 2);
        s.move_active(13);
        assert_eq!(s.active(), 3);
    }

    #[test]
    fn test_store_without_rotate() {
        let mut s = Swatch::new();
        s.set_active(4);
        s.set_main(Color::gray(0.5));
        assert_eq!(s.store_main(false), 4);
        assert_eq!(s.active(), 4);
        assert_eq!(s.get(4), Some(Color::gray(0.5)));
    }

    #[test]
    fn test_rotation_cycles_all_slots() {
        let mut s = Swatch::new();
        for i in 0..SLOT_COUNT + 1 {
            s.set_main(Color::gray(i as f32 / 10.0));
            s.store_main(true);
        }
        // Seventh store overwrote slot 1.
        assert_eq!(s.get(1), Some(Color::gray(0.6)));
        assert_eq!(s.get(2), Some(Color::gray(0.1)));
        assert_eq!(s.active(), 2);
    }

    #[test]
    fn test_bounds() {
        let mut s = Swatch::new();
        assert!(!s.set_active(0));
        assert!(!s.set_active(7));
        assert_eq!(s.get(0), None);
        assert_eq!(s.get(7), None);
    }
}
