//! A set of digits 1-9, stored as a bitmask.

use std::iter::FusedIterator;

const MASK: u16 = 0x1ff;

/// A set of sudoku digits, represented as a 16-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively; the upper bits are always
/// zero. This is the in-memory form of a cell's pencil marks and the layout
/// used when marks are persisted.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitSet;
///
/// let mut set = DigitSet::new();
/// set.insert(1);
/// set.insert(5);
/// set.insert(9);
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(5));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 5, 9]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn bit(digit: u8) -> u16 {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        1 << (digit - 1)
    }

    /// Adds a digit to the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn insert(&mut self, digit: u8) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn remove(&mut self, digit: u8) {
        self.0 &= !Self::bit(digit);
    }

    /// Flips a digit's membership, returning `true` if it is now present.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn toggle(&mut self, digit: u8) -> bool {
        self.0 ^= Self::bit(digit);
        self.0 & Self::bit(digit) != 0
    }

    /// Returns whether the set contains a digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Number of digits in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.iter().count()
    }

    /// Returns whether the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bitmask with bits 0-8 mapping to digits 1-9.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Reconstructs a set from a raw bitmask.
    ///
    /// Returns `None` if any bit above the ninth is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !MASK != 0 {
            return None;
        }
        Some(Self(bits))
    }

    /// Iterates over the digits in the set in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.0 }
    }
}

impl FromIterator<u8> for DigitSet {
    /// Collects digits into a set.
    ///
    /// # Panics
    ///
    /// Panics if any digit is not in the range 1-9.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DigitSet(self.bits).len();
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Iter {}
