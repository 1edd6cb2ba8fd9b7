//! Dense fixed-width bitmap over 64-bit words.
//!
//! Signatures are sized to the largest item id plus one, bit-slices to the
//! transaction count. Positions at or beyond the width read as unset, which
//! is how an unknown item simply fails to match.

use std::fmt;

use num::BigUint;

use crate::visitor::Visitor;

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    words: Vec<u64>,
    width: usize,
}

impl Bitmap {
    /// All zero bitmap holding `width` bits.
    pub fn new(width: usize) -> Self {
        Self {
            words: vec![0; words_for(width)],
            width,
        }
    }

    pub fn from_positions(width: usize, positions: impl IntoIterator<Item = u32>) -> Self {
        let mut bitmap = Self::new(width);
        for position in positions {
            bitmap.insert(position);
        }
        bitmap
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Panics if `position` is outside the width.
    pub fn insert(&mut self, position: u32) {
        let position = position as usize;
        assert!(position < self.width, "bit {} outside width {}", position, self.width);
        self.words[position / WORD_BITS] |= 1u64 << (position % WORD_BITS);
    }

    pub fn contains(&self, position: u32) -> bool {
        let position = position as usize;
        match self.words.get(position / WORD_BITS) {
            Some(word) => *word & (1u64 << (position % WORD_BITS)) != 0,
            None => false,
        }
    }

    /// True when every position in `positions` is set.
    pub fn contains_all(&self, positions: &[u32]) -> bool {
        positions.iter().all(|&p| self.contains(p))
    }

    /// In-place AND. Words missing from `other` count as zero.
    pub fn intersect_with(&mut self, other: &Bitmap) {
        for (i, word) in self.words.iter_mut().enumerate() {
            *word &= other.words.get(i).copied().unwrap_or(0);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Set positions in ascending order.
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    pub fn visit_ones(&self, visitor: &mut dyn Visitor<u32>) {
        for position in self.iter_ones() {
            visitor.visit(position);
        }
    }

    /// The bitmap read as an unsigned integer, bit `i` weighing `2^i`.
    pub fn to_biguint(&self) -> BigUint {
        let digits = self.words
            .iter()
            .flat_map(|&w| [w as u32, (w >> 32) as u32])
            .collect();
        BigUint::new(digits)
    }
}

fn words_for(width: usize) -> usize {
    (width + WORD_BITS - 1) / WORD_BITS
}

/// Decimal rendering, matching the integer the bitmap encodes.
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("ones", &self.iter_ones().collect::<Vec<_>>())
            .finish()
    }
}

pub struct Ones<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl<'a> Iterator for Ones<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some((self.index * WORD_BITS + bit) as u32)
    }
}
