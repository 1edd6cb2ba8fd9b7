//! Text dumps of built indexes, for inspection only.
//!
//! Items appear in ascending order; bitmaps render as the decimal integer
//! they encode.

use std::fmt::{self, Write};

use crate::{BitSliceIndex, InvertedIndex, OccurrenceIndex, SignatureIndex};

pub trait Export {
    fn write_to(&self, out: &mut dyn Write) -> fmt::Result;

    fn export(&self) -> String {
        let mut text = String::new();
        self.write_to(&mut text).expect("writing to a String");
        text
    }
}

/// One signature per line, in transaction order.
impl Export for SignatureIndex {
    fn write_to(&self, out: &mut dyn Write) -> fmt::Result {
        for signature in self.signatures() {
            writeln!(out, "{}", signature)?;
        }
        Ok(())
    }
}

/// `item: slice`
impl Export for BitSliceIndex {
    fn write_to(&self, out: &mut dyn Write) -> fmt::Result {
        for (item, slice) in self.slices() {
            writeln!(out, "{}: {}", item, slice)?;
        }
        Ok(())
    }
}

/// `item: [id, ...]`
impl Export for InvertedIndex {
    fn write_to(&self, out: &mut dyn Write) -> fmt::Result {
        for (item, postings) in self.iter() {
            writeln!(out, "{}: {:?}", item, postings)?;
        }
        Ok(())
    }
}

/// `item: rarity, [[id, count], ...]`
impl Export for OccurrenceIndex {
    fn write_to(&self, out: &mut dyn Write) -> fmt::Result {
        for (item, rarity, postings) in self.iter() {
            write!(out, "{}: {:?}, [", item, rarity)?;
            for (i, (id, count)) in postings.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write!(out, "[{}, {}]", id, count)?;
            }
            out.write_str("]\n")?;
        }
        Ok(())
    }
}
