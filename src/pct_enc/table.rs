//! Byte tables used in percent-decoding.

/// A table specifying a set of ASCII bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table(u64, u64);

impl Table {
    /// Creates a table that contains the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    pub(crate) const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot contain non-ASCII byte");
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    pub(crate) const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Checks whether the table contains the given byte.
    #[inline]
    pub(crate) const fn contains(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }
}

/// Characters with a delimiting role in a URI: `; / ? : @ & = + $ , #`.
pub(crate) const RESERVED: Table = Table::new(b";/?:@&=+$,#");

/// Characters whose escapes are kept as-is when decoding.
///
/// `%` is included so that decoding never produces a new escape.
pub(crate) const PRESERVED: Table = RESERVED.or(Table::new(b"%"));
