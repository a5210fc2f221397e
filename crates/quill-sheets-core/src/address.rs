//! Cell address and merge range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AB12")
///
/// Addresses combine column letters (A-XFD) and row numbers (1-1048576).
/// Both components are 1-indexed: A1 is `{row: 1, col: 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, B=2, ..., XFD=16384)
    pub col: u16,
}

impl CellAddress {
    /// Create a cell address from 1-based row and column numbers
    ///
    /// # Examples
    /// ```
    /// use quill_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::from_row_col(12, 28).unwrap();
    /// assert_eq!(addr.to_string(), "AB12");
    ///
    /// assert!(CellAddress::from_row_col(0, 1).is_err());
    /// assert!(CellAddress::from_row_col(1, 16_385).is_err());
    /// ```
    pub fn from_row_col(row: u32, col: u32) -> Result<Self> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if col == 0 || col > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }
        Ok(Self {
            row,
            col: col as u16,
        })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The column-letter portion is case-insensitive: `"a1"`, `"A1"` and
    /// `"aB12"`, `"AB12"` parse to the same address.
    ///
    /// # Examples
    /// ```
    /// use quill_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("az4455").unwrap();
    /// assert_eq!(addr.row, 4455);
    /// assert_eq!(addr.col, 52);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_col(&s[..pos])?;

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        // The row digits can exceed u32; parse wide and bounds-check once.
        let row: u64 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 || row > MAX_ROWS as u64 {
            return Err(Error::RowOutOfBounds(
                row.min(u32::MAX as u64) as u32,
                MAX_ROWS,
            ));
        }

        Ok(Self {
            row: row as u32,
            col,
        })
    }

    /// Convert column letters to a 1-based column number (A=1, Z=26, AA=27)
    ///
    /// The mapping is bijective base-26 with no zero digit, so "A" and "AA"
    /// are distinct and every column number has exactly one spelling.
    pub fn letters_to_col(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }
        if letters.len() > 4 {
            return Err(Error::InvalidAddress(format!(
                "column letters too long: '{}'",
                letters
            )));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        if col > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }

        Ok(col as u16)
    }

    /// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
    pub fn col_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Format as the canonical A1-style string
    pub fn to_a1(&self) -> String {
        format!("{}{}", Self::col_to_letters(self.col), self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A merged cell range (e.g., "A1:C2")
///
/// Unlike a plain rectangular selection, a merge range is only legal when it
/// spans more than one cell and its corners are given in top-left /
/// bottom-right order. Construction enforces this, so a `MergeRange` value is
/// always a valid merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRange {
    top_left: CellAddress,
    bottom_right: CellAddress,
}

impl MergeRange {
    /// Create a merge range from its two corners
    ///
    /// Fails when the corners are identical (a one-cell merge is invalid) or
    /// when the corners are inverted in either dimension.
    pub fn new(top_left: CellAddress, bottom_right: CellAddress) -> Result<Self> {
        if top_left == bottom_right {
            return Err(Error::InvalidRange(format!(
                "merge range must span more than one cell: {}:{}",
                top_left, bottom_right
            )));
        }
        if top_left.row > bottom_right.row {
            return Err(Error::InvalidRange(format!(
                "top row {} is below bottom row {}",
                top_left.row, bottom_right.row
            )));
        }
        if top_left.col > bottom_right.col {
            return Err(Error::InvalidRange(format!(
                "left column {} is right of right column {}",
                top_left.col, bottom_right.col
            )));
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Parse a merge range from "A1:C2" notation
    ///
    /// Exactly one ':' is required; anything else (including extra tokens
    /// such as "A1:C2:123") is malformed.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(tl), Some(br), None) => {
                Self::new(CellAddress::parse(tl)?, CellAddress::parse(br)?)
            }
            _ => Err(Error::InvalidRange(format!(
                "expected 'A1:C2'-style range, got '{}'",
                s
            ))),
        }
    }

    /// Top-left corner
    pub fn top_left(&self) -> CellAddress {
        self.top_left
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> CellAddress {
        self.bottom_right
    }

    /// Check if a cell lies within this range
    pub fn contains(&self, addr: CellAddress) -> bool {
        addr.row >= self.top_left.row
            && addr.row <= self.bottom_right.row
            && addr.col >= self.top_left.col
            && addr.col <= self.bottom_right.col
    }

    /// Check if this range shares any cell with another
    pub fn overlaps(&self, other: &MergeRange) -> bool {
        self.top_left.row <= other.bottom_right.row
            && self.bottom_right.row >= other.top_left.row
            && self.top_left.col <= other.bottom_right.col
            && self.bottom_right.col >= other.top_left.col
    }

    /// Format as the canonical "A1:C2" string
    pub fn to_a1(&self) -> String {
        format!("{}:{}", self.top_left.to_a1(), self.bottom_right.to_a1())
    }
}

impl fmt::Display for MergeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

impl FromStr for MergeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_col_to_letters() {
        assert_eq!(CellAddress::col_to_letters(1), "A");
        assert_eq!(CellAddress::col_to_letters(2), "B");
        assert_eq!(CellAddress::col_to_letters(26), "Z");
        assert_eq!(CellAddress::col_to_letters(27), "AA");
        assert_eq!(CellAddress::col_to_letters(28), "AB");
        assert_eq!(CellAddress::col_to_letters(702), "ZZ");
        assert_eq!(CellAddress::col_to_letters(703), "AAA");
        assert_eq!(CellAddress::col_to_letters(16384), "XFD"); // format max
    }

    #[test]
    fn test_letters_to_col() {
        assert_eq!(CellAddress::letters_to_col("A").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_col("Z").unwrap(), 26);
        assert_eq!(CellAddress::letters_to_col("AA").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_col("AB").unwrap(), 28);
        assert_eq!(CellAddress::letters_to_col("ZZ").unwrap(), 702);
        assert_eq!(CellAddress::letters_to_col("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(CellAddress::letters_to_col("a").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_col("xfd").unwrap(), 16384);

        // One past the end
        assert!(CellAddress::letters_to_col("XFE").is_err());
        assert!(CellAddress::letters_to_col("AAAAA").is_err());
    }

    #[test]
    fn test_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!((addr.row, addr.col), (1, 1));

        let addr = CellAddress::parse("AZ4455").unwrap();
        assert_eq!((addr.row, addr.col), (4455, 52));

        let addr = CellAddress::parse("XFD1048576").unwrap();
        assert_eq!((addr.row, addr.col), (1048576, 16384));
    }

    #[test]
    fn test_parse_case_insensitive() {
        for s in ["ab12", "AB12", "aB12", "Ab12"] {
            let addr = CellAddress::parse(s).unwrap();
            assert_eq!((addr.row, addr.col), (12, 28));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            CellAddress::parse(""),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            CellAddress::parse("A"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            CellAddress::parse("1"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            CellAddress::parse("A1X"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            CellAddress::parse("A-1"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            CellAddress::parse("A0"),
            Err(Error::RowOutOfBounds(0, _))
        ));
        assert!(matches!(
            CellAddress::parse("A1048577"),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            CellAddress::parse("XFE1"),
            Err(Error::ColumnOutOfBounds(..))
        ));
    }

    #[test]
    fn test_from_row_col_bounds() {
        assert!(CellAddress::from_row_col(1, 1).is_ok());
        assert!(CellAddress::from_row_col(1_048_576, 16_384).is_ok());
        assert!(CellAddress::from_row_col(0, 1).is_err());
        assert!(CellAddress::from_row_col(1, 0).is_err());
        assert!(CellAddress::from_row_col(1_048_577, 1).is_err());
        assert!(CellAddress::from_row_col(1, 16_385).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellAddress::from_row_col(1, 1).unwrap().to_string(), "A1");
        assert_eq!(
            CellAddress::from_row_col(100, 3).unwrap().to_string(),
            "C100"
        );
        assert_eq!(
            CellAddress::from_row_col(12, 28).unwrap().to_string(),
            "AB12"
        );
    }

    #[test]
    fn test_merge_range_legality() {
        // Degenerate
        assert!(MergeRange::parse("A1:A1").is_err());
        // Inverted rows
        assert!(MergeRange::parse("A2:A1").is_err());
        // Inverted columns
        assert!(MergeRange::parse("C1:A1").is_err());
        // Out-of-range corner
        assert!(MergeRange::parse("A1:XFE1048576").is_err());
        assert!(MergeRange::parse("A1048577:C2").is_err());
        assert!(MergeRange::parse("A0:A1").is_err());

        // Valid, including the full-sheet extreme
        assert!(MergeRange::parse("A1:C2").is_ok());
        assert!(MergeRange::parse("XFD1:XFD1048576").is_ok());
    }

    #[test]
    fn test_merge_range_token_count() {
        assert!(matches!(
            MergeRange::parse("A1"),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            MergeRange::parse("A1:C2:123"),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn test_merge_range_overlap() {
        let a = MergeRange::parse("B2:D4").unwrap();
        let b = MergeRange::parse("D4:E5").unwrap();
        let c = MergeRange::parse("E5:F6").unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));

        assert!(a.contains(CellAddress::parse("C3").unwrap()));
        assert!(!a.contains(CellAddress::parse("A1").unwrap()));
    }

    proptest! {
        // to_a1(from_row_col(r, c)) must parse back to the identical address
        #[test]
        fn prop_address_roundtrip(row in 1u32..=1_048_576, col in 1u32..=16_384) {
            let addr = CellAddress::from_row_col(row, col).unwrap();
            let parsed = CellAddress::parse(&addr.to_a1()).unwrap();
            prop_assert_eq!(addr, parsed);
        }

        // Lowercased spellings parse to the same address
        #[test]
        fn prop_parse_case_insensitive(row in 1u32..=1_048_576, col in 1u32..=16_384) {
            let a1 = CellAddress::from_row_col(row, col).unwrap().to_a1();
            let lower = CellAddress::parse(&a1.to_lowercase()).unwrap();
            prop_assert_eq!(CellAddress::parse(&a1).unwrap(), lower);
        }
    }
}
