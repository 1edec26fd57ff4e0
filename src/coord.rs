//! Line and column pairs, written as `<line>,<column>`.
//!
//! The comma is not escaped: both halves are integers.

use crate::separators::COORD_SEPARATOR;
use crate::units::{ByteCount, ColumnCount, LineCount};
use crate::{Error, OptionValue, Result};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineAndColumn<L = LineCount, C = ByteCount> {
    pub line: L,
    pub column: C,
}

/// A position in a buffer: line and byte offset.
pub type BufferCoord = LineAndColumn<LineCount, ByteCount>;

/// A position on screen: line and display column.
pub type DisplayCoord = LineAndColumn<LineCount, ColumnCount>;

impl<L, C> LineAndColumn<L, C> {
    pub const fn new(line: L, column: C) -> Self {
        LineAndColumn { line, column }
    }
}

impl<L: OptionValue, C: OptionValue> OptionValue for LineAndColumn<L, C> {
    fn describe() -> Cow<'static, str> {
        Cow::Borrowed("coord")
    }

    fn encode(&self) -> String {
        format!(
            "{}{}{}",
            self.line.encode(),
            COORD_SEPARATOR,
            self.column.encode()
        )
    }

    fn decode(input: &str) -> Result<Self> {
        let parts = input.split(COORD_SEPARATOR).collect::<Vec<_>>();
        match parts.as_slice() {
            [line, column] => Ok(LineAndColumn {
                line: L::decode(line)?,
                column: C::decode(column)?,
            }),
            _ => Err(Error::format("<line>,<column>", input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_encode_decode() {
        let coord = BufferCoord::new(LineCount::new(3), ByteCount::new(14));
        assert_eq!(coord.encode(), "3,14");
        assert_eq!(BufferCoord::decode("3,14").unwrap(), coord);
        assert_eq!(
            LineAndColumn::<i32, i32>::decode("-1,0").unwrap(),
            LineAndColumn::new(-1, 0)
        );
    }

    #[test]
    fn test_wrong_shape() {
        for input in ["3", "1,2,3", ""] {
            let err = DisplayCoord::decode(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "input {input:?}");
            assert!(err.to_string().contains("expected <line>,<column>"));
        }
    }

    #[test]
    fn test_bad_component() {
        let err = BufferCoord::decode("a,1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_no_add() {
        let mut coord = BufferCoord::default();
        assert_eq!(
            coord.add("1,1").unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
        assert_eq!(BufferCoord::describe(), "coord");
    }

    #[test]
    fn test_coord_list() {
        let coords = vec![
            LineAndColumn::<i32, i32>::new(1, 2),
            LineAndColumn::new(3, 4),
        ];
        assert_eq!(coords.encode(), "1,2:3,4");
        assert_eq!(Vec::<LineAndColumn<i32, i32>>::decode("1,2:3,4").unwrap(), coords);
    }
}
