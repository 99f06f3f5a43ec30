//! Parsing textual maze layouts into rows of tile codes.

use crate::error::MapError;
use crate::map::tile::TileCode;

/// Parser for numeric maze layouts: one row per line, codes separated by
/// whitespace or commas. Blank lines are ignored.
pub struct LayoutParser;

impl LayoutParser {
    /// Parses a single token into a tile code.
    pub fn parse_token(token: &str, row: usize, col: usize) -> Result<TileCode, MapError> {
        token
            .trim()
            .trim_matches('"')
            .parse::<u8>()
            .map(TileCode::from_code)
            .map_err(|_| MapError::InvalidCode {
                token: token.to_string(),
                row,
                col,
            })
    }

    /// Parses a full layout.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is not a code in `0..=255`, if rows differ in
    /// length, or if there are no rows at all.
    pub fn parse(text: &str) -> Result<Vec<Vec<TileCode>>, MapError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|token| !token.is_empty())
                    .enumerate()
                    .map(|(col, token)| Self::parse_token(token, row, col))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::validate(rows)
    }

    /// Builds rows from raw numeric codes.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Vec<Vec<TileCode>>, MapError> {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().iter().copied().map(TileCode::from_code).collect::<Vec<_>>())
            .collect();

        Self::validate(rows)
    }

    fn validate(rows: Vec<Vec<TileCode>>) -> Result<Vec<Vec<TileCode>>, MapError> {
        let expected = rows.first().map(Vec::len).ok_or(MapError::Empty)?;
        if expected == 0 {
            return Err(MapError::Empty);
        }

        if let Some((row, found)) = rows.iter().map(Vec::len).enumerate().find(|&(_, len)| len != expected) {
            return Err(MapError::RaggedRow { row, expected, found });
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(LayoutParser::parse_token("0", 0, 0), Ok(TileCode::Blank));
        assert_eq!(LayoutParser::parse_token("\"16\"", 0, 0), Ok(TileCode::OuterWallBottom));
        assert_eq!(LayoutParser::parse_token("42", 0, 0), Ok(TileCode::Other(42)));
        assert!(LayoutParser::parse_token("-1", 0, 0).is_err());
        assert!(LayoutParser::parse_token("x", 0, 0).is_err());
    }

    #[test]
    fn test_parse_mixed_separators() {
        let rows = LayoutParser::parse("1, 2 3\n4,0,5\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![TileCode::OuterCornerUpperLeft, TileCode::OuterWallTop, TileCode::OuterCornerUpperRight]);
        assert_eq!(rows[1][1], TileCode::Blank);
    }
}
