//! Whitespace-separated integer vertex lists.
//!
//! `"x1 y1 x2 y2 ..."` gives the vertices directly. An odd number of tokens
//! means the first one is a vertex count, which must match the pairs that
//! follow: `"3 0 0 4 0 0 4"`.

use std::str::FromStr;

use crate::error::{FormatError, GridsnakeError};

use super::{Point, Polygon, Rectangle, Square, Triangle};

/// Parses a vertex list in either accepted layout.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] for a token that is not an integer
/// and [`FormatError::CountMismatch`] when a leading count disagrees with the
/// number of coordinate pairs.
pub fn parse_vertices(s: &str) -> Result<Vec<Point>, FormatError> {
    let values = s
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i32>()
                .map_err(|_| FormatError::InvalidNumber(tok.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let coords = if values.len() % 2 == 1 {
        let declared = usize::try_from(values[0]).unwrap_or(usize::MAX);
        let found = (values.len() - 1) / 2;
        if declared != found {
            return Err(FormatError::CountMismatch { declared, found });
        }
        &values[1..]
    } else {
        &values[..]
    };

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::lattice(pair[0], pair[1]))
        .collect())
}

impl FromStr for Polygon {
    type Err = GridsnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Polygon::new(parse_vertices(s)?)?)
    }
}

impl FromStr for Rectangle {
    type Err = GridsnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Rectangle::new(parse_vertices(s)?)?)
    }
}

impl FromStr for Square {
    type Err = GridsnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Square::new(parse_vertices(s)?)?)
    }
}

impl FromStr for Triangle {
    type Err = GridsnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Triangle::new(parse_vertices(s)?)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn plain_pairs() {
        let v = parse_vertices("1 2  3 4\t5 6 ").unwrap();
        assert_eq!(v, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]);
    }

    #[test]
    fn leading_count() {
        let v = parse_vertices("3 0 0 4 0 0 4").unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v[1], Point::new(4.0, 0.0));
    }

    #[test]
    fn count_mismatch() {
        assert_eq!(
            parse_vertices("4 0 0 4 0 0 4"),
            Err(FormatError::CountMismatch { declared: 4, found: 3 })
        );
        assert!(matches!(
            parse_vertices("-1 0 0 1 1"),
            Err(FormatError::CountMismatch { .. })
        ));
    }

    #[test]
    fn invalid_token() {
        assert_eq!(
            parse_vertices("1 2 x 4"),
            Err(FormatError::InvalidNumber("x".to_owned()))
        );
        assert!(parse_vertices("1.5 2 3 4").is_err());
    }

    #[test]
    fn from_str_surfaces_geometry_errors() {
        let err = "0 0 1 0".parse::<Polygon>().unwrap_err();
        assert!(matches!(
            err,
            GridsnakeError::Geometry(GeometryError::TooFewVertices(2))
        ));
        let err = "3 0 0 1 1".parse::<Triangle>().unwrap_err();
        assert!(matches!(err, GridsnakeError::Format(_)));
    }
}
