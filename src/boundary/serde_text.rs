//! Stable text serialization for boundary loops: `L[x,y]` for a straight
//! node, `A[x,y,cx,cy,cw]` for an arc node (`cw` is `1` or `0`), joined by
//! `;`. Whitespace around tokens and separators is ignored on parse.

use super::{BoundaryLoop, BoundaryPoint};
use crate::point::Pt;
use thiserror::Error;

/// Errors arising from parsing the text boundary-loop format.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// A node token wasn't of the form `TAG[n,n,...]`.
    #[error("malformed node token: {0:?}")]
    MalformedToken(String),
    /// A node token's tag wasn't `L` or `A`.
    #[error("unrecognised node tag: {0:?}")]
    UnknownTag(String),
    /// A field within a node token failed to parse as a number.
    #[error("invalid number in token {0:?}: {1}")]
    InvalidNumber(String, String),
}

pub(super) fn to_text(loop_: &BoundaryLoop) -> String {
    loop_
        .boundary_points()
        .iter()
        .map(node_to_text)
        .collect::<Vec<_>>()
        .join(";")
}

fn node_to_text(bp: &BoundaryPoint) -> String {
    match bp {
        BoundaryPoint::LineStart(p) => format!("L[{:.6},{:.6}]", p.x.0, p.y.0),
        BoundaryPoint::ArcStart {
            point,
            center,
            clockwise,
        } => format!(
            "A[{:.6},{:.6},{:.6},{:.6},{}]",
            point.x.0,
            point.y.0,
            center.x.0,
            center.y.0,
            if *clockwise { 1 } else { 0 }
        ),
    }
}

pub(super) fn from_text(s: &str) -> Result<BoundaryLoop, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(BoundaryLoop::empty());
    }
    let points = trimmed
        .split(';')
        .map(|tok| parse_node(tok.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoundaryLoop::from_points(points))
}

fn parse_node(tok: &str) -> Result<BoundaryPoint, ParseError> {
    if tok.is_empty() {
        return Err(ParseError::MalformedToken(tok.to_string()));
    }
    let (tag, rest) = tok.split_at(1);
    let inner = rest
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| ParseError::MalformedToken(tok.to_string()))?;
    let nums = inner
        .split(',')
        .map(|n| {
            n.trim()
                .parse::<f64>()
                .map_err(|e| ParseError::InvalidNumber(tok.to_string(), e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    match tag {
        "L" => {
            if nums.len() != 2 {
                return Err(ParseError::MalformedToken(tok.to_string()));
            }
            Ok(BoundaryPoint::LineStart(Pt(nums[0], nums[1])))
        }
        "A" => {
            if nums.len() != 5 {
                return Err(ParseError::MalformedToken(tok.to_string()));
            }
            Ok(BoundaryPoint::ArcStart {
                point: Pt(nums[0], nums[1]),
                center: Pt(nums[2], nums[3]),
                clockwise: nums[4] != 0.0,
            })
        }
        _ => Err(ParseError::UnknownTag(tag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Pt;

    #[test]
    fn test_round_trip_rectangle() {
        let r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 3.0));
        let text = to_text(&r);
        let parsed = from_text(&text).unwrap();
        assert_eq!(parsed.count(), r.count());
    }

    #[test]
    fn test_round_trip_circle() {
        let c = BoundaryLoop::circle(Pt(1.0, 2.0), 3.0);
        let text = to_text(&c);
        assert!(text.starts_with("A["));
        let parsed = from_text(&text).unwrap();
        assert_eq!(parsed.count(), 1);
    }

    #[test]
    fn test_empty_text() {
        let parsed = from_text("").unwrap();
        assert!(parsed.is_null_set());
    }

    #[test]
    fn test_malformed_token() {
        assert!(from_text("L[1.0]").is_err());
        assert!(from_text("Z[1.0,2.0]").is_err());
        assert!(from_text("L[x,2.0]").is_err());
    }

    #[test]
    fn test_whitespace_tolerant() {
        let parsed = from_text(" L[0.0, 0.0] ; L[1.0, 0.0] ; L[1.0, 1.0] ").unwrap();
        assert_eq!(parsed.count(), 3);
    }
}
