//! TSPLIB-style ATSP reader.
//!
//! Only explicit `FULL_MATRIX` weights are supported:
//!
//! ```text
//! NAME: br17
//! TYPE: ATSP
//! COMMENT: 17 city problem (Repetto)
//! DIMENSION: 17
//! EDGE_WEIGHT_TYPE: EXPLICIT
//! EDGE_WEIGHT_FORMAT: FULL_MATRIX
//! EDGE_WEIGHT_SECTION
//!  9999    3    5   48 ...
//! EOF
//! ```
//!
//! Matrix values may wrap across lines. Reading stops at `EOF` or at the end
//! of input.
//!
//! Reference: Reinelt (1991) "TSPLIB—A Traveling Salesman Problem Library"

use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, TspError};
use crate::graph::CostGraph;

/// A parsed ATSP file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtspInstance {
    /// `NAME` header.
    pub name: Option<String>,
    /// `TYPE` header.
    pub kind: Option<String>,
    /// `COMMENT` header.
    pub comment: Option<String>,
    /// The weight matrix.
    pub graph: CostGraph,
}

/// Parses ATSP text.
pub fn parse_atsp(content: &str) -> Result<AtspInstance> {
    let mut name = None;
    let mut kind = None;
    let mut comment = None;
    let mut dimension: Option<usize> = None;
    let mut in_weights = false;
    let mut values: Vec<i64> = Vec::new();
    let mut last_line = 0;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        last_line = line_no;

        if line.is_empty() {
            continue;
        }
        if line == "EOF" {
            break;
        }
        if line == "EDGE_WEIGHT_SECTION" {
            if dimension.is_none() {
                return Err(TspError::parse(line_no, "EDGE_WEIGHT_SECTION before DIMENSION"));
            }
            in_weights = true;
            continue;
        }

        if in_weights {
            for token in line.split_whitespace() {
                let w = token
                    .parse::<i64>()
                    .map_err(|_| TspError::parse(line_no, format!("invalid edge weight: {token}")))?;
                values.push(w);
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(TspError::parse(line_no, format!("expected `KEY: value`, got `{line}`")));
        };
        let value = value.trim();
        match key.trim().to_uppercase().as_str() {
            "NAME" => name = Some(value.to_string()),
            "TYPE" => kind = Some(value.to_string()),
            "COMMENT" => comment = Some(value.to_string()),
            "DIMENSION" => {
                let n: usize = value
                    .parse()
                    .map_err(|_| TspError::parse(line_no, format!("invalid dimension: {value}")))?;
                if n == 0 {
                    return Err(TspError::parse(line_no, "dimension must be at least 1"));
                }
                if n.checked_mul(n).is_none() {
                    return Err(TspError::parse(line_no, "dimension too large"));
                }
                dimension = Some(n);
            }
            "EDGE_WEIGHT_TYPE" => {
                if !value.eq_ignore_ascii_case("EXPLICIT") {
                    return Err(TspError::parse(
                        line_no,
                        format!("unsupported edge weight type: {value}"),
                    ));
                }
            }
            "EDGE_WEIGHT_FORMAT" => {
                if !value.eq_ignore_ascii_case("FULL_MATRIX") {
                    return Err(TspError::parse(
                        line_no,
                        format!("unsupported edge weight format: {value}"),
                    ));
                }
            }
            other => warn!("atsp: ignoring unknown header `{other}` on line {line_no}"),
        }
    }

    let n = dimension.ok_or_else(|| TspError::parse(last_line, "missing DIMENSION"))?;
    if !in_weights {
        return Err(TspError::parse(last_line, "missing EDGE_WEIGHT_SECTION"));
    }
    if values.len() != n * n {
        return Err(TspError::parse(
            last_line,
            format!("expected {} edge weights, found {}", n * n, values.len()),
        ));
    }

    let rows: Vec<Vec<i64>> = values.chunks(n).map(<[i64]>::to_vec).collect();
    let graph = CostGraph::from_rows(&rows)?;
    debug!(
        "atsp: parsed {} with {n} vertices",
        name.as_deref().unwrap_or("unnamed instance")
    );

    Ok(AtspInstance {
        name,
        kind,
        comment,
        graph,
    })
}

/// Reads an ATSP file.
pub fn read_atsp(path: impl AsRef<Path>) -> Result<AtspInstance> {
    let content = std::fs::read_to_string(path)?;
    parse_atsp(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "NAME: tiny3
TYPE: ATSP
COMMENT: three cities
DIMENSION: 3
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: FULL_MATRIX
EDGE_WEIGHT_SECTION
 9999 1 50
 50 9999
 1 1 50 9999
EOF
";

    #[test]
    fn test_parse_wrapped_matrix() {
        let instance = parse_atsp(SMALL).unwrap();
        assert_eq!(instance.name.as_deref(), Some("tiny3"));
        assert_eq!(instance.kind.as_deref(), Some("ATSP"));
        assert_eq!(instance.comment.as_deref(), Some("three cities"));

        let g = &instance.graph;
        assert_eq!(g.size(), 3);
        assert_eq!(g.weight(0, 1), Some(1));
        assert_eq!(g.weight(1, 0), Some(50));
        assert_eq!(g.weight(1, 2), Some(1));
        assert_eq!(g.weight(2, 0), Some(1));
        assert!(!g.has_edge(2, 2));
    }

    #[test]
    fn test_missing_eof_is_accepted() {
        let text = SMALL.trim_end().trim_end_matches("EOF");
        assert_eq!(parse_atsp(text).unwrap(), parse_atsp(SMALL).unwrap());
    }

    #[test]
    fn test_content_after_eof_ignored() {
        let text = format!("{SMALL}garbage that is never read\n");
        assert!(parse_atsp(&text).is_ok());
    }

    #[test]
    fn test_rejects_other_formats() {
        let text = SMALL.replace("FULL_MATRIX", "UPPER_ROW");
        let err = parse_atsp(&text).unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 6, .. }), "{err}");

        let text = SMALL.replace("EXPLICIT", "EUC_2D");
        assert!(parse_atsp(&text).is_err());
    }

    #[test]
    fn test_wrong_value_count() {
        let text = SMALL.replace(" 1 1 50 9999", " 1 1 50");
        let err = parse_atsp(&text).unwrap_err();
        assert!(err.to_string().contains("expected 9 edge weights, found 8"));
    }

    #[test]
    fn test_bad_token_and_missing_dimension() {
        let text = SMALL.replace(" 50 9999\n", " 50 x\n");
        assert!(matches!(
            parse_atsp(&text).unwrap_err(),
            TspError::Parse { line: 9, .. }
        ));

        let text = SMALL.replace("DIMENSION: 3\n", "");
        assert!(parse_atsp(&text).is_err());
    }

    #[test]
    fn test_huge_dimension_is_parse_error() {
        let text = "NAME: x\nDIMENSION: 8589934592\nEDGE_WEIGHT_SECTION\n1 2 3\nEOF\n";
        let err = parse_atsp(text).unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 2, .. }), "{err}");
        assert!(err.to_string().contains("dimension too large"));
    }
}
