//! Plain matrix format.
//!
//! ```text
//! 4
//! -1 10 15 20
//! 10 -1 35 25
//! 15 35 -1 30
//! 20 25 30 -1
//! ```
//!
//! The first line is the vertex count N, followed by N lines of N
//! whitespace-separated integers. Negative values mean "no edge"; diagonal
//! values are ignored.

use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, TspError};
use crate::graph::CostGraph;

/// Parses a graph from plain-format text.
pub fn parse_plain(content: &str) -> Result<CostGraph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| TspError::parse(1, "missing vertex count"))?;
    let size: usize = header
        .parse()
        .map_err(|_| TspError::parse(header_line, format!("invalid vertex count: {header}")))?;
    if size == 0 {
        return Err(TspError::parse(header_line, "vertex count must be at least 1"));
    }
    if size.checked_mul(size).is_none() {
        return Err(TspError::parse(header_line, "dimension too large"));
    }

    let mut rows = Vec::new();
    let mut last_line = header_line;
    for row in 0..size {
        let (line_no, line) = lines.next().ok_or_else(|| {
            TspError::parse(last_line + 1, format!("expected {size} rows, found {row}"))
        })?;
        last_line = line_no;
        let values = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| TspError::parse(line_no, format!("invalid weight: {token}")))
            })
            .collect::<Result<Vec<i64>>>()?;
        if values.len() != size {
            return Err(TspError::parse(
                line_no,
                format!("expected {size} values, found {}", values.len()),
            ));
        }
        rows.push(values);
    }

    if let Some((line_no, _)) = lines.next() {
        warn!("plain graph: ignoring trailing content from line {line_no}");
    }

    debug!("plain graph: parsed {size} vertices");
    CostGraph::from_rows(&rows)
}

/// Reads a plain-format graph file.
pub fn read_plain(path: impl AsRef<Path>) -> Result<CostGraph> {
    let content = std::fs::read_to_string(path)?;
    parse_plain(&content)
}

/// Writes `graph` in plain format, with `-1` for missing edges and the diagonal.
pub fn write_plain<W: Write>(graph: &CostGraph, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", graph.size())?;
    for row in graph.to_rows() {
        let line: Vec<String> = row.iter().map(i64::to_string).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RandomGraphConfig;
    use crate::graph::tests::four_city_graph;
    use proptest::prelude::*;

    const FOUR_CITIES: &str = "4\n-1 10 15 20\n10 -1 35 25\n15 35 -1 30\n20 25 30 -1\n";

    #[test]
    fn test_parse_four_cities() {
        assert_eq!(parse_plain(FOUR_CITIES).unwrap(), four_city_graph());
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let text = "\n 3 \n0   1  2\n 3 0 4\n5 6   0\n\n";
        let graph = parse_plain(text).unwrap();
        assert_eq!(graph.weight(1, 2), Some(4));
        assert!(!graph.has_edge(0, 0));
    }

    #[test]
    fn test_negative_means_no_edge() {
        let graph = parse_plain("2\n-1 -5\n3 -1\n").unwrap();
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.weight(1, 0), Some(3));
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_plain("3\n0 1 2\n3 x 4\n5 6 0\n").unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 3, .. }), "{err}");

        let err = parse_plain("3\n0 1 2\n3 0\n").unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 3, .. }), "{err}");

        let err = parse_plain("3\n0 1 2\n").unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 3, .. }), "{err}");

        assert!(matches!(
            parse_plain("").unwrap_err(),
            TspError::Parse { line: 1, .. }
        ));
        assert!(parse_plain("abc\n").is_err());
        assert!(parse_plain("0\n").is_err());
    }

    #[test]
    fn test_huge_vertex_count_is_parse_error() {
        let err = parse_plain("1000000000000000000\n1 2\n").unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 1, .. }), "{err}");

        // Squares without overflow but the rows are short.
        let err = parse_plain("4000000000\n1 2\n").unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_write_plain() {
        let mut out = Vec::new();
        write_plain(&four_city_graph(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), FOUR_CITIES);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_plain("/nonexistent/graph.txt").unwrap_err();
        assert!(matches!(err, TspError::Io(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_round_trip(
            n in 1usize..12,
            symmetric in any::<bool>(),
            seed in any::<u64>(),
            hole in any::<(usize, usize)>(),
        ) {
            let mut rows = RandomGraphConfig::new(n)
                .with_symmetric(symmetric)
                .with_weight_range(0, 1_000)
                .with_seed(seed)
                .generate()
                .unwrap()
                .to_rows();
            rows[hole.0 % n][hole.1 % n] = -1;
            let graph = CostGraph::from_rows(&rows).unwrap();

            let mut out = Vec::new();
            write_plain(&graph, &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            prop_assert_eq!(parse_plain(&text).unwrap(), graph);
        }
    }
}
