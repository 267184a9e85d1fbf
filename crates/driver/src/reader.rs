use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use super::error::Error;
use apsp_core::Graph;
use common::types::{Edge, Weight};

/// Declared sizes from the first line of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphHeader {
    pub vertex_count: usize,
    /// Informational only; never checked against the edge lines.
    pub edge_count: usize,
}

/// Reads the graph text format:
///
/// ```text
/// <vertex count> <edge count>
/// <source> <sink> <weight>
/// ...
/// ```
///
/// Vertex indices are 1-based on disk and converted to 0-based edges.
pub struct GraphReader<R: Read> {
    reader: csv::Reader<R>,
}

impl GraphReader<File> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> GraphReader<R> {
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .flexible(true)
            .quoting(false)
            .from_reader(source);

        GraphReader { reader }
    }

    /// Parses the whole input and builds the immutable graph.
    ///
    /// # Errors
    /// Returns `Error::MalformedInput` for a missing or non-numeric header, an
    /// edge line that is not `<uint> <uint> <int>`, or a vertex index outside
    /// `[1, vertex_count]`.
    pub fn read_graph(mut self) -> Result<Graph, Error> {
        let mut records = self.reader.records();

        let header = loop {
            match records.next() {
                Some(record) => {
                    let record = record?;
                    let fields = fields(&record);
                    if !fields.is_empty() {
                        break parse_header(line_of(&record), &fields)?;
                    }
                }
                None => return Err(Error::malformed(1, "missing '<vertices> <edges>' header")),
            }
        };

        let mut edges: Vec<Edge> = Vec::new();
        for record in records {
            let record = record?;
            let fields = fields(&record);
            if fields.is_empty() {
                continue;
            }
            edges.push(parse_edge(line_of(&record), &fields, header.vertex_count)?);
        }

        if edges.len() != header.edge_count {
            debug!(
                declared = header.edge_count,
                found = edges.len(),
                "edge count in header does not match edge lines"
            );
        }

        Ok(Graph::new(header.vertex_count, &edges)?)
    }
}

/// Whitespace-separated tokens of a record; empty fields from repeated
/// spaces are dropped and tabs also separate tokens.
fn fields(record: &StringRecord) -> Vec<&str> {
    record.iter().flat_map(str::split_whitespace).collect()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn parse_number<T: FromStr>(line: u64, field: &str, what: &str) -> Result<T, Error> {
    field
        .parse()
        .map_err(|_| Error::malformed(line, format!("{} '{}' is not a valid integer", what, field)))
}

fn parse_header(line: u64, fields: &[&str]) -> Result<GraphHeader, Error> {
    let [vertices, edges] = fields else {
        return Err(Error::malformed(
            line,
            format!("expected '<vertices> <edges>', found '{}'", fields.join(" ")),
        ));
    };

    Ok(GraphHeader {
        vertex_count: parse_number(line, vertices, "vertex count")?,
        edge_count: parse_number(line, edges, "edge count")?,
    })
}

fn parse_edge(line: u64, fields: &[&str], vertex_count: usize) -> Result<Edge, Error> {
    let [source, sink, weight] = fields else {
        return Err(Error::malformed(
            line,
            format!("expected '<source> <sink> <weight>', found '{}'", fields.join(" ")),
        ));
    };

    let source = to_zero_based(line, parse_number(line, source, "source")?, vertex_count)?;
    let sink = to_zero_based(line, parse_number(line, sink, "sink")?, vertex_count)?;
    let weight: Weight = parse_number(line, weight, "weight")?;

    Ok((source, sink, weight))
}

fn to_zero_based(line: u64, index: usize, vertex_count: usize) -> Result<usize, Error> {
    if index == 0 || index > vertex_count {
        return Err(Error::malformed(
            line,
            format!(
                "attempting to insert an edge at vertex {} in a graph with {} vertices",
                index, vertex_count
            ),
        ));
    }
    Ok(index - 1)
}

/// Reads and parses the graph file at `path`.
pub fn read_graph_file(path: &Path) -> Result<Graph, Error> {
    GraphReader::from_path(path)?.read_graph()
}
