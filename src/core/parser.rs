// input normalization
//every line is data (no header row). all three fields are trimmed before
//anything else looks at them, and rows whose trimmed parent equals the
//trimmed child are dropped entirely: no node, no rank write, no edge.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::graph::GraphError;
use crate::core::types::Triple;

/// Read `(parent, child, rank)` records in input order.
///
/// A record with anything other than exactly three fields is an unrecoverable
/// input-shape violation: the whole run aborts, nothing is produced.
pub fn read_triples<R: Read>(input: R) -> Result<Vec<Triple>, GraphError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut triples = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 3 {
            return Err(GraphError::MalformedRecord {
                line: record.position().map_or(0, |p| p.line()),
                fields: record.len(),
            });
        }

        let parent = record[0].trim();
        let child = record[1].trim();
        let rank = record[2].trim();

        if parent == child {
            continue;
        }

        triples.push(Triple::new(parent, child, rank));
    }
    Ok(triples)
}

pub fn read_triples_from_path(path: &Path) -> Result<Vec<Triple>, GraphError> {
    let file = File::open(path).map_err(|source| GraphError::MissingInput {
        path: path.display().to_string(),
        source,
    })?;
    read_triples(file)
}
