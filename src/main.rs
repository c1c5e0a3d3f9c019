// fixed-path batch job: data/lineage_bold.csv -> data/lineage_bold.json
use std::path::Path;

use anyhow::Context;

use lineage_core::{LineageGraph, read_triples_from_path};

//input and output live next to the project, not behind any flag or env var
const CSV_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/lineage_bold.csv");
const JSON_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/lineage_bold.json");

fn main() -> anyhow::Result<()> {
    let triples = read_triples_from_path(Path::new(CSV_FILE))
        .with_context(|| format!("reading {CSV_FILE}"))?;

    let graph = LineageGraph::from_triples(&triples)?;

    //the output file is only opened once the full graph exists in memory,
    //so a failed run never leaves partial output behind
    graph
        .write_document(Path::new(JSON_FILE))
        .with_context(|| format!("writing {JSON_FILE}"))?;

    println!("Converted CSV -> JSON: {JSON_FILE}");
    Ok(())
}
