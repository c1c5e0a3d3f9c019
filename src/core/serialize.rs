// recursive json rendering
//each node renders as {"name": ..., "rank": string|null, "children": [...]}.
//the renderer recurses through children ids and assumes the input was
//acyclic: attachment only ever adds parent -> child appends, so a cycle can
//only come from the data itself, and there is no cycle detection here.
use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::core::graph::{GraphError, LineageGraph};
use crate::core::roots::TreeDocument;
use crate::core::types::NodeId;

struct NodeView<'a> {
    graph: &'a LineageGraph,
    id: NodeId,
}

struct ForestView<'a> {
    graph: &'a LineageGraph,
    ids: &'a [NodeId],
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self
            .graph
            .node(self.id)
            .map_err(serde::ser::Error::custom)?;

        let mut s = serializer.serialize_struct("Node", 3)?;
        s.serialize_field("name", &node.name)?;
        s.serialize_field("rank", &node.rank)?;
        s.serialize_field(
            "children",
            &ForestView {
                graph: self.graph,
                ids: &node.children,
            },
        )?;
        s.end()
    }
}

impl Serialize for ForestView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ids.len()))?;
        for &id in self.ids {
            seq.serialize_element(&NodeView {
                graph: self.graph,
                id,
            })?;
        }
        seq.end()
    }
}

impl LineageGraph {
    /// Render a document to pretty-printed JSON (2-space indent).
    ///
    /// The graph is not mutated, so rendering the same document twice gives
    /// byte-identical output.
    pub fn render(&self, doc: &TreeDocument) -> Result<String, GraphError> {
        let json = match doc {
            TreeDocument::Single(id) => {
                serde_json::to_string_pretty(&NodeView { graph: self, id: *id })?
            }
            TreeDocument::Forest(ids) => {
                serde_json::to_string_pretty(&ForestView { graph: self, ids })?
            }
        };
        Ok(json)
    }

    /// Resolve the output shape and write it to `path` in one go.
    ///
    /// Rendering happens fully in memory first, so either the whole document
    /// lands on disk or the file is never touched.
    pub fn write_document(&self, path: &Path) -> Result<(), GraphError> {
        let json = self.render(&self.document())?;
        fs::write(path, json).map_err(|source| GraphError::WriteOutput {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Triple;
    use serde_json::Value;

    fn mk(parent: &str, child: &str, rank: &str) -> Triple {
        Triple::new(parent, child, rank)
    }

    fn render(triples: &[Triple]) -> String {
        let g = LineageGraph::from_triples(triples).unwrap();
        g.render(&g.document()).unwrap()
    }

    #[test]
    fn single_root_renders_as_one_object() {
        let json = render(&[mk("A", "B", "r1"), mk("B", "C", "r2")]);
        let v: Value = serde_json::from_str(&json).unwrap();

        assert!(v.is_object(), "single root must not be wrapped in an array");
        assert_eq!(v["name"], "A");
        assert_eq!(v["rank"], Value::Null);
        assert_eq!(v["children"][0]["name"], "B");
        assert_eq!(v["children"][0]["rank"], "r1");
        assert_eq!(v["children"][0]["children"][0]["name"], "C");
        assert_eq!(v["children"][0]["children"][0]["children"], Value::Array(vec![]));
    }

    #[test]
    fn multiple_roots_render_as_array_in_first_seen_order() {
        let json = render(&[mk("A", "B", "r"), mk("C", "D", "r")]);
        let v: Value = serde_json::from_str(&json).unwrap();

        let arr = v.as_array().expect("expected an array of roots");
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["name"], "A");
        assert_eq!(arr[0]["children"][0]["name"], "B");
        assert_eq!(arr[1]["name"], "C");
        assert_eq!(arr[1]["children"][0]["name"], "D");
    }

    #[test]
    fn zero_roots_render_as_empty_array() {
        let json = render(&[mk("A", "B", "r"), mk("B", "A", "r")]);

        assert_eq!(json, "[]");
    }

    #[test]
    fn empty_input_renders_as_empty_array() {
        let json = render(&[]);

        assert_eq!(json, "[]");
    }

    #[test]
    fn duplicate_edges_appear_twice_in_children() {
        let json = render(&[mk("A", "B", "r"), mk("A", "B", "r")]);
        let v: Value = serde_json::from_str(&json).unwrap();

        let children = v["children"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["name"], "B");
        assert_eq!(children[1]["name"], "B");
    }

    #[test]
    fn end_to_end_self_loop_row_is_invisible_in_output() {
        use crate::core::parser::read_triples;

        let triples = read_triples("A,A,x\nA,B,species\n".as_bytes()).unwrap();
        let g = LineageGraph::from_triples(&triples).unwrap();
        let v: Value = serde_json::from_str(&g.render(&g.document()).unwrap()).unwrap();

        assert_eq!(v["name"], "A");
        assert_eq!(v["rank"], Value::Null);
        let children = v["children"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["name"], "B");
        assert_eq!(children[0]["rank"], "species");
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let g = LineageGraph::from_triples(&[mk("A", "B", "r1"), mk("B", "C", "r2")]).unwrap();
        let doc = g.document();

        let first = g.render(&doc).unwrap();
        let second = g.render(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn write_document_puts_the_rendered_json_on_disk() {
        let g = LineageGraph::from_triples(&[mk("A", "B", "species")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        g.write_document(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, g.render(&g.document()).unwrap());
    }

    #[test]
    fn write_document_reports_unwritable_destination() {
        let g = LineageGraph::from_triples(&[mk("A", "B", "r")]).unwrap();

        let err = g
            .write_document(Path::new("/definitely/not/here/out.json"))
            .unwrap_err();
        match err {
            GraphError::WriteOutput { path, .. } => assert!(path.ends_with("out.json")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
