//! Tree persistence.
//!
//! A tree is stored as one JSON document of nested records with the keys
//! `id`, `value` and `children`. A `null` document holds no tree.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::{TreeError, TreeResult},
    Node, NodeId, NodeValue,
};

/// The serialized form of a [`Node`] and its subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub value: NodeValue,
    /// Null entries are accepted on read and skipped
    pub children: Vec<Option<NodeRecord>>,
}

pub fn encode(node: Option<&Node>) -> Option<NodeRecord> {
    node.map(|node| NodeRecord {
        id: node.id().to_string(),
        value: node.value(),
        children: node
            .children()
            .iter()
            .map(|child| encode(Some(child)))
            .collect(),
    })
}

/// Rebuild a tree from records. Identities come from the records rather than
/// a generator.
pub fn decode(record: Option<NodeRecord>) -> Option<Node> {
    record.map(|record| {
        let mut node = Node::new(record.id, record.value);
        for child in record.children.into_iter().filter_map(decode) {
            node.push_child(child);
        }
        node
    })
}

/// Serialize a tree to pretty-printed JSON with 4-space indentation
pub fn to_string(node: Option<&Node>) -> TreeResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    encode(node).serialize(&mut ser)?;

    let text = String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)?;
    Ok(text)
}

/// Parse a tree from JSON text.
///
/// Nesting depth is not limited; the stack grows on the heap as deep
/// records are read.
pub fn from_str(text: &str) -> TreeResult<Option<Node>> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();

    let record = Option::<NodeRecord>::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;

    Ok(decode(record))
}

#[instrument(level = "debug", skip(node))]
pub fn save(path: &Path, node: Option<&Node>) -> TreeResult<()> {
    let text = to_string(node)?;

    fs::write(path, text).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(node) = node {
        debug!("Saved tree {} hash 0x{:X}", node.id(), node.xxhash());
    } else {
        debug!("Saved empty tree");
    }
    Ok(())
}

#[instrument(level = "debug")]
pub fn load(path: &Path) -> TreeResult<Option<Node>> {
    let text = fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let node = from_str(&text)?;

    if let Some(node) = &node {
        debug!("Loaded tree {} hash 0x{:X}", node.id(), node.xxhash());
    } else {
        debug!("Loaded empty tree");
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        height::height,
        test::{test_chain, test_mixed, test_pair},
        TreeGenerator,
    };

    use super::*;

    #[test]
    fn test_encode() {
        let root = test_pair();
        let record = encode(Some(&root)).unwrap();

        assert_eq!(record.id, "node-0");
        assert_eq!(record.value, 5);
        assert_eq!(record.children.len(), 2);

        let first = record.children[0].as_ref().unwrap();
        assert_eq!(first.id, "node-1");
        assert_eq!(first.value, 3);
        assert!(first.children.is_empty());

        assert_eq!(encode(None), None);
    }

    #[test]
    fn test_roundtrip() {
        let mixed = test_mixed();
        assert_eq!(decode(encode(Some(&mixed))), Some(mixed.clone()));

        for seed in 0..20 {
            let tree = TreeGenerator::seeded(seed).generate(5, 4).unwrap();
            let text = to_string(tree.as_ref()).unwrap();
            let restored = from_str(&text).unwrap();

            assert_eq!(restored, tree);
            assert_eq!(
                restored.as_ref().map(Node::xxhash),
                tree.as_ref().map(Node::xxhash)
            );
        }
    }

    #[test]
    fn test_deep_roundtrip() {
        // Each level nests an object and a children array
        for len in [64, 70, 200] {
            let chain = test_chain(len);
            let restored = from_str(&to_string(Some(&chain)).unwrap()).unwrap().unwrap();

            assert_eq!(height(&restored), len - 1);
            assert_eq!(restored, chain);
        }
    }

    #[test]
    fn test_deep_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.json");

        let chain = test_chain(100);
        save(&path, Some(&chain)).unwrap();
        assert_eq!(load(&path).unwrap(), Some(chain));
    }

    #[test]
    fn test_trailing_text() {
        let text = r#"{"id": "a", "value": 1, "children": []} {"#;
        assert!(matches!(from_str(text), Err(TreeError::Format(_))));
    }

    #[test]
    fn test_text_format() {
        let mut root = Node::new("a", 1);
        root.push_child(Node::new("b", 2));

        let expected = r#"{
    "id": "a",
    "value": 1,
    "children": [
        {
            "id": "b",
            "value": 2,
            "children": []
        }
    ]
}"#;
        assert_eq!(to_string(Some(&root)).unwrap(), expected);
        assert_eq!(to_string(None).unwrap(), "null");
    }

    #[test]
    fn test_null() {
        assert_eq!(from_str("null").unwrap(), None);

        // Null children are skipped
        let text = concat!(
            r#"{"id": "a", "value": 1, "children": "#,
            r#"[null, {"id": "b", "value": 2, "children": []}]}"#
        );
        let root = from_str(text).unwrap().unwrap();
        assert_eq!(root.num_children(), 1);
        assert_eq!(root.children()[0].id(), "b");
    }

    #[test]
    fn test_malformed() {
        for text in [
            "",
            "{",
            "[1, 2]",
            r#"{"id": "a", "value": 1}"#,
            r#"{"id": "a", "children": []}"#,
            r#"{"value": 1, "children": []}"#,
            r#"{"id": 3, "value": 1, "children": []}"#,
            r#"{"id": "a", "value": "one", "children": []}"#,
            r#"{"id": "a", "value": 1, "children": [{"id": "b"}]}"#,
        ] {
            assert!(
                matches!(from_str(text), Err(TreeError::Format(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[traced_test]
    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n_tree.json");

        let root = test_mixed();
        save(&path, Some(&root)).unwrap();
        assert_eq!(load(&path).unwrap(), Some(root.clone()));

        assert!(logs_contain(&format!("hash 0x{:X}", root.xxhash())));

        save(&path, None).unwrap();
        assert_eq!(load(&path).unwrap(), None);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        match load(&missing) {
            Err(TreeError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }

        let broken = dir.path().join("broken.json");
        fs::write(&broken, r#"{"id": "a", "value": 1, "children": ["#).unwrap();
        assert!(matches!(load(&broken), Err(TreeError::Format(_))));
    }
}
