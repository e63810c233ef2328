//! JSON source: a single object mapping node name to an array of dep
//! specs, read from a regular file or from stdin (`-`).

use std::collections::HashMap;
use std::io::Read;

use serde_json::Value;

use super::{LoadError, LoadedGraph, NodeMeta};
use crate::atom::{DepAtom, DepList};
use crate::graph::DepGraph;
use crate::parser::parse_token;

pub fn load(source: &str) -> Result<LoadedGraph, LoadError> {
    let contents = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| LoadError::Io {
                path: "-".into(),
                source: e,
            })?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| LoadError::Io {
            path: source.into(),
            source: e,
        })?
    };

    let value: Value = serde_json::from_str(&contents).map_err(|e| LoadError::InvalidJson {
        path: source.to_string(),
        source: e,
    })?;

    let Value::Object(map) = value else {
        return Err(LoadError::NotAnObject {
            path: source.to_string(),
        });
    };

    let mut graph = DepGraph::new();
    let mut metadata = HashMap::new();

    for (node, deps_value) in map {
        let deps = parse_dep_value(source, &node, deps_value)?;
        graph.insert(node.clone(), deps);
        metadata.insert(
            node,
            NodeMeta {
                path: source.to_string(),
            },
        );
    }

    log::debug!("loaded {}: {} node(s)", source, graph.len());
    Ok(LoadedGraph { graph, metadata })
}

fn parse_dep_value(source: &str, node: &str, value: Value) -> Result<DepList, LoadError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| parse_dep_item(source, node, item))
            .collect(),
        _ => Err(LoadError::InvalidDepValue {
            path: source.to_string(),
            node: node.to_string(),
        }),
    }
}

fn parse_dep_item(source: &str, node: &str, item: Value) -> Result<DepAtom, LoadError> {
    match item {
        Value::String(tok) => Ok(parse_token(&tok)?),
        Value::Array(names) => {
            let names: Result<Vec<String>, LoadError> = names
                .into_iter()
                .map(|n| match n {
                    Value::String(s) => Ok(s),
                    _ => Err(LoadError::InvalidDepValue {
                        path: source.to_string(),
                        node: node.to_string(),
                    }),
                })
                .collect();
            Ok(DepAtom::Alternation(names?))
        }
        _ => Err(LoadError::InvalidDepValue {
            path: source.to_string(),
            node: node.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "resolve-deps-json-test-{}-{}.json",
            std::process::id(),
            NEXT.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
        ));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    static NEXT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

    #[test]
    fn parses_strings_nested_arrays_and_null() {
        let path = write_temp(r#"{"a": ["b", "+c", ["d", "e"]], "b": null}"#);
        let loaded = load(path.to_str().unwrap()).unwrap();

        assert_eq!(
            loaded.graph["a"],
            vec![
                DepAtom::Required("b".into()),
                DepAtom::Weak("c".into()),
                DepAtom::Alternation(vec!["d".into(), "e".into()]),
            ]
        );
        assert_eq!(loaded.graph["b"], Vec::new());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn non_array_non_null_value_is_an_error() {
        let path = write_temp(r#"{"a": "not an array"}"#);
        let err = load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDepValue { .. }));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn non_object_top_level_is_an_error() {
        let path = write_temp("[1, 2, 3]");
        let err = load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { .. }));
        std::fs::remove_file(&path).unwrap();
    }
}
