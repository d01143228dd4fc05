//! Scripted prefix-tree operations: insert walks-or-creates per character,
//! search requires the terminal flag, startsWith only requires the path.

use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, ElementId, OutlineStyle, Point, Tint, Vec2},
    foundation::error::StepsceneResult,
    scene::ops::ShapeKind,
    scene::stage::Stage,
    structures::trie::{NodeId, Trie},
    sync::binder::Binder,
};

const ROOT_AT: Point = Point::new(-4.0, -2.0);
const CHILD_STEP: Vec2 = Vec2::new(1.5, 1.5);
const NODE_RADIUS: f64 = 0.3;

/// One scripted trie operation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrieOp {
    Insert(String),
    Search(String),
    StartsWith(String),
}

impl TrieOp {
    fn describe(&self) -> String {
        match self {
            Self::Insert(w) => format!("insert({w})"),
            Self::Search(w) => format!("search({w})"),
            Self::StartsWith(w) => format!("startsWith({w})"),
        }
    }
}

/// Apply `ops` to a fresh trie; inserts yield `None`, queries their verdict.
pub fn apply_trie_ops(ops: &[TrieOp]) -> Vec<Option<bool>> {
    let mut trie = Trie::new();
    ops.iter()
        .map(|op| match op {
            TrieOp::Insert(word) => {
                trie.insert(word);
                None
            }
            TrieOp::Search(word) => Some(trie.search(word)),
            TrieOp::StartsWith(prefix) => Some(trie.starts_with(prefix)),
        })
        .collect()
}

/// Narrated version of [`apply_trie_ops`]: one arena trie is both the answer
/// and the diagram; node labels are bound per [`NodeId`], circles and edges
/// are scaffolding keyed alongside.
#[tracing::instrument(skip(stage))]
pub fn explain_trie_ops(
    stage: &mut dyn Stage,
    ops: &[TrieOp],
) -> StepsceneResult<Vec<Option<bool>>> {
    stage.create_label("Trie (Prefix Tree) Implementation", Point::new(0.0, -3.2));
    stage.play();

    let mut trie = Trie::new();
    // node label per NodeId via the binder; geometry sits beside it
    let mut labels: Binder<NodeId> = Binder::stacking(Direction::Below, 0.0);
    let mut circles: HashMap<NodeId, ElementId> = HashMap::new();
    let mut edges: HashMap<(NodeId, char), ElementId> = HashMap::new();

    let root_circle = stage.create_shape(ShapeKind::Circle { radius: NODE_RADIUS }, ROOT_AT);
    circles.insert(NodeId::ROOT, root_circle);
    labels.upsert(stage, NodeId::ROOT, "root", Some(root_circle))?;
    stage.play();

    // running diagonal offset for newly created nodes, as a chain
    let mut next_node_at = ROOT_AT;

    let mut verdicts = Vec::with_capacity(ops.len());
    for op in ops {
        let op_label = stage.create_label(&op.describe(), Point::new(2.5, -2.0));
        stage.play();

        match op {
            TrieOp::Insert(word) => {
                animate_insert(
                    stage,
                    &mut trie,
                    &mut labels,
                    &mut circles,
                    &mut edges,
                    &mut next_node_at,
                    word,
                )?;
                verdicts.push(None);
            }
            TrieOp::Search(word) => {
                let found = trie.search(word);
                animate_query(stage, &trie, &mut labels, &edges, word, op_label, true)?;
                verdicts.push(Some(found));
            }
            TrieOp::StartsWith(prefix) => {
                let found = trie.starts_with(prefix);
                animate_query(stage, &trie, &mut labels, &edges, prefix, op_label, false)?;
                verdicts.push(Some(found));
            }
        }

        stage.fade_out(op_label)?;
        stage.play();
    }

    Ok(verdicts)
}

fn animate_insert(
    stage: &mut dyn Stage,
    trie: &mut Trie,
    labels: &mut Binder<NodeId>,
    circles: &mut HashMap<NodeId, ElementId>,
    edges: &mut HashMap<(NodeId, char), ElementId>,
    next_node_at: &mut Point,
    word: &str,
) -> StepsceneResult<()> {
    let mut current = NodeId::ROOT;

    for ch in word.chars() {
        match trie.child(current, ch) {
            Some(next) => {
                // existing path: flash the edge and the node
                let edge = edges[&(current, ch)];
                let edge_mark = stage.create_outline(&[edge], OutlineStyle::Cursor)?;
                stage.play();
                stage.fade_out(edge_mark)?;
                let node_mark = labels.highlight(stage, &[next], OutlineStyle::Cursor)?;
                stage.play();
                labels.clear(stage, node_mark)?;
                stage.play();
                current = next;
            }
            None => {
                let next = trie.add_child(current, ch);
                *next_node_at += CHILD_STEP;
                let at = *next_node_at;

                let parent_at = stage.position_of(circles[&current])?;
                let circle = stage.create_shape(ShapeKind::Circle { radius: NODE_RADIUS }, at);
                let edge = stage.create_shape(
                    ShapeKind::Line {
                        from: parent_at,
                        to: at,
                    },
                    parent_at.midpoint(at),
                );
                labels.upsert(stage, next, &ch.to_string(), Some(circle))?;
                circles.insert(next, circle);
                edges.insert((current, ch), edge);
                stage.play();
                current = next;
            }
        }
    }

    // terminal flash on the final node
    trie.mark_terminal(current);
    stage.recolor(circles[&current], Tint::Success)?;
    stage.play();
    stage.recolor(circles[&current], Tint::Neutral)?;
    stage.play();
    Ok(())
}

fn animate_query(
    stage: &mut dyn Stage,
    trie: &Trie,
    labels: &mut Binder<NodeId>,
    edges: &HashMap<(NodeId, char), ElementId>,
    path: &str,
    op_label: ElementId,
    require_terminal: bool,
) -> StepsceneResult<()> {
    let mut current = NodeId::ROOT;

    for ch in path.chars() {
        let Some(next) = trie.child(current, ch) else {
            let text = if require_terminal {
                "Not found"
            } else {
                "Prefix not found"
            };
            verdict(stage, op_label, text)?;
            return Ok(());
        };

        let edge_mark = stage.create_outline(&[edges[&(current, ch)]], OutlineStyle::Cursor)?;
        stage.play();
        stage.fade_out(edge_mark)?;
        let node_mark = labels.highlight(stage, &[next], OutlineStyle::Cursor)?;
        stage.play();
        labels.clear(stage, node_mark)?;
        stage.play();
        current = next;
    }

    let text = if require_terminal {
        if trie.is_terminal(current) {
            "Found"
        } else {
            "Not end of word"
        }
    } else {
        "Prefix exists"
    };
    verdict(stage, op_label, text)
}

fn verdict(stage: &mut dyn Stage, op_label: ElementId, text: &str) -> StepsceneResult<()> {
    let label = stage.create_label(text, Point::ORIGIN);
    stage.position_relative_to(label, op_label, Direction::Below, 0.5)?;
    stage.play();
    stage.fade_out(label)?;
    stage.play();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::RecordingStage;

    fn dog_script() -> Vec<TrieOp> {
        vec![
            TrieOp::Insert("dog".to_string()),
            TrieOp::Search("do".to_string()),
            TrieOp::StartsWith("do".to_string()),
            TrieOp::Search("dog".to_string()),
        ]
    }

    #[test]
    fn worked_example_verdicts() {
        assert_eq!(
            apply_trie_ops(&dog_script()),
            vec![None, Some(false), Some(true), Some(true)]
        );
    }

    #[test]
    fn query_on_empty_trie_misses() {
        assert_eq!(
            apply_trie_ops(&[TrieOp::Search("a".to_string())]),
            vec![Some(false)]
        );
    }

    #[test]
    fn explain_matches_reference() {
        let ops = dog_script();
        let mut stage = RecordingStage::new();
        let verdicts = explain_trie_ops(&mut stage, &ops).unwrap();
        assert_eq!(verdicts, apply_trie_ops(&ops));
        assert!(!stage.into_script().is_empty());
    }

    #[test]
    fn double_insert_adds_no_elements_beyond_highlights() {
        let once = {
            let mut stage = RecordingStage::new();
            explain_trie_ops(&mut stage, &[TrieOp::Insert("dog".to_string())]).unwrap();
            stage.into_script()
        };
        let twice = {
            let mut stage = RecordingStage::new();
            explain_trie_ops(
                &mut stage,
                &[
                    TrieOp::Insert("dog".to_string()),
                    TrieOp::Insert("dog".to_string()),
                ],
            )
            .unwrap();
            stage.into_script()
        };

        let live_nodes = |script: &crate::scene::ops::SceneScript| {
            script
                .elements
                .iter()
                .filter(|e| {
                    e.alive
                        && matches!(
                            e.kind,
                            crate::scene::ops::ElementKind::Shape(ShapeKind::Circle { .. })
                        )
                })
                .count()
        };
        // same node circles either way: root + d + o + g
        assert_eq!(live_nodes(&once), 4);
        assert_eq!(live_nodes(&twice), 4);
    }

    #[test]
    fn op_json_shape_is_stable() {
        let op = TrieOp::StartsWith("do".to_string());
        let s = serde_json::to_string(&op).unwrap();
        assert_eq!(s, r#"{"starts_with":"do"}"#);
        let de: TrieOp = serde_json::from_str(&s).unwrap();
        assert_eq!(de, op);
    }
}
