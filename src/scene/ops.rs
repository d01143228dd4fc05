use crate::foundation::core::{ElementId, OutlineStyle, Point, Tint};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Shapes a stage can materialize. Dimensions are in scene units; what a
/// scene unit maps to on screen is a renderer concern.
pub enum ShapeKind {
    Square { side: f64 },
    Circle { radius: f64 },
    Line { from: Point, to: Point },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A single presentation operation recorded by the stage.
///
/// Ops reference elements by id; the element table in [`SceneScript`] carries
/// the created kind/content/position for each id. The op stream is the whole
/// output of a run: it is executable in order by any renderer with the same
/// semantics, and it is discarded after the run.
pub enum SceneOp {
    /// Materialize a shape at a resolved position.
    CreateShape { id: ElementId, kind: ShapeKind, at: Point },
    /// Materialize a text label at a resolved position.
    CreateLabel { id: ElementId, text: String, at: Point },
    /// Morph `old` into `new` in place. `old` is superseded and dead after this.
    Morph { old: ElementId, new: ElementId },
    /// Draw a transient bounding outline around one or more live elements.
    Outline {
        id: ElementId,
        around: Vec<ElementId>,
        style: OutlineStyle,
    },
    /// Re-tint a shape's fill (hit/miss marking).
    Recolor { target: ElementId, tint: Tint },
    FadeIn { target: ElementId },
    FadeOut { target: ElementId },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One `play(..)` batch: ops presented together as a single animation beat.
pub struct Step {
    pub ops: Vec<SceneOp>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Element record kept for every id a stage ever assigned.
pub struct ElementRecord {
    pub id: ElementId,
    pub at: Point,
    pub kind: ElementKind,
    /// False once the element was faded out or superseded by a morph.
    pub alive: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    Shape(ShapeKind),
    Label(String),
    Outline(OutlineStyle),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The recorded product of a walkthrough: every element ever created plus the
/// ordered steps that presented them. One run produces one script; nothing is
/// persisted beyond an optional JSON dump.
pub struct SceneScript {
    pub elements: Vec<ElementRecord>,
    pub steps: Vec<Step>,
}

impl SceneScript {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Count of elements still alive at the end of the run.
    pub fn live_elements(&self) -> usize {
        self.elements.iter().filter(|e| e.alive).count()
    }

    /// Total ops across all steps.
    pub fn op_count(&self) -> usize {
        self.steps.iter().map(|s| s.ops.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let script = SceneScript {
            elements: vec![ElementRecord {
                id: ElementId(0),
                at: Point::new(1.0, 2.0),
                kind: ElementKind::Label("hello".to_string()),
                alive: true,
            }],
            steps: vec![Step {
                ops: vec![SceneOp::CreateLabel {
                    id: ElementId(0),
                    text: "hello".to_string(),
                    at: Point::new(1.0, 2.0),
                }],
            }],
        };

        let s = serde_json::to_string_pretty(&script).unwrap();
        let de: SceneScript = serde_json::from_str(&s).unwrap();
        assert_eq!(de, script);
        assert_eq!(de.live_elements(), 1);
        assert_eq!(de.op_count(), 1);
    }
}
