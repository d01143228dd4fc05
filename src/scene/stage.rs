use crate::{
    foundation::core::{Direction, ElementId, OutlineStyle, Point, Tint},
    foundation::error::{StepsceneError, StepsceneResult},
    scene::ops::{ElementKind, ElementRecord, SceneOp, SceneScript, ShapeKind, Step},
};

/// The rendering collaborator a walkthrough drives.
///
/// A stage materializes labeled elements, morphs one element's content into
/// another in place, and draws/removes bounding outlines. Ops accumulate
/// until [`Stage::play`] commits them as one synchronized step, in
/// presentation order. Everything is synchronous: a call completes before the
/// next begins.
///
/// Referencing an unknown or dead element id is a precondition violation, not
/// a runtime condition to recover from.
pub trait Stage {
    /// Materialize a shape at `at`. The element is presented on the next `play`.
    fn create_shape(&mut self, kind: ShapeKind, at: Point) -> ElementId;

    /// Materialize a text label at `at`. The element is presented on the next `play`.
    fn create_label(&mut self, text: &str, at: Point) -> ElementId;

    /// Move a not-yet-presented element next to `anchor`, `gap` units along `dir`.
    fn position_relative_to(
        &mut self,
        element: ElementId,
        anchor: ElementId,
        dir: Direction,
        gap: f64,
    ) -> StepsceneResult<()>;

    /// Draw a transient outline around one or more live elements.
    fn create_outline(
        &mut self,
        around: &[ElementId],
        style: OutlineStyle,
    ) -> StepsceneResult<ElementId>;

    /// Morph `old` into `new` in place. `old` is superseded: it is dead after
    /// this call and `new` takes over its visual slot.
    fn animate_transition(&mut self, old: ElementId, new: ElementId) -> StepsceneResult<()>;

    /// Re-tint a live shape's fill.
    fn recolor(&mut self, target: ElementId, tint: Tint) -> StepsceneResult<()>;

    /// Emphasize a live element by fading it in.
    fn fade_in(&mut self, target: ElementId) -> StepsceneResult<()>;

    /// Remove a live element from the scene. It is dead after this call.
    fn fade_out(&mut self, target: ElementId) -> StepsceneResult<()>;

    /// Current position of a known element.
    fn position_of(&self, element: ElementId) -> StepsceneResult<Point>;

    /// Commit all pending ops as one step. No-op when nothing is pending.
    fn play(&mut self);
}

/// In-memory [`Stage`] that records every op into a [`SceneScript`].
///
/// This is the only stage implementation in this crate: the script is the
/// run's entire output. Position resolution is plain point arithmetic; the
/// stage tracks liveness so that stale handles fail fast.
#[derive(Debug, Default)]
pub struct RecordingStage {
    elements: Vec<ElementRecord>,
    pending: Vec<SceneOp>,
    steps: Vec<Step>,
}

impl RecordingStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the run and take the recorded script. Pending ops are flushed.
    pub fn into_script(mut self) -> SceneScript {
        self.play();
        SceneScript {
            elements: self.elements,
            steps: self.steps,
        }
    }

    /// Script recorded so far (pending ops not included until `play`).
    pub fn script(&self) -> SceneScript {
        SceneScript {
            elements: self.elements.clone(),
            steps: self.steps.clone(),
        }
    }

    pub fn is_alive(&self, id: ElementId) -> bool {
        self.elements
            .get(id.0 as usize)
            .is_some_and(|e| e.alive)
    }

    fn register(&mut self, kind: ElementKind, at: Point) -> ElementId {
        let id = ElementId(self.elements.len() as u64);
        self.elements.push(ElementRecord {
            id,
            at,
            kind,
            alive: true,
        });
        id
    }

    fn record(&self, id: ElementId) -> StepsceneResult<&ElementRecord> {
        self.elements
            .get(id.0 as usize)
            .ok_or_else(|| StepsceneError::precondition(format!("unknown element id {}", id.0)))
    }

    fn live_record(&self, id: ElementId) -> StepsceneResult<&ElementRecord> {
        let rec = self.record(id)?;
        if !rec.alive {
            return Err(StepsceneError::precondition(format!(
                "element id {} is no longer live",
                id.0
            )));
        }
        Ok(rec)
    }
}

impl Stage for RecordingStage {
    fn create_shape(&mut self, kind: ShapeKind, at: Point) -> ElementId {
        let id = self.register(ElementKind::Shape(kind.clone()), at);
        self.pending.push(SceneOp::CreateShape { id, kind, at });
        id
    }

    fn create_label(&mut self, text: &str, at: Point) -> ElementId {
        let id = self.register(ElementKind::Label(text.to_string()), at);
        self.pending.push(SceneOp::CreateLabel {
            id,
            text: text.to_string(),
            at,
        });
        id
    }

    fn position_relative_to(
        &mut self,
        element: ElementId,
        anchor: ElementId,
        dir: Direction,
        gap: f64,
    ) -> StepsceneResult<()> {
        let anchor_at = self.live_record(anchor)?.at;
        self.live_record(element)?;

        let at = anchor_at + dir.unit() * gap;

        // Placement happens between creation and presentation; once the
        // create op has been played the element's position is fixed.
        let mut repositioned = false;
        for op in self.pending.iter_mut().rev() {
            match op {
                SceneOp::CreateShape { id, at: op_at, .. }
                | SceneOp::CreateLabel { id, at: op_at, .. }
                    if *id == element =>
                {
                    *op_at = at;
                    repositioned = true;
                    break;
                }
                _ => {}
            }
        }
        if !repositioned {
            return Err(StepsceneError::precondition(format!(
                "element id {} was already presented and cannot be repositioned",
                element.0
            )));
        }

        self.elements[element.0 as usize].at = at;
        Ok(())
    }

    fn create_outline(
        &mut self,
        around: &[ElementId],
        style: OutlineStyle,
    ) -> StepsceneResult<ElementId> {
        if around.is_empty() {
            return Err(StepsceneError::precondition(
                "outline requires at least one target element",
            ));
        }
        for &target in around {
            self.live_record(target)?;
        }

        // Outline position = centroid of its targets.
        let mut cx = 0.0;
        let mut cy = 0.0;
        for &target in around {
            let at = self.elements[target.0 as usize].at;
            cx += at.x;
            cy += at.y;
        }
        let n = around.len() as f64;
        let at = Point::new(cx / n, cy / n);

        let id = self.register(ElementKind::Outline(style), at);
        self.pending.push(SceneOp::Outline {
            id,
            around: around.to_vec(),
            style,
        });
        tracing::trace!(outline = id.0, targets = around.len(), ?style, "outline");
        Ok(id)
    }

    fn animate_transition(&mut self, old: ElementId, new: ElementId) -> StepsceneResult<()> {
        if old == new {
            return Err(StepsceneError::precondition(
                "cannot morph an element into itself",
            ));
        }
        self.live_record(old)?;
        self.live_record(new)?;

        self.elements[old.0 as usize].alive = false;
        self.pending.push(SceneOp::Morph { old, new });
        Ok(())
    }

    fn recolor(&mut self, target: ElementId, tint: Tint) -> StepsceneResult<()> {
        let rec = self.live_record(target)?;
        if !matches!(rec.kind, ElementKind::Shape(_)) {
            return Err(StepsceneError::precondition(format!(
                "recolor target id {} is not a shape",
                target.0
            )));
        }
        self.pending.push(SceneOp::Recolor { target, tint });
        Ok(())
    }

    fn fade_in(&mut self, target: ElementId) -> StepsceneResult<()> {
        self.live_record(target)?;
        self.pending.push(SceneOp::FadeIn { target });
        Ok(())
    }

    fn fade_out(&mut self, target: ElementId) -> StepsceneResult<()> {
        self.live_record(target)?;
        self.elements[target.0 as usize].alive = false;
        self.pending.push(SceneOp::FadeOut { target });
        Ok(())
    }

    fn position_of(&self, element: ElementId) -> StepsceneResult<Point> {
        Ok(self.record(element)?.at)
    }

    fn play(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let ops = std::mem::take(&mut self.pending);
        tracing::debug!(step = self.steps.len(), ops = ops.len(), "play");
        self.steps.push(Step { ops });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_position_play_records_one_step() {
        let mut stage = RecordingStage::new();
        let header = stage.create_label("Input:", Point::new(0.0, 0.0));
        let value = stage.create_label("3", Point::ORIGIN);
        stage
            .position_relative_to(value, header, Direction::Below, 0.5)
            .unwrap();
        stage.play();

        let script = stage.into_script();
        assert_eq!(script.steps.len(), 1);
        assert_eq!(script.steps[0].ops.len(), 2);
        assert_eq!(script.elements[value.0 as usize].at, Point::new(0.0, 0.5));
    }

    #[test]
    fn repositioning_a_presented_element_fails() {
        let mut stage = RecordingStage::new();
        let a = stage.create_label("a", Point::ORIGIN);
        let b = stage.create_label("b", Point::ORIGIN);
        stage.play();

        let err = stage
            .position_relative_to(b, a, Direction::RightOf, 1.0)
            .unwrap_err();
        assert!(err.to_string().contains("precondition"));
    }

    #[test]
    fn morph_supersedes_old_element() {
        let mut stage = RecordingStage::new();
        let old = stage.create_label("0", Point::ORIGIN);
        stage.play();
        let new = stage.create_label("1", Point::ORIGIN);
        stage.animate_transition(old, new).unwrap();
        stage.play();

        assert!(!stage.is_alive(old));
        assert!(stage.is_alive(new));
        assert!(stage.animate_transition(old, new).is_err());
    }

    #[test]
    fn outline_requires_live_targets() {
        let mut stage = RecordingStage::new();
        let a = stage.create_label("a", Point::ORIGIN);
        stage.play();
        stage.fade_out(a).unwrap();
        stage.play();

        assert!(stage.create_outline(&[a], OutlineStyle::Cursor).is_err());
        assert!(stage.create_outline(&[], OutlineStyle::Cursor).is_err());
    }

    #[test]
    fn outline_centroid_is_mean_of_targets() {
        let mut stage = RecordingStage::new();
        let a = stage.create_shape(ShapeKind::Square { side: 1.0 }, Point::new(0.0, 0.0));
        let b = stage.create_shape(ShapeKind::Square { side: 1.0 }, Point::new(2.0, 0.0));
        let outline = stage
            .create_outline(&[a, b], OutlineStyle::Window)
            .unwrap();
        stage.play();

        assert_eq!(
            stage.position_of(outline).unwrap(),
            Point::new(1.0, 0.0)
        );
    }

    #[test]
    fn empty_play_records_nothing() {
        let mut stage = RecordingStage::new();
        stage.play();
        stage.play();
        assert!(stage.into_script().is_empty());
    }
}
