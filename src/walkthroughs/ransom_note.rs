//! Ransom-note feasibility: count the magazine once, then scan the note and
//! decrement; infeasible the first time a needed letter's count is zero.

use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, ElementId, OutlineStyle, Point, Vec2},
    foundation::error::StepsceneResult,
    scene::layout::row_of_cells,
    scene::ops::ShapeKind,
    scene::stage::Stage,
    sync::binder::{Binder, HighlightSlot},
};

/// True iff `note` can be assembled from the letters of `magazine`, each
/// magazine letter used at most once. Infeasibility is an ordinary `false`.
pub fn can_construct(note: &str, magazine: &str) -> bool {
    if note.chars().count() > magazine.chars().count() {
        return false;
    }

    let mut remaining: HashMap<char, u32> = HashMap::new();
    for ch in magazine.chars() {
        *remaining.entry(ch).or_insert(0) += 1;
    }

    for ch in note.chars() {
        match remaining.get_mut(&ch) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

/// Narrated version of [`can_construct`]. A single remaining-count map is
/// authoritative: it decides the verdict and every displayed count morphs
/// from it, so the display can never drift from the logic.
#[tracing::instrument(skip(stage))]
pub fn explain_can_construct(
    stage: &mut dyn Stage,
    note: &str,
    magazine: &str,
) -> StepsceneResult<bool> {
    stage.create_label("Ransom Note", Point::new(0.0, -3.2));
    stage.play();

    stage.create_label("Ransom Note", Point::new(-6.0, -2.3));
    let note_chars: Vec<char> = note.chars().collect();
    let note_cells = row_of_cells(stage, &note_chars, Point::new(-3.5, -2.3), 0.7)?;
    stage.play();

    stage.create_label("Magazine (Letter: Count)", Point::new(-6.0, -0.8));
    stage.play();

    // one authoritative counter for logic and display alike
    let mut remaining: HashMap<char, u32> = HashMap::new();
    let mut first_seen: Vec<char> = Vec::new();
    for ch in magazine.chars() {
        let count = remaining.entry(ch).or_insert(0);
        if *count == 0 && !first_seen.contains(&ch) {
            first_seen.push(ch);
        }
        *count += 1;
    }

    // one box per distinct magazine letter, in first-appearance order:
    // the letter on top, its remaining count below, bound by letter
    let mut letter_boxes: HashMap<char, ElementId> = HashMap::new();
    let mut counts: Binder<char> = Binder::stacking(Direction::Below, 0.55);
    for (i, &ch) in first_seen.iter().enumerate() {
        let at = Point::new(-3.5, 0.2) + Vec2::new(i as f64 * 1.0, 0.0);
        let shape = stage.create_shape(ShapeKind::Square { side: 1.0 }, at);
        let letter = stage.create_label(&ch.to_string(), at + Vec2::new(0.0, -0.25));
        counts.upsert(stage, ch, &remaining[&ch].to_string(), Some(letter))?;
        letter_boxes.insert(ch, shape);
    }
    stage.play();

    let mut cursor = HighlightSlot::new();
    let mut magazine_mark = HighlightSlot::new();
    let mut feasible = true;

    for (i, &ch) in note_chars.iter().enumerate() {
        cursor.replace(stage, &[note_cells[i].shape], OutlineStyle::Cursor)?;
        stage.play();

        let available = remaining.get(&ch).copied().unwrap_or(0);
        if available == 0 {
            let fail_mark = stage.create_outline(&[note_cells[i].label], OutlineStyle::Failure)?;
            stage.play();
            stage.fade_out(fail_mark)?;
            stage.play();
            feasible = false;
            break;
        }

        remaining.insert(ch, available - 1);
        magazine_mark.replace(stage, &[letter_boxes[&ch]], OutlineStyle::Match)?;
        counts.upsert(stage, ch, &(available - 1).to_string(), None)?;
        stage.play();
        magazine_mark.clear(stage)?;
        stage.play();
    }

    cursor.clear(stage)?;

    let verdict = if feasible {
        "True: Can Construct"
    } else {
        "False: Cannot Construct"
    };
    stage.create_label(verdict, Point::new(0.0, 2.6));
    stage.play();

    Ok(feasible)
}
