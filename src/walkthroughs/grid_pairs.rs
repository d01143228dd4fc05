//! Equal row/column pairs: two frequency passes (rows, then columns), then
//! sum `rowFreq(t) · colFreq(t)` over shared tuples.

use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, ElementId, OutlineStyle, Point},
    foundation::error::{StepsceneError, StepsceneResult},
    scene::layout::{Cell, grid_of_cells},
    scene::stage::Stage,
    sync::binder::{Binder, HighlightSlot, ValueReadout},
};

const GRID_PITCH: f64 = 0.65;

fn validate_rectangular(grid: &[Vec<i64>]) -> StepsceneResult<()> {
    let Some(first) = grid.first() else {
        return Err(StepsceneError::validation("grid must not be empty"));
    };
    if first.is_empty() {
        return Err(StepsceneError::validation("grid rows must not be empty"));
    }
    if grid.iter().any(|row| row.len() != first.len()) {
        return Err(StepsceneError::validation("grid rows must have equal length"));
    }
    Ok(())
}

/// Number of (row, column) pairs whose value tuples are equal.
/// `[[1,2,3],[2,2,2],[1,2,3]]` → 3. Symmetric under transposition.
pub fn equal_pairs(grid: &[Vec<i64>]) -> StepsceneResult<u64> {
    validate_rectangular(grid)?;

    let mut row_count: HashMap<Vec<i64>, u64> = HashMap::new();
    for row in grid {
        *row_count.entry(row.clone()).or_insert(0) += 1;
    }

    let mut col_count: HashMap<Vec<i64>, u64> = HashMap::new();
    for c in 0..grid[0].len() {
        let col: Vec<i64> = grid.iter().map(|row| row[c]).collect();
        *col_count.entry(col).or_insert(0) += 1;
    }

    Ok(row_count
        .iter()
        .map(|(key, rows)| rows * col_count.get(key).copied().unwrap_or(0))
        .sum())
}

fn tuple_label(key: &[i64], freq: u64) -> String {
    let joined = key
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({joined}): {freq}")
}

/// Narrated version of [`equal_pairs`]: the two frequency tables feed both
/// the result and the row/column count displays, and the summation phase
/// highlights each contributing row line, column line, and square group.
#[tracing::instrument(skip(stage))]
pub fn explain_equal_pairs(stage: &mut dyn Stage, grid: &[Vec<i64>]) -> StepsceneResult<u64> {
    validate_rectangular(grid)?;

    stage.create_label("Equal Pairs of Rows and Columns", Point::new(0.0, -3.2));
    stage.play();

    let cells = grid_of_cells(stage, grid, Point::new(-0.5, -2.0), GRID_PITCH)?;
    stage.play();

    let row_header = stage.create_label("row_count (row: freq)", Point::new(-6.5, -2.0));
    stage.play();

    let mut row_count: HashMap<Vec<i64>, u64> = HashMap::new();
    let mut row_keys_in_order: Vec<Vec<i64>> = Vec::new();
    let mut row_lines: Binder<Vec<i64>> = Binder::new();
    // last row of squares seen per tuple, used by the summation highlights
    let mut row_squares: HashMap<Vec<i64>, Vec<ElementId>> = HashMap::new();
    let mut cursor = HighlightSlot::new();

    for (r, row) in grid.iter().enumerate() {
        let shapes: Vec<ElementId> = cells[r].iter().map(|c: &Cell| c.shape).collect();
        cursor.replace(stage, &shapes, OutlineStyle::Cursor)?;
        stage.play();

        let key = row.clone();
        let freq = row_count.entry(key.clone()).or_insert(0);
        *freq += 1;
        let freq = *freq;
        if freq == 1 {
            row_keys_in_order.push(key.clone());
        }
        row_squares.insert(key.clone(), shapes);

        let anchor = row_lines.is_empty().then_some(row_header);
        row_lines.upsert(stage, key.clone(), &tuple_label(&key, freq), anchor)?;
        stage.play();
    }
    cursor.clear(stage)?;
    stage.play();

    let col_header = stage.create_label("col_count (col: freq)", Point::new(-6.5, 0.5));
    stage.play();

    let mut col_count: HashMap<Vec<i64>, u64> = HashMap::new();
    let mut col_lines: Binder<Vec<i64>> = Binder::new();
    let mut col_squares: HashMap<Vec<i64>, Vec<ElementId>> = HashMap::new();

    for c in 0..grid[0].len() {
        let shapes: Vec<ElementId> = cells.iter().map(|row| row[c].shape).collect();
        cursor.replace(stage, &shapes, OutlineStyle::Cursor)?;
        stage.play();

        let key: Vec<i64> = grid.iter().map(|row| row[c]).collect();
        let freq = col_count.entry(key.clone()).or_insert(0);
        *freq += 1;
        let freq = *freq;
        col_squares.insert(key.clone(), shapes);

        let anchor = col_lines.is_empty().then_some(col_header);
        col_lines.upsert(stage, key.clone(), &tuple_label(&key, freq), anchor)?;
        cursor.clear(stage)?;
        stage.play();
    }

    let sum_header = stage.create_label("Equal Row and Column Pairs:", Point::new(0.0, 1.2));
    stage.play();
    let mut readout = ValueReadout::anchored(stage, sum_header, Direction::RightOf, 2.2, "0")?;
    stage.play();

    let mut total = 0u64;
    for key in &row_keys_in_order {
        let rows = row_count[key];
        let Some(&cols) = col_count.get(key) else {
            continue;
        };
        let found = rows * cols;
        if found == 0 {
            continue;
        }

        let row_line_mark = row_lines.highlight(stage, std::slice::from_ref(key), OutlineStyle::Match)?;
        let col_line_mark = col_lines.highlight(stage, std::slice::from_ref(key), OutlineStyle::Match)?;
        let row_sq_mark = stage.create_outline(&row_squares[key], OutlineStyle::Match)?;
        let col_sq_mark = stage.create_outline(&col_squares[key], OutlineStyle::Match)?;
        stage.play();

        total += found;
        readout.set(stage, &total.to_string())?;
        stage.play();

        row_lines.clear(stage, row_line_mark)?;
        col_lines.clear(stage, col_line_mark)?;
        stage.fade_out(row_sq_mark)?;
        stage.fade_out(col_sq_mark)?;
        stage.play();
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::RecordingStage;

    fn worked_grid() -> Vec<Vec<i64>> {
        vec![vec![1, 2, 3], vec![2, 2, 2], vec![1, 2, 3]]
    }

    fn transpose(grid: &[Vec<i64>]) -> Vec<Vec<i64>> {
        (0..grid[0].len())
            .map(|c| grid.iter().map(|row| row[c]).collect())
            .collect()
    }

    #[test]
    fn worked_example() {
        assert_eq!(equal_pairs(&worked_grid()).unwrap(), 3);
    }

    #[test]
    fn symmetric_under_transposition() {
        let grid = vec![vec![3, 1, 2, 2], vec![1, 4, 4, 5], vec![2, 4, 2, 2], vec![2, 4, 2, 2]];
        assert_eq!(
            equal_pairs(&grid).unwrap(),
            equal_pairs(&transpose(&grid)).unwrap()
        );
        assert_eq!(equal_pairs(&grid).unwrap(), 3);
    }

    #[test]
    fn no_equal_pairs() {
        assert_eq!(equal_pairs(&[vec![1, 2], vec![3, 4]]).unwrap(), 0);
    }

    #[test]
    fn multiplicities_multiply() {
        // two equal rows x two equal cols of the same tuple
        let grid = vec![vec![1, 1], vec![1, 1]];
        assert_eq!(equal_pairs(&grid).unwrap(), 4);
    }

    #[test]
    fn ragged_or_empty_grid_is_rejected() {
        assert!(equal_pairs(&[]).is_err());
        assert!(equal_pairs(&[vec![]]).is_err());
        assert!(equal_pairs(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn explain_matches_reference() {
        let grid = worked_grid();
        let mut stage = RecordingStage::new();
        let result = explain_equal_pairs(&mut stage, &grid).unwrap();
        assert_eq!(result, equal_pairs(&grid).unwrap());

        let script = stage.into_script();
        let live_outlines = script
            .elements
            .iter()
            .filter(|e| e.alive && matches!(e.kind, crate::scene::ops::ElementKind::Outline(_)))
            .count();
        assert_eq!(live_outlines, 0);
    }
}
