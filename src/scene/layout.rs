use crate::{
    foundation::core::{ElementId, Point, Vec2},
    foundation::error::StepsceneResult,
    scene::ops::ShapeKind,
    scene::stage::Stage,
};

/// One labeled box: the square plus the text centered inside it.
///
/// Every walkthrough lays its input out as a row or grid of these.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub shape: ElementId,
    pub label: ElementId,
}

/// Horizontal pitch between cell centers given the default side length.
pub const CELL_PITCH: f64 = 1.1;
/// Default square side length in scene units.
pub const CELL_SIDE: f64 = 0.6;

/// Lay out `values` as a row of labeled squares starting at `origin`,
/// advancing right by `pitch` per cell. Cells fade in as a group on the
/// caller's next `play`.
pub fn row_of_cells<S: std::fmt::Display>(
    stage: &mut dyn Stage,
    values: &[S],
    origin: Point,
    pitch: f64,
) -> StepsceneResult<Vec<Cell>> {
    let mut cells = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        let at = origin + Vec2::new(i as f64 * pitch, 0.0);
        cells.push(make_cell(stage, &value.to_string(), at)?);
    }
    Ok(cells)
}

/// Lay out a rectangular grid of labeled squares, row-major from `origin`.
/// `cells[r][c]` addresses row `r`, column `c`.
pub fn grid_of_cells<S: std::fmt::Display>(
    stage: &mut dyn Stage,
    rows: &[Vec<S>],
    origin: Point,
    pitch: f64,
) -> StepsceneResult<Vec<Vec<Cell>>> {
    let mut cells = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let mut out = Vec::with_capacity(row.len());
        for (c, value) in row.iter().enumerate() {
            let at = origin + Vec2::new(c as f64 * pitch, r as f64 * pitch);
            out.push(make_cell(stage, &value.to_string(), at)?);
        }
        cells.push(out);
    }
    Ok(cells)
}

fn make_cell(stage: &mut dyn Stage, text: &str, at: Point) -> StepsceneResult<Cell> {
    let shape = stage.create_shape(ShapeKind::Square { side: CELL_SIDE }, at);
    let label = stage.create_label(text, at);
    stage.fade_in(shape)?;
    stage.fade_in(label)?;
    Ok(Cell { shape, label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::RecordingStage;

    #[test]
    fn row_positions_advance_by_pitch() {
        let mut stage = RecordingStage::new();
        let cells = row_of_cells(&mut stage, &[3, 4, 2], Point::ORIGIN, CELL_PITCH).unwrap();
        stage.play();

        assert_eq!(cells.len(), 3);
        let p0 = stage.position_of(cells[0].shape).unwrap();
        let p1 = stage.position_of(cells[1].shape).unwrap();
        assert_eq!(p1.x - p0.x, CELL_PITCH);
        // label sits on its square
        assert_eq!(
            stage.position_of(cells[1].label).unwrap(),
            stage.position_of(cells[1].shape).unwrap()
        );
    }

    #[test]
    fn grid_is_row_major() {
        let mut stage = RecordingStage::new();
        let grid = vec![vec![1, 2], vec![3, 4]];
        let cells = grid_of_cells(&mut stage, &grid, Point::ORIGIN, 0.65).unwrap();
        stage.play();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].len(), 2);
        let top_right = stage.position_of(cells[0][1].shape).unwrap();
        let bottom_left = stage.position_of(cells[1][0].shape).unwrap();
        assert_eq!(top_right, Point::new(0.65, 0.0));
        assert_eq!(bottom_left, Point::new(0.0, 0.65));
    }

    #[test]
    fn cells_fade_in_with_their_creation_step() {
        let mut stage = RecordingStage::new();
        let cells = row_of_cells(&mut stage, &['a', 'b'], Point::ORIGIN, 1.0).unwrap();
        stage.play();

        let script = stage.into_script();
        let fade_ins = script.steps[0]
            .ops
            .iter()
            .filter(|op| matches!(op, crate::scene::ops::SceneOp::FadeIn { .. }))
            .count();
        // one per square and one per label
        assert_eq!(fade_ins, 2 * cells.len());
    }
}
