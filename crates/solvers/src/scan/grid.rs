use super::Error;

/// One step of the scan grid, `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub lower: f64,
    pub upper: f64,
}

impl Cell {
    /// Returns the cell bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

/// Left-to-right walk over `[start, end]` in fixed steps.
///
/// Each cell starts where the previous one ended, and the last cell is
/// clipped to `end`. Positions accumulate by repeated addition, so they drift
/// from `start + k * step` the same way a hand-written loop would.
pub(super) struct Grid {
    current: f64,
    end: f64,
    step: f64,
}

impl Grid {
    pub(super) fn new(range: [f64; 2], step: f64) -> Self {
        let [start, end] = range;
        Self {
            current: start,
            end,
            step,
        }
    }
}

impl Iterator for Grid {
    type Item = Result<Cell, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }

        let lower = self.current;
        let upper = (lower + self.step).min(self.end);
        if upper <= lower {
            self.current = self.end;
            return Some(Err(Error::StepTooSmall { x: lower }));
        }

        self.current = upper;
        Some(Ok(Cell { lower, upper }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cells(range: [f64; 2], step: f64) -> Vec<Cell> {
        Grid::new(range, step)
            .collect::<Result<_, _>>()
            .expect("grid should advance")
    }

    #[test]
    fn cells_are_contiguous_and_clipped() {
        let cells = cells([0.0, 1.25], 0.5);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].as_array(), [0.0, 0.5]);
        assert_eq!(cells[1].as_array(), [0.5, 1.0]);
        assert_eq!(cells[2].as_array(), [1.0, 1.25]);
    }

    #[test]
    fn cell_count_is_ceiling_of_span_over_step() {
        let cells = cells([-10.0, 10.0], 0.5);
        assert_eq!(cells.len(), 40);
        assert_relative_eq!(cells[39].upper, 10.0);
    }

    #[test]
    fn empty_or_reversed_range_has_no_cells() {
        assert!(cells([1.0, 1.0], 0.1).is_empty());
        assert!(cells([2.0, 1.0], 0.1).is_empty());
    }

    #[test]
    fn errors_when_step_vanishes() {
        let mut grid = Grid::new([1e16, 1e16 + 10.0], 0.5);

        assert!(matches!(grid.next(), Some(Err(Error::StepTooSmall { .. }))));
        assert!(grid.next().is_none());
    }
}
