use std::fmt;

use crate::bisection::{Solution, Status};

/// A root accepted by the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Root {
    /// Location of the root.
    pub x: f64,
    /// Bisection iterations spent refining the root.
    pub iters: usize,
    /// Why bisection stopped at this root.
    pub status: Status,
}

impl Root {
    /// Builds a root record from a bisection solution, if it reported a root.
    #[must_use]
    pub fn from_solution(solution: &Solution) -> Option<Self> {
        solution.root.map(|x| Self {
            x,
            iters: solution.iters,
            status: solution.status,
        })
    }
}

/// Renders the bisection stop reason for this root.
impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = Solution {
            status: self.status,
            root: Some(self.x),
            iters: self.iters,
        };
        fmt::Display::fmt(&solution, f)
    }
}

/// Accepted roots in discovery order.
///
/// No two members lie within `tol` of each other.
#[derive(Debug)]
pub(super) struct Roots {
    tol: f64,
    roots: Vec<Root>,
}

impl Roots {
    pub(super) fn new(tol: f64) -> Self {
        Self {
            tol,
            roots: Vec::new(),
        }
    }

    /// Returns the first accepted root within tolerance of `x`, if any.
    pub(super) fn duplicate_of(&self, x: f64) -> Option<f64> {
        self.roots
            .iter()
            .map(|root| root.x)
            .find(|existing| (x - existing).abs() < self.tol)
    }

    /// Appends a root that has already been checked with [`Self::duplicate_of`].
    pub(super) fn push(&mut self, root: Root) {
        debug_assert!(self.duplicate_of(root.x).is_none());
        self.roots.push(root);
    }

    pub(super) fn len(&self) -> usize {
        self.roots.len()
    }

    pub(super) fn into_vec(self) -> Vec<Root> {
        self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn root(x: f64) -> Root {
        Root {
            x,
            iters: 0,
            status: Status::Converged,
        }
    }

    #[test]
    fn detects_duplicates_within_tolerance() {
        let mut roots = Roots::new(0.5);
        roots.push(root(1.0));
        roots.push(root(3.0));

        assert_eq!(roots.duplicate_of(1.25), Some(1.0));
        assert_eq!(roots.duplicate_of(2.75), Some(3.0));
        // A distance of exactly `tol` is not a duplicate.
        assert_eq!(roots.duplicate_of(1.5), None);
        assert_eq!(roots.duplicate_of(2.0), None);
    }

    #[test]
    fn keeps_discovery_order() {
        let mut roots = Roots::new(1e-8);
        roots.push(root(0.5));
        roots.push(root(-0.5));

        assert_eq!(roots.len(), 2);
        let xs: Vec<f64> = roots.into_vec().iter().map(|root| root.x).collect();
        assert_relative_eq!(xs[0], 0.5);
        assert_relative_eq!(xs[1], -0.5);
    }

    #[test]
    fn from_solution_requires_a_root() {
        let converged = Solution {
            status: Status::Converged,
            root: Some(0.25),
            iters: 3,
        };
        let root = Root::from_solution(&converged).expect("root");
        assert_relative_eq!(root.x, 0.25);
        assert_eq!(root.to_string(), "Converged after 3 iterations");

        let none = Solution {
            status: Status::NoSignChange,
            root: None,
            iters: 0,
        };
        assert!(Root::from_solution(&none).is_none());
    }
}
