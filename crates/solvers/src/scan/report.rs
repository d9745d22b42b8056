use rootscan_core::Function;

use super::Root;

/// Indicates whether the scan covered the whole range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Every cell in the range was visited.
    Completed,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root scan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Final scan status.
    pub status: Status,
    /// The scanned range, `[x_min, x_max]`.
    pub range: [f64; 2],
    /// Accepted roots, ordered left to right.
    pub roots: Vec<Root>,
    /// Summary line followed by one provenance line per root.
    pub log: Vec<String>,
}

impl Report {
    pub(super) fn new(status: Status, range: [f64; 2], roots: Vec<Root>) -> Self {
        let [x_min, x_max] = range;

        let mut log = Vec::with_capacity(roots.len() + 1);
        if roots.is_empty() {
            log.push("No roots found. Try adjusting search range.".to_owned());
        } else {
            log.push(format!(
                "Found {} root(s) in range [{x_min:?}, {x_max:?}]",
                roots.len()
            ));
        }
        log.extend(
            roots
                .iter()
                .enumerate()
                .map(|(i, root)| format!("Root {}: x = {:.8} | {root}", i + 1, root.x)),
        );

        Self {
            status,
            range,
            roots,
            log,
        }
    }

    /// Returns the root locations in discovery order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.roots.iter().map(|root| root.x).collect()
    }

    /// Returns the summary line of the log.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.log.first().map_or("", String::as_str)
    }

    /// Evaluates `function` at each root.
    ///
    /// Residuals close to zero confirm the roots; bisection that hit its
    /// iteration limit may leave a larger residual.
    ///
    /// # Errors
    ///
    /// Returns the function's error if it fails at any root.
    pub fn residuals<F: Function>(&self, function: &F) -> Result<Vec<f64>, F::Error> {
        self.roots.iter().map(|root| function.call(root.x)).collect()
    }
}
