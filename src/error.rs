use thiserror::Error;

/// Failures surfaced by the neighbor classifiers and their collaborators.
///
/// Classifiers never return partial results: any of these aborts the call.
#[derive(Debug, Error)]
pub enum NeighborError {
    /// The query index does not address a point of the set.
    #[error("requested the neighbors of point {index} but the input only has {len} points")]
    OutOfRange { index: usize, len: usize },

    /// More candidates were requested than the set can provide.
    #[error("requested {requested} neighbors but only {available} candidate points are available")]
    InsufficientPoints { requested: usize, available: usize },

    /// Two points share identical coordinates.
    #[error("points {first} and {second} are coincident")]
    DegenerateGeometry { first: usize, second: usize },

    /// A point has a NaN or infinite coordinate, so no diagram can place it.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// The subdivision working region has no area (for example, all seeds collinear
    /// along an axis with no padding).
    #[error("subdivision region is degenerate ({width} x {height})")]
    EmptyRegion { width: f64, height: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// What a classifier does when it encounters coincident points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneracyPolicy {
    /// Accept the input and list the coincident pairs in the result.
    #[default]
    Report,
    /// Fail with [`NeighborError::DegenerateGeometry`].
    Reject,
}

/// A pair of coincident points, by index into the caller's point set (`first < second`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Degeneracy {
    pub first: usize,
    pub second: usize,
}

impl DegeneracyPolicy {
    /// Applies the policy to the coincident pairs found for one call.
    pub(crate) fn apply(self, found: Vec<Degeneracy>) -> Result<Vec<Degeneracy>, NeighborError> {
        if self == DegeneracyPolicy::Reject {
            if let Some(d) = found.first() {
                return Err(NeighborError::DegenerateGeometry { first: d.first, second: d.second });
            }
        }
        for d in &found {
            log::warn!("coincident points {} and {}", d.first, d.second);
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = NeighborError::OutOfRange { index: 5, len: 5 };
        assert_eq!(
            err.to_string(),
            "requested the neighbors of point 5 but the input only has 5 points"
        );
    }

    #[test]
    fn test_policy_reject() {
        let found = vec![Degeneracy { first: 1, second: 3 }];
        let err = DegeneracyPolicy::Reject.apply(found).unwrap_err();
        assert!(matches!(err, NeighborError::DegenerateGeometry { first: 1, second: 3 }));
    }

    #[test]
    fn test_policy_report() {
        let found = vec![Degeneracy { first: 0, second: 2 }];
        let kept = DegeneracyPolicy::Report.apply(found.clone()).unwrap();
        assert_eq!(kept, found);
        assert!(DegeneracyPolicy::Reject.apply(Vec::new()).unwrap().is_empty());
    }
}
