use super::RpmRange;

/// What to evaluate: one engine speed or a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationRequest {
    /// Velocity at a single engine speed, in RPM.
    Fixed(u32),

    /// Velocities across a range; `None` sweeps [`RpmRange::default`].
    Swept(Option<RpmRange>),
}

impl Default for EvaluationRequest {
    fn default() -> Self {
        Self::Swept(None)
    }
}

impl EvaluationRequest {
    /// Builds a request from an optional fixed speed and an optional range.
    ///
    /// A fixed speed takes precedence and the range is ignored.
    #[must_use]
    pub fn from_parts(fixed_rpm: Option<u32>, range: Option<RpmRange>) -> Self {
        match fixed_rpm {
            Some(rpm) => Self::Fixed(rpm),
            None => Self::Swept(range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rpm_wins_over_range() {
        let request = EvaluationRequest::from_parts(Some(4000), Some(RpmRange::new(2000, 3000)));
        assert_eq!(request, EvaluationRequest::Fixed(4000));
    }

    #[test]
    fn range_passes_through() {
        let range = RpmRange::new(2000, 3000);
        assert_eq!(
            EvaluationRequest::from_parts(None, Some(range)),
            EvaluationRequest::Swept(Some(range))
        );
        assert_eq!(
            EvaluationRequest::from_parts(None, None),
            EvaluationRequest::default()
        );
    }
}
