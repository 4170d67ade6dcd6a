//! Configuration for the structural comparator.

/// What to do when a comparison reaches a pair of objects that is already
/// being compared further up the same descent path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Assume the revisited pair is equal. Cyclic values compare by their
    /// infinite unfolding, and comparison always terminates.
    #[default]
    Coinductive,
    /// Fail with `ErrorKind::CycleDetected`.
    Reject,
}

/// Configuration for a [`Comparator`](crate::Comparator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    /// Maximum container nesting depth (`None` = unbounded).
    ///
    /// The roots are at depth 0; their direct children at depth 1.
    pub max_depth: Option<usize>,

    /// Handling of cyclic containers.
    pub cycle_policy: CyclePolicy,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl CompareConfig {
    /// Depth limit used by [`CompareConfig::strict`].
    pub const STRICT_MAX_DEPTH: usize = 1024;

    /// Coinductive cycles, no depth limit. This is the default.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_depth: None,
            cycle_policy: CyclePolicy::Coinductive,
        }
    }

    /// Rejects cycles and limits nesting to [`Self::STRICT_MAX_DEPTH`].
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_depth: Some(Self::STRICT_MAX_DEPTH),
            cycle_policy: CyclePolicy::Reject,
        }
    }

    /// Builder method to set the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method to set the cycle policy.
    #[must_use]
    pub const fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }
}
