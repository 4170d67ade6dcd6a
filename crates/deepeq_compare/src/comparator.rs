//! The structural equality comparator.
//!
//! Two values are structurally equal when they are equal primitives of the
//! same kind, the same object, lists of equal length with equal elements at
//! each index, or objects with the same key set whose values under each key
//! are structurally equal.
//!
//! The walk is driven by an explicit work stack, so nesting depth is bounded
//! by memory rather than by the native call stack. Object pairs are tracked
//! by identity: a pair that was already compared is not walked again, and a
//! pair that is reached again while still open is a cycle, handled according
//! to [`CyclePolicy`].

use std::collections::HashSet;
use std::sync::Arc;

use deepeq_foundation::{Error, ErrorContext, LtVec, Object, ObjectId, Result, Value};
use tracing::{debug, trace};

use crate::config::{CompareConfig, CyclePolicy};
use crate::mismatch::{Mismatch, MismatchReason, PathSegment, render_path};

/// Decides whether two values are structurally equal.
///
/// A comparator holds only its configuration and keeps no state between
/// calls; it can be shared freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    /// Creates a comparator with the given configuration.
    #[must_use]
    pub const fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Returns true if `left` and `right` are structurally equal.
    ///
    /// # Errors
    ///
    /// Returns `TooDeep` if nesting exceeds `max_depth`, or `CycleDetected`
    /// if a cycle is found under [`CyclePolicy::Reject`].
    pub fn compare(&self, left: &Value, right: &Value) -> Result<bool> {
        Ok(self.explain(left, right)?.is_none())
    }

    /// Returns the first difference between `left` and `right`, or `None`
    /// if they are structurally equal.
    ///
    /// Object keys are visited in sorted order, so the reported mismatch is
    /// the same on every run.
    ///
    /// # Errors
    ///
    /// Same as [`Comparator::compare`].
    pub fn explain(&self, left: &Value, right: &Value) -> Result<Option<Mismatch>> {
        Walk::new(self.config).run(left, right)
    }
}

/// Returns true if `left` and `right` are structurally equal.
///
/// Uses the default configuration (coinductive cycles, no depth limit),
/// under which comparison cannot fail.
#[must_use]
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    matches!(Comparator::default().compare(left, right), Ok(true))
}

type PairKey = (ObjectId, ObjectId);

enum Task {
    Compare {
        left: Value,
        right: Value,
        depth: usize,
        path: Option<usize>,
    },
    Leave(PairKey),
}

struct Walk {
    config: CompareConfig,
    stack: Vec<Task>,
    // Path arena: each node is (parent, segment).
    paths: Vec<(Option<usize>, PathSegment)>,
    // Object pairs whose comparison has started.
    seen: HashSet<PairKey>,
    // Object pairs on the current descent path.
    open: HashSet<PairKey>,
}

impl Walk {
    fn new(config: CompareConfig) -> Self {
        Self {
            config,
            stack: Vec::new(),
            paths: Vec::new(),
            seen: HashSet::new(),
            open: HashSet::new(),
        }
    }

    fn run(mut self, left: &Value, right: &Value) -> Result<Option<Mismatch>> {
        self.stack.push(Task::Compare {
            left: left.clone(),
            right: right.clone(),
            depth: 0,
            path: None,
        });

        while let Some(task) = self.stack.pop() {
            let (left, right, depth, path) = match task {
                Task::Leave(pair) => {
                    self.open.remove(&pair);
                    continue;
                }
                Task::Compare {
                    left,
                    right,
                    depth,
                    path,
                } => (left, right, depth, path),
            };

            let outcome = match (&left, &right) {
                (Value::List(a), Value::List(b)) => self.open_lists(a, b, depth, path)?,
                (Value::Object(a), Value::Object(b)) => self.open_objects(a, b, depth, path)?,
                _ => match left.primitive_eq(&right) {
                    Some(false) if left.kind() == right.kind() => {
                        Some(MismatchReason::ValueMismatch)
                    }
                    Some(false) => Some(MismatchReason::KindMismatch {
                        left: left.kind(),
                        right: right.kind(),
                    }),
                    _ => None,
                },
            };

            if let Some(reason) = outcome {
                let mismatch = Mismatch::new(self.path(path), reason);
                trace!(path = %mismatch.path_string(), reason = %mismatch.reason, "values differ");
                return Ok(Some(mismatch));
            }
        }

        Ok(None)
    }

    fn open_lists(
        &mut self,
        left: &LtVec<Value>,
        right: &LtVec<Value>,
        depth: usize,
        path: Option<usize>,
    ) -> Result<Option<MismatchReason>> {
        if left.ptr_eq(right) {
            return Ok(None);
        }

        self.check_depth(depth, path)?;
        if left.len() != right.len() {
            return Ok(Some(MismatchReason::LengthMismatch {
                left: left.len(),
                right: right.len(),
            }));
        }

        // Reverse push so index 0 is compared first.
        let children: Vec<_> = left.iter().zip(right.iter()).enumerate().collect();
        for (index, (l, r)) in children.into_iter().rev() {
            let child = self.child_path(path, PathSegment::Index(index));
            self.stack.push(Task::Compare {
                left: l.clone(),
                right: r.clone(),
                depth: depth + 1,
                path: Some(child),
            });
        }
        Ok(None)
    }

    fn open_objects(
        &mut self,
        left: &Object,
        right: &Object,
        depth: usize,
        path: Option<usize>,
    ) -> Result<Option<MismatchReason>> {
        if left.ptr_eq(right) {
            return Ok(None);
        }

        let pair = (left.id(), right.id());
        if self.open.contains(&pair) {
            return match self.config.cycle_policy {
                CyclePolicy::Coinductive => {
                    debug!(path = %render_path(&self.path(path)), "cycle assumed equal");
                    Ok(None)
                }
                CyclePolicy::Reject => {
                    let rendered = render_path(&self.path(path));
                    debug!(path = %rendered, "cycle rejected");
                    Err(Error::cycle_detected(rendered.clone()).with_context(
                        ErrorContext::new().with_path(rendered).with_depth(depth),
                    ))
                }
            };
        }
        if !self.seen.insert(pair) {
            // Finished earlier without a mismatch.
            return Ok(None);
        }
        self.check_depth(depth, path)?;

        let left_fields = left.snapshot();
        let right_fields = right.snapshot();
        if left_fields.len() != right_fields.len() {
            return Ok(Some(MismatchReason::LengthMismatch {
                left: left_fields.len(),
                right: right_fields.len(),
            }));
        }

        let mut entries: Vec<(&Arc<str>, &Value)> = left_fields.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        // Every key is checked for membership before any value is compared.
        let mut children = Vec::with_capacity(entries.len());
        for (key, l) in entries {
            let Some(r) = right_fields.get(key) else {
                return Ok(Some(MismatchReason::MissingKey { key: key.clone() }));
            };
            children.push((key.clone(), l.clone(), r.clone()));
        }

        self.open.insert(pair);
        self.stack.push(Task::Leave(pair));
        for (key, l, r) in children.into_iter().rev() {
            let child = self.child_path(path, PathSegment::Key(key));
            self.stack.push(Task::Compare {
                left: l,
                right: r,
                depth: depth + 1,
                path: Some(child),
            });
        }
        Ok(None)
    }

    fn check_depth(&self, depth: usize, path: Option<usize>) -> Result<()> {
        match self.config.max_depth {
            Some(limit) if depth > limit => {
                let rendered = render_path(&self.path(path));
                debug!(path = %rendered, limit, "nesting too deep");
                Err(Error::too_deep(limit)
                    .with_context(ErrorContext::new().with_path(rendered).with_depth(depth)))
            }
            _ => Ok(()),
        }
    }

    fn child_path(&mut self, parent: Option<usize>, segment: PathSegment) -> usize {
        self.paths.push((parent, segment));
        self.paths.len() - 1
    }

    fn path(&self, mut node: Option<usize>) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        while let Some(index) = node {
            let (parent, segment) = &self.paths[index];
            segments.push(segment.clone());
            node = *parent;
        }
        segments.reverse();
        segments
    }
}
