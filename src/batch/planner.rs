// planner.rs - splits inputs into capacity-bounded batches

use super::InputItem;
use crate::error::BatchError;
use std::num::NonZeroUsize;

/// Maximum number of input items per batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Bounded(NonZeroUsize),
    /// Every input lands in a single batch
    Unbounded,
}

impl Capacity {
    /// Validate a configured capacity. Zero and negative values are rejected.
    pub fn bounded(n: i64) -> Result<Self, BatchError> {
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Capacity::Bounded)
            .ok_or(BatchError::InvalidCapacity(n))
    }

    /// Derive capacity from the tool's thread count, unless the caller
    /// asks for a single batch.
    pub fn from_threads(threads: i64, single_batch: bool) -> Result<Self, BatchError> {
        let capacity = Self::bounded(threads)?;
        if single_batch {
            return Ok(Capacity::Unbounded);
        }
        Ok(capacity)
    }

    /// The finite limit, or `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(n) => Some(n.get()),
            Capacity::Unbounded => None,
        }
    }
}

/// An ordered, non-empty group of inputs destined for one command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    items: &'a [InputItem],
}

impl<'a> Batch<'a> {
    pub fn items(&self) -> &'a [InputItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition `inputs` into batches of at most `capacity` items, preserving order.
///
/// Every batch is full except possibly the last. An empty input yields no batches.
pub fn plan(inputs: &[InputItem], capacity: Capacity) -> Vec<Batch<'_>> {
    if inputs.is_empty() {
        return vec![];
    }

    let batches: Vec<Batch<'_>> = match capacity {
        Capacity::Bounded(n) => inputs
            .chunks(n.get())
            .map(|items| Batch { items })
            .collect(),
        Capacity::Unbounded => vec![Batch { items: inputs }],
    };

    tracing::debug!(
        inputs = inputs.len(),
        batches = batches.len(),
        capacity = ?capacity.limit(),
        "planned batches"
    );

    batches
}
