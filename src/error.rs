//! Structured outcomes for network builds that produce no graph

use serde::Serialize;
use thiserror::Error;

/// A build that could not produce a graph. These are reportable outcomes
/// rather than faults: the caller decides the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BuildError {
    /// The entity column was missing or contained no usable tokens at all.
    /// The remedy is supplying different data, not tuning thresholds.
    #[error("input column contains no entity data")]
    InputAbsent,

    /// Tokens were present but no pair co-occurred often enough to form an
    /// edge. Distinct from [`BuildError::InputAbsent`] so the caller can
    /// suggest lowering the threshold instead of re-uploading.
    #[error("no co-occurrence reached the minimum weight of {min_weight}")]
    EmptyGraph { min_weight: u32 },
}
