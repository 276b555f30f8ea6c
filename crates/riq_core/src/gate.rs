//! Confidence gate
//!
//! Classifies the cross-source confidence percentage into a trust tier and
//! decides which downstream actions are permitted. The tier is a pure step
//! function of confidence; the sync permission is re-checked at every point
//! of use rather than trusted from caller state.

use serde::{Deserialize, Serialize};

/// Minimum confidence at which an evaluation may be synced anywhere.
pub const SYNC_CONFIDENCE_FLOOR: f32 = 60.0;

/// Trust tier for a confidence percentage. Ordered: each variant compares
/// below the ones after it.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum ConfidenceTier {
    Insufficient,
    Low,
    Limited,
    Trusted,
    FullTrust,
}

impl ConfidenceTier {
    /// Step function over confidence: closed lower bound, open upper bound,
    /// top tier closed at 100. Input is clamped into [0, 100].
    pub fn from_confidence(confidence: f32) -> Self {
        let c = confidence.clamp(0.0, 100.0);
        if c >= 90.0 {
            ConfidenceTier::FullTrust
        } else if c >= 80.0 {
            ConfidenceTier::Trusted
        } else if c >= 70.0 {
            ConfidenceTier::Limited
        } else if c >= 60.0 {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::Insufficient
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::Insufficient => "Insufficient Sample",
            ConfidenceTier::Low => "Low Confidence",
            ConfidenceTier::Limited => "Limited",
            ConfidenceTier::Trusted => "Trusted",
            ConfidenceTier::FullTrust => "Full Trust",
        }
    }

    /// Whether results at this tier may be synced to a roster or board.
    pub fn allows_sync(&self) -> bool {
        *self >= ConfidenceTier::Low
    }
}

/// Gate over downstream permissions.
pub struct ConfidenceGate;

impl ConfidenceGate {
    pub fn tier(confidence: f32) -> ConfidenceTier {
        ConfidenceTier::from_confidence(confidence)
    }

    /// Hard precondition for sync-to-roster and sync-to-board actions.
    /// Callers must invoke this at the point of use.
    pub fn allows_sync(confidence: f32) -> bool {
        confidence.clamp(0.0, 100.0) >= SYNC_CONFIDENCE_FLOOR
    }
}
