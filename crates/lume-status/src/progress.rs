//! Geometry of the circular sync-progress ring.
//!
//! The ring is drawn as a dashed circle stroke rotated by -90 degrees, so progress grows
//! clockwise from twelve o'clock. The label drifts left as the number gains digits.

use crate::network::{ChainStatus, SyncState};

/// Dash length of the full ring.
pub const RING_CIRCUMFERENCE: f64 = 565.48;
/// Label x position at 0 %.
const LABEL_X_EMPTY: f64 = 44.0;
/// Label x position at 100 %.
const LABEL_X_FULL: f64 = 30.0;

/// Colour role of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Synced.
    Primary,
    /// Errored.
    Danger,
    /// Still syncing.
    Warning,
}

impl Tone {
    /// Tone for `state`.
    #[must_use]
    pub const fn for_state(state: SyncState) -> Self {
        match state {
            SyncState::Done => Self::Primary,
            SyncState::Error => Self::Danger,
            SyncState::Syncing => Self::Warning,
        }
    }

    /// Text colour class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "text-primary",
            Self::Danger => "text-error",
            Self::Warning => "text-warning",
        }
    }
}

/// Computed drawing parameters for one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRing {
    /// Progress in percent, clamped to 100.
    pub progress: u8,
    /// Stroke dash offset; 0 draws the full ring.
    pub dash_offset: f64,
    /// X position of the percentage label.
    pub label_x: f64,
    /// Colour role.
    pub tone: Tone,
}

impl ProgressRing {
    /// Compute the ring for `progress` percent in `state`.
    #[must_use]
    pub fn new(progress: u8, state: SyncState) -> Self {
        let progress = progress.min(100);
        let ratio = f64::from(progress) / 100.0;
        Self {
            progress,
            dash_offset: (1.0 - ratio) * RING_CIRCUMFERENCE,
            label_x: ratio.mul_add(LABEL_X_FULL - LABEL_X_EMPTY, LABEL_X_EMPTY),
            tone: Tone::for_state(state),
        }
    }

    /// Ring for one chain.
    #[must_use]
    pub fn for_chain(chain: &ChainStatus) -> Self {
        Self::new(chain.progress, chain.sync_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn half_progress_geometry() {
        let ring = ProgressRing::new(50, SyncState::Syncing);
        assert!(close(ring.dash_offset, 282.74));
        assert!(close(ring.label_x, 37.0));
        assert_eq!(ring.tone, Tone::Warning);
    }

    #[test]
    fn endpoints() {
        let empty = ProgressRing::new(0, SyncState::Error);
        assert!(close(empty.dash_offset, RING_CIRCUMFERENCE));
        assert!(close(empty.label_x, 44.0));
        assert_eq!(empty.tone.class(), "text-error");

        let full = ProgressRing::new(100, SyncState::Done);
        assert!(close(full.dash_offset, 0.0));
        assert!(close(full.label_x, 30.0));
        assert_eq!(full.tone, Tone::Primary);
    }

    #[test]
    fn overshoot_is_clamped() {
        assert_eq!(
            ProgressRing::new(250, SyncState::Done),
            ProgressRing::new(100, SyncState::Done)
        );
    }
}
