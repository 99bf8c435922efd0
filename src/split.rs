//! Resizable split panel state.
//!
//! A split panel arranges two children side by side with a draggable divider.
//! The left share is a percentage clamped to [`SplitState::MIN_LEFT`],
//! [`SplitState::MAX_LEFT`]; the right share is always derived as
//! `100 - left`, so the two shares sum to 100 by construction.
//!
//! Dragging is a two-state machine (idle / dragging). While a drag is active,
//! pointer tracking is surface-wide: the owning tab holds a [`PointerCapture`]
//! slot and routes every move/up event to the captured panel, so the drag
//! survives the pointer leaving the divider cell. The capture is released on
//! pointer-up and dies with the tab on teardown, so no stale routing can
//! outlive the panel.

/// Relative widths of the two sides of a split panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitState {
    left: f64,
}

impl SplitState {
    /// Smallest allowed left share, in percent.
    pub const MIN_LEFT: f64 = 20.0;
    /// Largest allowed left share, in percent.
    pub const MAX_LEFT: f64 = 80.0;

    /// Creates an even 50/50 split.
    #[must_use]
    pub fn even() -> Self {
        Self { left: 50.0 }
    }

    /// Left share in percent, always within [20, 80].
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right share in percent; `left() + right() == 100` always holds.
    #[must_use]
    pub fn right(&self) -> f64 {
        100.0 - self.left
    }

    /// Sets the left share, clamping to the allowed range.
    pub fn set_left(&mut self, percent: f64) {
        self.left = percent.clamp(Self::MIN_LEFT, Self::MAX_LEFT);
    }
}

impl Default for SplitState {
    fn default() -> Self {
        Self::even()
    }
}

/// Coordinates recorded when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer column at drag start.
    start_col: u16,
    /// Left share at drag start, in percent.
    start_left: f64,
}

/// A split panel: split widths plus the drag state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPanel {
    split: SplitState,
    drag: Option<DragSession>,
}

impl SplitPanel {
    /// Creates a panel at the initial 50/50 split, idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            split: SplitState::even(),
            drag: None,
        }
    }

    /// Current split widths.
    #[must_use]
    pub fn split(&self) -> SplitState {
        self.split
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Transition idle -> dragging: records the starting column and shares.
    pub fn begin_drag(&mut self, col: u16) {
        self.drag = Some(DragSession {
            start_col: col,
            start_left: self.split.left(),
        });
    }

    /// Applies a pointer move while dragging.
    ///
    /// Converts the column displacement since drag start into a percentage of
    /// the measured container width, adds it to the starting left share, and
    /// clamps. Does nothing when idle or when the container has no width.
    pub fn drag_to(&mut self, col: u16, container_width: u16) {
        let Some(session) = self.drag else {
            return;
        };
        if container_width == 0 {
            return;
        }

        let delta = f64::from(col) - f64::from(session.start_col);
        let new_left = session.start_left + (delta / f64::from(container_width)) * 100.0;
        self.split.set_left(new_left);
    }

    /// Transition dragging -> idle.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

impl Default for SplitPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer-capture slot owned by a panel group.
///
/// At most one panel may hold the capture. While held, the owner routes every
/// surface-wide move/up event to the captured panel; releasing (explicitly or
/// by dropping the group) ends the routing. This replaces ad-hoc global
/// listener registration with an owned acquire/release pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerCapture {
    owner: Option<usize>,
}

impl PointerCapture {
    /// Creates an empty capture slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the capture for panel `index`, replacing any previous owner.
    pub fn acquire(&mut self, index: usize) {
        self.owner = Some(index);
    }

    /// Releases the capture, returning the previous owner if any.
    pub fn release(&mut self) -> Option<usize> {
        self.owner.take()
    }

    /// Index of the panel currently holding the capture.
    #[must_use]
    pub fn owner(&self) -> Option<usize> {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_split_is_even() {
        let panel = SplitPanel::new();

        assert_eq!(panel.split().left(), 50.0);
        assert_eq!(panel.split().right(), 50.0);
        assert!(!panel.is_dragging());
    }

    #[test]
    fn test_shares_always_sum_to_100() {
        let mut split = SplitState::even();

        for pct in [-50.0, 0.0, 19.9, 20.0, 42.0, 80.0, 80.1, 500.0] {
            split.set_left(pct);
            assert!((split.left() + split.right() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_set_left_clamps_to_bounds() {
        let mut split = SplitState::even();

        split.set_left(5.0);
        assert_eq!(split.left(), SplitState::MIN_LEFT);

        split.set_left(95.0);
        assert_eq!(split.left(), SplitState::MAX_LEFT);
    }

    #[test]
    fn test_drag_moves_split_by_container_fraction() {
        let mut panel = SplitPanel::new();

        panel.begin_drag(100);
        // +10 columns in a 100-wide container is +10 percent.
        panel.drag_to(110, 100);

        assert!((panel.split().left() - 60.0).abs() < 1e-9);
        assert!((panel.split().right() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_width_drag_clamps_to_80_20() {
        // Drag from 50 moving +1000 columns in a 1000-wide container.
        let mut panel = SplitPanel::new();

        panel.begin_drag(0);
        panel.drag_to(1000, 1000);

        assert_eq!(panel.split().left(), 80.0);
        assert_eq!(panel.split().right(), 20.0);
    }

    #[test]
    fn test_drag_left_clamps_to_20_80() {
        let mut panel = SplitPanel::new();

        panel.begin_drag(1000);
        panel.drag_to(0, 1000);

        assert_eq!(panel.split().left(), 20.0);
        assert_eq!(panel.split().right(), 80.0);
    }

    #[test]
    fn test_moves_after_end_drag_change_nothing() {
        let mut panel = SplitPanel::new();

        panel.begin_drag(50);
        panel.drag_to(60, 100);
        let settled = panel.split();

        panel.end_drag();
        panel.drag_to(90, 100);

        assert_eq!(panel.split(), settled);
        assert!(!panel.is_dragging());
    }

    #[test]
    fn test_moves_while_idle_change_nothing() {
        let mut panel = SplitPanel::new();
        panel.drag_to(75, 100);
        assert_eq!(panel.split().left(), 50.0);
    }

    #[test]
    fn test_zero_width_container_ignored() {
        let mut panel = SplitPanel::new();

        panel.begin_drag(10);
        panel.drag_to(40, 0);

        assert_eq!(panel.split().left(), 50.0);
    }

    #[test]
    fn test_displacement_is_relative_to_drag_start() {
        let mut panel = SplitPanel::new();

        panel.begin_drag(40);
        panel.drag_to(50, 100); // +10%
        panel.drag_to(45, 100); // +5% from start, not cumulative

        assert!((panel.split().left() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_capture_acquire_release() {
        let mut capture = PointerCapture::new();
        assert_eq!(capture.owner(), None);

        capture.acquire(2);
        assert_eq!(capture.owner(), Some(2));

        assert_eq!(capture.release(), Some(2));
        assert_eq!(capture.owner(), None);
        assert_eq!(capture.release(), None);
    }

    proptest! {
        /// After every move in any drag sequence, the shares sum to 100 and
        /// the left share stays within [20, 80].
        #[test]
        fn prop_drag_sequences_hold_invariants(
            start_col in 0u16..500,
            width in 1u16..500,
            moves in prop::collection::vec(0u16..500, 0..32),
        ) {
            let mut panel = SplitPanel::new();
            panel.begin_drag(start_col);

            for col in moves {
                panel.drag_to(col, width);

                let split = panel.split();
                prop_assert!((split.left() + split.right() - 100.0).abs() < 1e-9);
                prop_assert!(split.left() >= SplitState::MIN_LEFT - 1e-9);
                prop_assert!(split.left() <= SplitState::MAX_LEFT + 1e-9);
            }
        }

        /// Pointer-up freezes the split: later moves never mutate it.
        #[test]
        fn prop_moves_after_up_are_inert(
            moves in prop::collection::vec(0u16..500, 1..16),
            late_moves in prop::collection::vec(0u16..500, 1..16),
        ) {
            let mut panel = SplitPanel::new();
            panel.begin_drag(250);

            for col in moves {
                panel.drag_to(col, 400);
            }
            panel.end_drag();
            let settled = panel.split();

            for col in late_moves {
                panel.drag_to(col, 400);
                prop_assert_eq!(panel.split(), settled);
            }
        }
    }
}
