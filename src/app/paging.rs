//! Shared view-state for the carousels, step-by-step walkthroughs, and
//! expandable cards on the page.
//!
//! Every one of those widgets is the same shape underneath: an index into a
//! fixed sequence, moved by clicks or timers, rendered by projecting the
//! current index onto content. This module holds that shape once so the
//! components stay thin.

use thiserror::Error;

/// What happens when the cursor is pushed past either end of its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Wrap around mod N. Used by the rotating headline and photo carousels.
    Cyclic,
    /// Stop at the first/last element. Used by the paginated walkthroughs.
    Clamped,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// An index into a fixed-length ordered sequence.
///
/// The sequence itself lives with the owner; the cursor only knows its
/// length, which is fixed at construction. Whenever `len > 0` the index is
/// in `0..len`, for every call sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCursor {
    index: usize,
    len: usize,
    mode: StepMode,
}

impl SequenceCursor {
    pub fn cyclic(len: usize) -> Self {
        Self {
            index: 0,
            len,
            mode: StepMode::Cyclic,
        }
    }

    pub fn clamped(len: usize) -> Self {
        Self {
            index: 0,
            len,
            mode: StepMode::Clamped,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether navigation controls should be shown at all.
    pub fn has_nav(&self) -> bool {
        self.len > 1
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    /// 1-based position indicator, e.g. "3 / 91".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    /// Step forward. Wraps or clamps per mode; no-op when there is nothing
    /// to move to. Auto-advance timers call exactly this.
    pub fn next(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.index = match self.mode {
            StepMode::Cyclic => (self.index + 1) % self.len,
            StepMode::Clamped => (self.index + 1).min(self.len - 1),
        };
    }

    /// Step backward. Wraps or clamps per mode.
    pub fn previous(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.index = match self.mode {
            StepMode::Cyclic => (self.index + self.len - 1) % self.len,
            StepMode::Clamped => self.index.saturating_sub(1),
        };
    }

    /// Jump directly to `index`. Out-of-range requests are rejected and the
    /// cursor is left where it was; we never clamp a direct jump, so an
    /// indicator dot can only ever land on the item it points at.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CursorError> {
        if index >= self.len {
            return Err(CursorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Back to the first element. Called when a walkthrough is reopened for
    /// a new subject.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Expand/collapse state for cards that show a summary until clicked.
///
/// Starts collapsed and only resets by being recreated on remount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn open(&mut self) {
        self.expanded = true;
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }
}

/// Tabs inside an expanded project card. A closed set; selection of
/// anything outside it is rejected at the `from_key` boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    What,
    Problem,
    System,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::What, DetailTab::Problem, DetailTab::System];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::What => "What it is",
            DetailTab::Problem => "The problem",
            DetailTab::System => "The system",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DetailTab::What => "what",
            DetailTab::Problem => "problem",
            DetailTab::System => "system",
        }
    }

    pub fn from_key(key: &str) -> Option<DetailTab> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_after<F>(mut cursor: SequenceCursor, calls: usize, mut op: F) -> Vec<usize>
    where
        F: FnMut(&mut SequenceCursor),
    {
        let mut seen = Vec::with_capacity(calls);
        for _ in 0..calls {
            op(&mut cursor);
            seen.push(cursor.index());
        }
        seen
    }

    #[test]
    fn cyclic_next_wraps_to_zero() {
        let mut cursor = SequenceCursor::cyclic(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cyclic_previous_from_zero_wraps_to_last() {
        // 5 photos, viewer starts at 0; one step back shows the last photo
        let mut cursor = SequenceCursor::cyclic(5);
        cursor.previous();
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn cyclic_cursor_stays_in_range() {
        for n in 1..=7 {
            let seen = indices_after(SequenceCursor::cyclic(n), 3 * n + 2, |c| c.next());
            assert!(seen.iter().all(|&i| i < n), "n={n} produced {seen:?}");
            let seen = indices_after(SequenceCursor::cyclic(n), 3 * n + 2, |c| c.previous());
            assert!(seen.iter().all(|&i| i < n), "n={n} produced {seen:?}");
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 1..=8 {
            let mut cursor = SequenceCursor::cyclic(n);
            cursor.jump_to(n / 2).unwrap();
            let start = cursor.index();
            for _ in 0..n {
                cursor.next();
            }
            assert_eq!(cursor.index(), start, "n={n}");
        }
    }

    #[test]
    fn auto_advance_lands_on_modular_offset() {
        // k timer fires behave exactly like k next() calls
        let n = 6;
        for k in 0..20 {
            let mut cursor = SequenceCursor::cyclic(n);
            for _ in 0..k {
                cursor.next();
            }
            assert_eq!(cursor.index(), k % n);
        }
    }

    #[test]
    fn single_item_navigation_is_noop() {
        let mut cursor = SequenceCursor::cyclic(1);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.has_nav());
    }

    #[test]
    fn empty_sequence_navigation_is_noop() {
        let mut cursor = SequenceCursor::cyclic(0);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_empty());
        assert!(!cursor.has_nav());
    }

    #[test]
    fn nav_is_suppressed_below_two_items() {
        // carousels and the modal viewer hide their arrows on this predicate
        assert!(!SequenceCursor::cyclic(0).has_nav());
        assert!(!SequenceCursor::cyclic(1).has_nav());
        assert!(SequenceCursor::cyclic(2).has_nav());
        assert!(!SequenceCursor::clamped(1).has_nav());
    }

    #[test]
    fn clamped_advance_stops_at_last_page() {
        // 4-page walkthrough: five advances still end on page 3
        let mut cursor = SequenceCursor::clamped(4);
        for _ in 0..5 {
            cursor.next();
        }
        assert_eq!(cursor.index(), 3);
        assert!(cursor.at_end());
    }

    #[test]
    fn clamped_retreat_stops_at_first_page() {
        let mut cursor = SequenceCursor::clamped(4);
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.at_start());
        cursor.next();
        cursor.previous();
        cursor.previous();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn clamped_cursor_stays_in_range() {
        for n in 1..=6 {
            let seen = indices_after(SequenceCursor::clamped(n), 2 * n + 3, |c| c.next());
            assert!(seen.iter().all(|&i| i < n), "n={n} produced {seen:?}");
        }
    }

    #[test]
    fn jump_to_valid_index_sets_exactly() {
        let mut cursor = SequenceCursor::cyclic(5);
        cursor.jump_to(3).unwrap();
        assert_eq!(cursor.index(), 3);
        cursor.jump_to(0).unwrap();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn jump_to_out_of_range_is_rejected_and_cursor_unchanged() {
        let mut cursor = SequenceCursor::cyclic(5);
        cursor.jump_to(2).unwrap();
        let err = cursor.jump_to(5).unwrap_err();
        assert_eq!(err, CursorError::OutOfRange { index: 5, len: 5 });
        assert_eq!(cursor.index(), 2);

        let mut empty = SequenceCursor::clamped(0);
        assert!(empty.jump_to(0).is_err());
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn reset_returns_to_first_element() {
        let mut cursor = SequenceCursor::clamped(6);
        cursor.next();
        cursor.next();
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut cursor = SequenceCursor::cyclic(91);
        assert_eq!(cursor.position_label(), "1 / 91");
        cursor.jump_to(42).unwrap();
        assert_eq!(cursor.position_label(), "43 / 91");
    }

    #[test]
    fn disclosure_toggle_twice_round_trips() {
        let mut panel = Disclosure::default();
        assert!(!panel.is_expanded());
        panel.toggle();
        assert!(panel.is_expanded());
        panel.toggle();
        assert!(!panel.is_expanded());
    }

    #[test]
    fn disclosure_open_close_are_idempotent() {
        let mut panel = Disclosure::default();
        panel.open();
        panel.open();
        assert!(panel.is_expanded());
        panel.close();
        panel.close();
        assert!(!panel.is_expanded());
    }

    #[test]
    fn detail_tab_round_trips_through_keys() {
        for tab in DetailTab::ALL {
            assert_eq!(DetailTab::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn unknown_tab_key_is_rejected() {
        assert_eq!(DetailTab::from_key("impact"), None);
        assert_eq!(DetailTab::from_key(""), None);

        // active tab is unchanged when the caller falls back on rejection
        let active = DetailTab::Problem;
        let active = DetailTab::from_key("nope").unwrap_or(active);
        assert_eq!(active, DetailTab::Problem);
    }
}
