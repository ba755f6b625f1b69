// SPDX-License-Identifier: MPL-2.0
//! Preview navigation state machine.
//!
//! The lightbox is either closed or open on an index of the current filtered
//! view. `PreviewNavigator` owns that state and is the only place where the
//! wrap-around arithmetic happens. Every transition takes the current view
//! length `n` so an index can never outlive the view it points into.

/// Which document, if any, is enlarged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Closed,
    /// Index into the current filtered view.
    Open(usize),
}

/// User intents that drive the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    Next,
    Previous,
    Close,
}

/// Tracks the previewed index and applies cyclic navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewNavigator {
    state: PreviewState,
}

impl PreviewNavigator {
    /// Creates a closed navigator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// Returns the previewed index, if open.
    pub fn current(&self) -> Option<usize> {
        match self.state {
            PreviewState::Open(index) => Some(index),
            PreviewState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PreviewState::Open(_))
    }

    /// Whether Escape/ArrowLeft/ArrowRight must be intercepted.
    ///
    /// The keyboard listener exists only while this returns `true`.
    pub fn listens_for_keys(&self) -> bool {
        self.is_open()
    }

    /// Opens the preview on `index` of a view of length `n`.
    ///
    /// An empty view keeps the preview closed; an index past the end is
    /// clamped to the last item.
    pub fn open(&mut self, index: usize, n: usize) -> PreviewState {
        self.state = if n == 0 {
            PreviewState::Closed
        } else {
            PreviewState::Open(index.min(n - 1))
        };
        self.state
    }

    /// Moves to the next item, wrapping from the last to the first.
    pub fn next(&mut self, n: usize) -> PreviewState {
        self.step(n, |index, n| (index + 1) % n)
    }

    /// Moves to the previous item, wrapping from the first to the last.
    pub fn previous(&mut self, n: usize) -> PreviewState {
        self.step(n, |index, n| (index + n - 1) % n)
    }

    fn step(&mut self, n: usize, advance: impl Fn(usize, usize) -> usize) -> PreviewState {
        self.state = match self.state {
            PreviewState::Closed => PreviewState::Closed,
            // No modulo on an empty view: there is nothing left to show.
            PreviewState::Open(_) if n == 0 => PreviewState::Closed,
            PreviewState::Open(index) => PreviewState::Open(advance(index.min(n - 1), n)),
        };
        self.state
    }

    /// Dismisses the preview.
    pub fn close(&mut self) -> PreviewState {
        self.state = PreviewState::Closed;
        self.state
    }

    /// Applies a user action against a view of length `n`.
    pub fn apply(&mut self, action: PreviewAction, n: usize) -> PreviewState {
        match action {
            PreviewAction::Next => self.next(n),
            PreviewAction::Previous => self.previous(n),
            PreviewAction::Close => self.close(),
        }
    }

    /// Re-checks the open index after the view changed to length `n`.
    ///
    /// Closes on an empty view and clamps an index past the end.
    pub fn revalidate(&mut self, n: usize) -> PreviewState {
        if let PreviewState::Open(index) = self.state {
            self.open(index, n);
        }
        self.state
    }

    /// Moves an open preview to `index` after the view changed to length `n`.
    ///
    /// Used when the previewed document is still visible at a new index.
    pub fn retarget(&mut self, index: usize, n: usize) -> PreviewState {
        if self.is_open() {
            self.open(index, n);
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_navigator_is_closed() {
        let nav = PreviewNavigator::new();
        assert_eq!(nav.state(), PreviewState::Closed);
        assert_eq!(nav.current(), None);
        assert!(!nav.listens_for_keys());
    }

    #[test]
    fn open_selects_index_and_listens() {
        let mut nav = PreviewNavigator::new();
        assert_eq!(nav.open(1, 3), PreviewState::Open(1));
        assert!(nav.listens_for_keys());
    }

    #[test]
    fn open_on_empty_view_stays_closed() {
        let mut nav = PreviewNavigator::new();
        assert_eq!(nav.open(0, 0), PreviewState::Closed);
        assert!(!nav.listens_for_keys());
    }

    #[test]
    fn open_past_end_clamps_to_last() {
        let mut nav = PreviewNavigator::new();
        assert_eq!(nav.open(7, 3), PreviewState::Open(2));
    }

    #[test]
    fn next_twice_then_wraps_to_first() {
        let mut nav = PreviewNavigator::new();
        nav.open(0, 3);
        nav.next(3);
        assert_eq!(nav.next(3), PreviewState::Open(2));
        assert_eq!(nav.next(3), PreviewState::Open(0));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut nav = PreviewNavigator::new();
        nav.open(0, 4);
        assert_eq!(nav.previous(4), PreviewState::Open(3));
    }

    #[test]
    fn n_steps_return_to_start_in_both_directions() {
        for n in 1..=6 {
            for start in 0..n {
                let mut nav = PreviewNavigator::new();
                nav.open(start, n);
                for _ in 0..n {
                    nav.next(n);
                }
                assert_eq!(nav.current(), Some(start), "next n={n} start={start}");
                for _ in 0..n {
                    nav.previous(n);
                }
                assert_eq!(nav.current(), Some(start), "previous n={n} start={start}");
            }
        }
    }

    #[test]
    fn single_item_view_stays_on_it() {
        let mut nav = PreviewNavigator::new();
        nav.open(0, 1);
        assert_eq!(nav.next(1), PreviewState::Open(0));
        assert_eq!(nav.previous(1), PreviewState::Open(0));
    }

    #[test]
    fn navigation_on_empty_view_closes() {
        let mut nav = PreviewNavigator::new();
        nav.open(1, 2);
        assert_eq!(nav.next(0), PreviewState::Closed);

        nav.open(1, 2);
        assert_eq!(nav.previous(0), PreviewState::Closed);
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut nav = PreviewNavigator::new();
        assert_eq!(nav.next(3), PreviewState::Closed);
        assert_eq!(nav.previous(3), PreviewState::Closed);
    }

    #[test]
    fn close_stops_listening() {
        let mut nav = PreviewNavigator::new();
        nav.open(0, 2);
        assert_eq!(nav.apply(PreviewAction::Close, 2), PreviewState::Closed);
        assert!(!nav.listens_for_keys());
    }

    #[test]
    fn revalidate_closes_when_view_empties() {
        let mut nav = PreviewNavigator::new();
        nav.open(1, 4);
        assert_eq!(nav.revalidate(0), PreviewState::Closed);
    }

    #[test]
    fn revalidate_clamps_when_view_shrinks() {
        let mut nav = PreviewNavigator::new();
        nav.open(3, 4);
        assert_eq!(nav.revalidate(2), PreviewState::Open(1));
        assert_eq!(nav.revalidate(2), PreviewState::Open(1));
    }

    #[test]
    fn revalidate_does_not_open_closed_preview() {
        let mut nav = PreviewNavigator::new();
        assert_eq!(nav.revalidate(5), PreviewState::Closed);
    }

    #[test]
    fn retarget_only_moves_open_preview() {
        let mut nav = PreviewNavigator::new();
        assert_eq!(nav.retarget(1, 3), PreviewState::Closed);
        nav.open(0, 3);
        assert_eq!(nav.retarget(2, 3), PreviewState::Open(2));
    }

    #[test]
    fn stale_index_is_clamped_before_stepping() {
        let mut nav = PreviewNavigator::new();
        nav.open(4, 5);
        // View shrank to 2 without a revalidate: next still stays in range.
        assert_eq!(nav.next(2), PreviewState::Open(0));
    }
}
