// Navigation state and its reducer
use super::page::Page;
use serde::Serialize;

/// Upper bound on remembered back-navigation steps.
pub const MAX_HISTORY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Sidebar radio, top tab, dropdown or shortcut button.
    Select(Page),
    Back,
    Home,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current: Page,
    #[serde(skip)]
    history: Vec<Page>,
}

impl NavigationState {
    pub fn new(current: Page) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Page] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Apply a navigation event. Pure: the previous state is consumed and a new
/// one is returned, nothing else is touched.
pub fn reduce(state: NavigationState, event: NavigationEvent) -> NavigationState {
    let NavigationState {
        current,
        mut history,
    } = state;

    let target = match event {
        NavigationEvent::Select(page) => page,
        NavigationEvent::Home => Page::default(),
        NavigationEvent::Back => {
            return match history.pop() {
                Some(previous) => NavigationState {
                    current: previous,
                    history,
                },
                None => NavigationState { current, history },
            };
        }
    };

    if target == current {
        return NavigationState { current, history };
    }

    history.push(current);
    if history.len() > MAX_HISTORY {
        history.remove(0);
    }

    NavigationState {
        current: target,
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_first_page() {
        assert_eq!(NavigationState::default().current, Page::ALL[0]);
    }

    #[test]
    fn test_select_any_page_makes_it_current() {
        for page in Page::ALL {
            let state = reduce(NavigationState::default(), NavigationEvent::Select(page));
            assert_eq!(state.current, page);
        }
    }

    #[test]
    fn test_reselecting_current_page_keeps_history() {
        let state = reduce(
            NavigationState::default(),
            NavigationEvent::Select(Page::Financial),
        );
        let state = reduce(state, NavigationEvent::Select(Page::Financial));
        assert_eq!(state.current, Page::Financial);
        assert_eq!(state.history(), &[Page::Activities]);
    }

    #[test]
    fn test_back_and_home() {
        let mut state = NavigationState::default();
        for page in [Page::Billing, Page::Sales, Page::Analytics] {
            state = reduce(state, NavigationEvent::Select(page));
        }
        let state = reduce(state, NavigationEvent::Back);
        assert_eq!(state.current, Page::Sales);

        let state = reduce(state, NavigationEvent::Home);
        assert_eq!(state.current, Page::Activities);
        let state = reduce(state, NavigationEvent::Back);
        assert_eq!(state.current, Page::Sales);
    }

    #[test]
    fn test_back_with_empty_history_is_noop() {
        let state = reduce(NavigationState::new(Page::Reports), NavigationEvent::Back);
        assert_eq!(state.current, Page::Reports);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut state = NavigationState::default();
        for i in 0..(MAX_HISTORY * 3) {
            state = reduce(state, NavigationEvent::Select(Page::ALL[i % Page::ALL.len()]));
        }
        assert_eq!(state.history().len(), MAX_HISTORY);
    }
}
