//! Navigation router for screen transitions

use super::state::Screen;

/// Route represents a navigation path
#[derive(Clone, Debug)]
pub struct Route {
    /// The screen to display
    pub screen: Screen,
    /// Title for breadcrumb
    pub title: &'static str,
}

/// Router manages navigation history
#[derive(Debug)]
pub struct Router {
    /// Navigation history stack
    history: Vec<Route>,
    /// Maximum history depth
    max_depth: usize,
}

impl Router {
    /// Create a new router
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            max_depth: 20,
        }
    }

    /// Push a new route onto the history
    pub fn push(&mut self, screen: Screen) {
        if self.history.len() >= self.max_depth {
            self.history.remove(0);
        }

        self.history.push(Route {
            screen,
            title: Self::screen_title(screen),
        });
    }

    /// Go back to the previous screen
    ///
    /// The root route is never popped.
    pub fn back(&mut self) -> Option<Screen> {
        if self.can_go_back() {
            self.history.pop();
        }
        self.history.last().map(|r| r.screen)
    }

    /// Get the current route
    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }

    /// Get the breadcrumb trail
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.history.iter().map(|r| r.title).collect()
    }

    /// Drop everything and start again from `screen`
    pub fn reset(&mut self, screen: Screen) {
        self.history.clear();
        self.push(screen);
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Every screen in the history, oldest first
    pub fn screens(&self) -> impl Iterator<Item = Screen> + '_ {
        self.history.iter().map(|r| r.screen)
    }

    /// Get title for a screen
    pub fn screen_title(screen: Screen) -> &'static str {
        match screen {
            Screen::Splash => "Smart Tourist Bus",
            Screen::Home => "Αρχική",
            Screen::Login => "Πρόσβαση Προσωπικού",
            Screen::Help => "Online Βοήθεια",
            Screen::Cafe => "Καφέ & Σνακ",
            Screen::Dashboard(destination) => destination.title(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbus_core::Destination;

    #[test]
    fn test_push_and_back() {
        let mut router = Router::new();
        router.push(Screen::Home);
        router.push(Screen::Dashboard(Destination::ClimateControl));
        router.push(Screen::Help);

        assert_eq!(
            router.breadcrumb(),
            vec!["Αρχική", "Έλεγχος Κλίματος", "Online Βοήθεια"]
        );
        assert_eq!(
            router.back(),
            Some(Screen::Dashboard(Destination::ClimateControl))
        );
        assert_eq!(router.back(), Some(Screen::Home));
        assert_eq!(router.back(), Some(Screen::Home));
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut router = Router::new();
        for _ in 0..50 {
            router.push(Screen::Help);
        }
        assert_eq!(router.depth(), 20);
    }

    #[test]
    fn test_reset() {
        let mut router = Router::new();
        router.push(Screen::Home);
        router.push(Screen::Login);
        router.reset(Screen::Home);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current().map(|r| r.screen), Some(Screen::Home));
    }

    #[test]
    fn test_screens_lists_whole_history() {
        let mut router = Router::new();
        router.push(Screen::Home);
        router.push(Screen::Dashboard(Destination::CrewControl));
        router.push(Screen::Help);

        let screens: Vec<_> = router.screens().collect();
        assert_eq!(
            screens,
            vec![
                Screen::Home,
                Screen::Dashboard(Destination::CrewControl),
                Screen::Help
            ]
        );
    }
}
