//! Application state

use tourbus_core::cafe::{items_in, Category, MenuItem};
use tourbus_core::Destination;

/// Longest accepted text input, in characters
pub const MAX_INPUT_LEN: usize = 128;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Splash/welcome screen
    #[default]
    Splash,

    /// Shortcut cards for the current role
    Home,

    /// Staff login form
    Login,

    /// Role-specific online help
    Help,

    /// Passenger cafe, open to every role
    Cafe,

    /// One of the staff dashboards
    Dashboard(Destination),
}

/// Login form field with focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn toggled(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Login form buffers
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Message from the last failed attempt
    pub error: Option<String>,
}

impl LoginForm {
    /// Type into the focused field; `false` once it is full
    pub fn push(&mut self, c: char) -> bool {
        push_limited(self.focused_mut(), c)
    }

    /// Focused field has reached [`MAX_INPUT_LEN`]
    pub fn is_full(&self) -> bool {
        let field = match self.focus {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        };
        field.chars().count() >= MAX_INPUT_LEN
    }

    pub fn pop(&mut self) {
        self.focused_mut().pop();
    }

    /// Password as shown on screen
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Append `c` unless `field` already holds [`MAX_INPUT_LEN`] characters
pub(crate) fn push_limited(field: &mut String, c: char) -> bool {
    if field.chars().count() >= MAX_INPUT_LEN {
        return false;
    }
    field.push(c);
    true
}

/// Checkout form field with focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CafeField {
    #[default]
    Name,
    Seat,
    Notes,
    Payment,
}

impl CafeField {
    pub fn next(self) -> Self {
        match self {
            CafeField::Name => CafeField::Seat,
            CafeField::Seat => CafeField::Notes,
            CafeField::Notes => CafeField::Payment,
            CafeField::Payment => CafeField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CafeField::Name => CafeField::Payment,
            CafeField::Seat => CafeField::Name,
            CafeField::Notes => CafeField::Seat,
            CafeField::Payment => CafeField::Notes,
        }
    }
}

/// Menu cursor and checkout focus on the cafe screen
#[derive(Debug, Clone, Default)]
pub struct CafeView {
    pub category_index: usize,
    pub item_index: usize,
    pub field: CafeField,
}

impl CafeView {
    pub fn category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    pub fn items(&self) -> Vec<&'static MenuItem> {
        items_in(self.category()).collect()
    }

    /// Menu item under the cursor
    pub fn selected(&self) -> Option<&'static MenuItem> {
        self.items().get(self.item_index).copied()
    }

    /// Move between category tabs, wrapping around
    pub fn shift_category(&mut self, forward: bool) {
        let len = Category::ALL.len();
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
        self.item_index = 0;
    }

    pub fn select_prev(&mut self) {
        self.item_index = self.item_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.item_index + 1 < self.items().len() {
            self.item_index += 1;
        }
    }
}

/// Application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Selected shortcut card on the home screen
    pub home_index: usize,

    pub login: LoginForm,

    pub cafe: CafeView,

    /// Scroll offset on the help screen and dashboards
    pub scroll: u16,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the home selection inside a list of `len` cards
    pub fn clamp_home_index(&mut self, len: usize) {
        self.home_index = self.home_index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_typing() {
        let mut form = LoginForm::default();
        for c in "driver".chars() {
            form.push(c);
        }
        form.focus = form.focus.toggled();
        for c in "pw".chars() {
            form.push(c);
        }
        form.pop();

        assert_eq!(form.username, "driver");
        assert_eq!(form.password, "p");
        assert_eq!(form.masked_password(), "•");
    }

    #[test]
    fn test_input_length_capped() {
        let mut form = LoginForm::default();
        for _ in 0..MAX_INPUT_LEN {
            assert!(form.push('ά'));
        }
        assert!(form.is_full());
        assert!(!form.push('ά'));
        assert_eq!(form.username.chars().count(), MAX_INPUT_LEN);

        form.focus = form.focus.toggled();
        assert!(!form.is_full());
        assert!(form.push('x'));
    }

    #[test]
    fn test_cafe_cursor_wraps_categories() {
        let mut view = CafeView::default();
        assert_eq!(view.category(), Category::Coffee);
        view.select_next();
        assert_eq!(view.item_index, 1);

        view.shift_category(false);
        assert_eq!(view.category(), Category::Snack);
        assert_eq!(view.item_index, 0);

        for _ in 0..20 {
            view.select_next();
        }
        assert_eq!(view.item_index, view.items().len() - 1);
        assert!(view.selected().is_some());

        view.shift_category(true);
        assert_eq!(view.category(), Category::Coffee);
    }

    #[test]
    fn test_cafe_field_cycle() {
        let mut field = CafeField::default();
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, CafeField::Name);
        assert_eq!(CafeField::Name.prev(), CafeField::Payment);
    }

    #[test]
    fn test_clamp_home_index() {
        let mut state = AppState::new();
        state.home_index = 4;
        state.clamp_home_index(2);
        assert_eq!(state.home_index, 1);
        state.clamp_home_index(0);
        assert_eq!(state.home_index, 0);
    }
}
