//! Screen stack implementing the core's navigation seam.

use gatehouse_core::{Navigator, Route};

/// Screens the terminal client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Home,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => Self::Login,
            Route::Home => Self::Home,
        }
    }
}

/// Minimal screen stack; the router gate drives it through [`Navigator`].
#[derive(Debug)]
pub struct ScreenStack {
    stack: Vec<Screen>,
}

impl ScreenStack {
    pub fn new(initial: Screen) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Screen {
        *self.stack.last().expect("stack never empty")
    }

    /// Push a screen the user asked for (not gate-driven), e.g. signup.
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl Navigator for ScreenStack {
    fn go_to(&mut self, route: Route) {
        self.push(route.into());
    }

    fn replace_with(&mut self, route: Route) {
        // Gate redirects reset the stack; there is nothing sensible to go
        // back to across an auth boundary.
        self.stack.clear();
        self.stack.push(route.into());
    }

    fn go_back(&mut self) {
        self.pop();
    }
}
