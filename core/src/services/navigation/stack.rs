//! Explicit navigation stack
//!
//! The stack always holds at least its root entry. Leaving a screen drops its
//! entry, which releases everything the screen owns (including timers).

use crate::errors::NavigationError;

use super::Screen;

/// Anything that can sit on the stack and name the screen it represents
pub trait Routable {
    fn screen(&self) -> Screen;
}

impl Routable for Screen {
    fn screen(&self) -> Screen {
        *self
    }
}

#[derive(Debug)]
pub struct NavigationStack<E: Routable = Screen> {
    entries: Vec<E>,
}

impl<E: Routable> NavigationStack<E> {
    pub fn new(root: E) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// Push `entry` if its screen is reachable from the current top
    pub fn push(&mut self, entry: E) -> Result<(), NavigationError> {
        let from = self.current_screen();
        let to = entry.screen();
        if !from.can_push(to) {
            return Err(NavigationError::InvalidTransition { from, to });
        }
        tracing::debug!(%from, %to, depth = self.entries.len() + 1, "Navigation push");
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the top entry; the root cannot be popped
    pub fn pop(&mut self) -> Result<E, NavigationError> {
        if self.entries.len() <= 1 {
            return Err(NavigationError::CannotPopRoot);
        }
        self.entries.pop().ok_or(NavigationError::CannotPopRoot)
    }

    /// Remove the top `n` entries, newest first in the returned vector
    pub fn pop_n(&mut self, n: usize) -> Result<Vec<E>, NavigationError> {
        if n >= self.entries.len() {
            return Err(NavigationError::CannotPopRoot);
        }
        let split = self.entries.len() - n;
        let mut removed = self.entries.split_off(split);
        removed.reverse();
        Ok(removed)
    }

    /// Pop until the nearest entry for `screen` is on top
    pub fn pop_to(&mut self, screen: Screen) -> Result<Vec<E>, NavigationError> {
        let position = self
            .entries
            .iter()
            .rposition(|entry| entry.screen() == screen)
            .ok_or(NavigationError::ScreenNotInStack { screen })?;
        let removed = self.pop_n(self.entries.len() - 1 - position)?;
        tracing::debug!(%screen, popped = removed.len(), "Navigation pop to screen");
        Ok(removed)
    }

    pub fn top(&self) -> &E {
        // Invariant: never empty
        &self.entries[self.entries.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut E {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn current_screen(&self) -> Screen {
        self.top().screen()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Nearest entry for `screen`, searching from the top
    pub fn find_mut(&mut self, screen: Screen) -> Option<&mut E> {
        self.entries
            .iter_mut()
            .rev()
            .find(|entry| entry.screen() == screen)
    }

    pub fn find(&self, screen: Screen) -> Option<&E> {
        self.entries.iter().rev().find(|entry| entry.screen() == screen)
    }

    /// Screens from root to top
    pub fn screens(&self) -> Vec<Screen> {
        self.entries.iter().map(Routable::screen).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_flow_stack() -> NavigationStack {
        let mut stack = NavigationStack::new(Screen::Login);
        stack.push(Screen::ForgotPassword).unwrap();
        stack.push(Screen::ChangePassword).unwrap();
        stack
    }

    #[test]
    fn test_push_follows_allowed_transitions() {
        let mut stack = NavigationStack::new(Screen::Login);
        stack.push(Screen::ProjectList).unwrap();
        stack.push(Screen::AddProject).unwrap();
        stack.push(Screen::MapSelection).unwrap();
        assert_eq!(
            stack.screens(),
            vec![
                Screen::Login,
                Screen::ProjectList,
                Screen::AddProject,
                Screen::MapSelection
            ]
        );
    }

    #[test]
    fn test_push_rejects_unknown_transition() {
        let mut stack = NavigationStack::new(Screen::Login);
        let err = stack.push(Screen::MapSelection).unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidTransition {
                from: Screen::Login,
                to: Screen::MapSelection
            }
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_never_removes_root() {
        let mut stack = NavigationStack::new(Screen::Login);
        assert_eq!(stack.pop().unwrap_err(), NavigationError::CannotPopRoot);

        stack.push(Screen::Register).unwrap();
        assert_eq!(stack.pop().unwrap(), Screen::Register);
        assert_eq!(stack.current_screen(), Screen::Login);
    }

    #[test]
    fn test_pop_n() {
        let mut stack = reset_flow_stack();
        assert_eq!(stack.pop_n(3).unwrap_err(), NavigationError::CannotPopRoot);

        let removed = stack.pop_n(2).unwrap();
        assert_eq!(removed, vec![Screen::ChangePassword, Screen::ForgotPassword]);
        assert_eq!(stack.current_screen(), Screen::Login);

        assert!(stack.pop_n(0).unwrap().is_empty());
    }

    #[test]
    fn test_pop_to_named_screen() {
        let mut stack = reset_flow_stack();
        stack.pop_to(Screen::Login).unwrap();
        assert_eq!(stack.screens(), vec![Screen::Login]);
    }

    #[test]
    fn test_pop_to_current_is_noop() {
        let mut stack = reset_flow_stack();
        assert!(stack.pop_to(Screen::ChangePassword).unwrap().is_empty());
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_pop_to_missing_screen() {
        let mut stack = reset_flow_stack();
        let err = stack.pop_to(Screen::ProjectList).unwrap_err();
        assert_eq!(
            err,
            NavigationError::ScreenNotInStack {
                screen: Screen::ProjectList
            }
        );
        assert_eq!(stack.depth(), 3);
    }
}
