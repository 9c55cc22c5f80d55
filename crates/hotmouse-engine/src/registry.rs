//! Action bodies supplied by the host.

use std::{collections::HashMap, fmt};

use config::Action;
use tracing::trace;

use crate::ActionError;

/// A zero-argument action body.
pub type Handler = Box<dyn FnMut() -> Result<(), ActionError>>;

/// Maps actions to the host's implementations.
///
/// Unbound actions, including [`Action::Noop`], do nothing. Handlers bound to
/// `on`, `off` or `on_off` run after the session's own state transition.
#[derive(Default)]
pub struct ActionRegistry {
    /// Bound handlers.
    handlers: HashMap<Action, Handler>,
}

impl ActionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `f` to `action`, replacing any previous handler.
    pub fn bind<F>(&mut self, action: Action, f: F) -> &mut Self
    where
        F: FnMut() -> Result<(), ActionError> + 'static,
    {
        self.handlers.insert(action, Box::new(f));
        self
    }

    /// Builder-style [`ActionRegistry::bind`].
    pub fn with<F>(mut self, action: Action, f: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + 'static,
    {
        self.bind(action, f);
        self
    }

    /// Run the handler for `action`, if any.
    pub fn invoke(&mut self, action: Action) -> Result<(), ActionError> {
        match self.handlers.get_mut(&action) {
            Some(f) => f(),
            None => {
                trace!(action = %action, "action_unbound");
                Ok(())
            }
        }
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<&str> = self.handlers.keys().map(|a| a.name()).collect();
        bound.sort_unstable();
        f.debug_struct("ActionRegistry")
            .field("bound", &bound)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn bound_handler_runs() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut reg = ActionRegistry::new().with(Action::Good, move || {
            h.set(h.get() + 1);
            Ok(())
        });
        reg.invoke(Action::Good).unwrap();
        reg.invoke(Action::Good).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn unbound_is_noop() {
        let mut reg = ActionRegistry::new();
        assert!(reg.invoke(Action::Noop).is_ok());
        assert!(reg.invoke(Action::Mark).is_ok());
    }

    #[test]
    fn failures_are_returned() {
        let mut reg = ActionRegistry::new();
        reg.bind(Action::Undo, || Err(ActionError::failed("nothing to undo")));
        assert_eq!(
            reg.invoke(Action::Undo),
            Err(ActionError::Failed("nothing to undo".into()))
        );
    }

    #[test]
    fn rebind_replaces() {
        let last = Rc::new(Cell::new(0));
        let (a, b) = (last.clone(), last.clone());
        let mut reg = ActionRegistry::new();
        reg.bind(Action::Red, move || {
            a.set(1);
            Ok(())
        })
        .bind(Action::Red, move || {
            b.set(2);
            Ok(())
        });
        reg.invoke(Action::Red).unwrap();
        assert_eq!(last.get(), 2);
    }
}
