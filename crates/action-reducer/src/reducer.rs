//! Reducer builder
//!
//! [`create_reducer`] flattens a set of clauses into a dispatch table keyed by
//! action tag. The resulting [`Reducer`] is a pure function from
//! `(state, action)` to the next state:
//!
//! - a missing state (`None`) is replaced by the initial state
//! - an action whose tag was registered runs the matching handler
//! - any other action leaves the state as it is
//!
//! The reducer also remembers every creator it was built with, in
//! registration order. Passing that list to a parent clause is how reducers
//! are composed.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::action::{Action, Tag};
use crate::action_creator::AnyActionCreator;
use crate::clause::{Handler, On};

/// A pure state transition function assembled from clauses
pub struct Reducer<S, T: Tag = &'static str> {
    initial_state: S,
    handlers: Arc<HashMap<T, Handler<S, T>>>,
    actions: Arc<[AnyActionCreator<T>]>,
}

/// Build a reducer from an initial state and a list of clauses
///
/// When several clauses register the same tag, the one registered last wins.
///
/// ```
/// use action_reducer::{create_action, create_reducer, on};
///
/// let increment = create_action::<(), _>("increment");
/// let reducer = create_reducer(
///     0,
///     [on(&increment, |count: i32, _| count + 1)],
/// );
///
/// assert_eq!(reducer.reduce(Some(10), &increment.create()), 11);
/// assert_eq!(reducer.reduce(None, &increment.create()), 1);
/// ```
pub fn create_reducer<S, T, I>(initial_state: S, clauses: I) -> Reducer<S, T>
where
    T: Tag,
    I: IntoIterator<Item = On<S, T>>,
{
    let mut handlers = HashMap::new();
    let mut actions = Vec::new();
    let mut clause_count = 0;

    for clause in clauses {
        clause_count += 1;
        let (creators, handler) = clause.into_parts();
        for creator in &creators {
            if handlers
                .insert(creator.tag().clone(), Arc::clone(&handler))
                .is_some()
            {
                log::trace!("Handler for {:?} replaced by a later clause", creator.tag());
            }
        }
        actions.extend(creators);
    }

    log::debug!(
        "Built reducer from {} clauses handling {} action types",
        clause_count,
        handlers.len()
    );

    Reducer {
        initial_state,
        handlers: Arc::new(handlers),
        actions: actions.into(),
    }
}

impl<S: Clone, T: Tag> Reducer<S, T> {
    /// Fold `action` into `state`, starting from the initial state if `state` is `None`
    pub fn reduce(&self, state: Option<S>, action: &Action<T>) -> S {
        let state = state.unwrap_or_else(|| self.initial_state.clone());

        match self.handlers.get(action.tag()) {
            Some(handler) => handler(state, action),
            None => {
                log::trace!("No handler for {:?}, keeping state", action.tag());
                state
            }
        }
    }
}

impl<S, T: Tag> Reducer<S, T> {
    /// Every creator referenced by this reducer's clauses, in registration order
    pub fn actions(&self) -> &[AnyActionCreator<T>] {
        &self.actions
    }

    /// State used when `reduce` is called without one
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    /// Whether an action tagged `tag` would reach a handler
    pub fn handles(&self, tag: &T) -> bool {
        self.handlers.contains_key(tag)
    }
}

impl<S: Clone, T: Tag> Clone for Reducer<S, T> {
    fn clone(&self) -> Self {
        Self {
            initial_state: self.initial_state.clone(),
            handlers: Arc::clone(&self.handlers),
            actions: Arc::clone(&self.actions),
        }
    }
}

impl<S: Debug, T: Tag> Debug for Reducer<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("initial_state", &self.initial_state)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}
