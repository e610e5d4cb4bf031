use std::sync::mpsc::{self, Receiver};

use crate::action::{Action, Tag};
use crate::config::StoreConfig;
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::reducer::Reducer;

/// Store - holds state and runs the dispatch loop
///
/// Every dispatched action passes through the middleware chain in the order
/// the middleware was added. Unless a middleware consumes it, the reducer then
/// folds it into the state. Actions queued on the [`Dispatcher`] meanwhile are
/// dispatched afterwards, in the order they were queued; anything queued
/// between two dispatches runs before the next one.
pub struct Store<S, T: Tag = &'static str> {
    state: S,
    reducer: Reducer<S, T>,
    middleware: Vec<Box<dyn Middleware<S, T>>>,
    dispatcher: Dispatcher<T>,
    pending: Receiver<Action<T>>,
    max_dispatch_depth: usize,
}

impl<S: Clone, T: Tag> Store<S, T> {
    /// Create a store starting from the reducer's initial state
    pub fn new(reducer: Reducer<S, T>) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: reducer.initial_state().clone(),
            reducer,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
            max_dispatch_depth: StoreConfig::default().max_dispatch_depth,
        }
    }

    /// Create a store, applying `config` (depth limit, action logging)
    pub fn with_config(reducer: Reducer<S, T>, config: &StoreConfig) -> Self {
        let mut store = Self::new(reducer);
        store.max_dispatch_depth = config.max_dispatch_depth;
        if config.log_actions {
            store.add_middleware(Box::new(LoggingMiddleware::new()));
        }
        store
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S, T>>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Actions already waiting on the dispatcher are processed first.
    pub fn dispatch(&mut self, action: Action<T>) -> Result<(), StoreError> {
        let mut actions: Vec<_> = self.pending.try_iter().collect();
        actions.push(action);

        let result = self.dispatch_all(actions, 0);
        if let Err(StoreError::DispatchDepthExceeded { limit, dropped }) = &result {
            log::warn!(
                "Dispatch depth limit {} reached, dropped {} actions",
                limit,
                dropped
            );
        }
        result
    }

    fn dispatch_all(&mut self, actions: Vec<Action<T>>, depth: usize) -> Result<(), StoreError> {
        let total = actions.len();
        for (index, action) in actions.into_iter().enumerate() {
            if let Err(err) = self.dispatch_at(action, depth) {
                let StoreError::DispatchDepthExceeded { limit, dropped } = err;
                // Siblings that never got their turn count as dropped too
                return Err(StoreError::DispatchDepthExceeded {
                    limit,
                    dropped: dropped + total - index - 1,
                });
            }
        }
        Ok(())
    }

    fn dispatch_at(&mut self, action: Action<T>, depth: usize) -> Result<(), StoreError> {
        if depth > self.max_dispatch_depth {
            return Err(StoreError::DispatchDepthExceeded {
                limit: self.max_dispatch_depth,
                dropped: 1 + self.pending.try_iter().count(),
            });
        }

        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = self.reducer.reduce(Some(self.state.clone()), &action);
        }

        // Process any actions queued by middleware
        let pending_actions: Vec<_> = self.pending.try_iter().collect();
        self.dispatch_all(pending_actions, depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_creator::{ActionCreator, create_action};
    use crate::clause::{on, on_props};
    use crate::reducer::create_reducer;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn counter() -> (ActionCreator<()>, ActionCreator<i32>, Reducer<i32>) {
        let increment = create_action::<(), _>("increment");
        let add = create_action::<i32, _>("add");
        let reducer = create_reducer(
            0,
            [
                on(&increment, |count: i32, _| count + 1),
                on_props(&add, |count: i32, amount: &i32| count + amount),
            ],
        );
        (increment, add, reducer)
    }

    /// Records every action it sees, optionally consuming some
    struct Recorder {
        seen: Arc<Mutex<Vec<Action>>>,
        consume: Option<&'static str>,
    }

    impl<S> Middleware<S> for Recorder {
        fn handle(&mut self, action: &Action, _state: &S, _dispatcher: &Dispatcher) -> bool {
            self.seen.lock().unwrap().push(action.clone());
            self.consume != Some(*action.tag())
        }
    }

    /// Turns every `increment` into an additional `add(10)`
    struct Bonus {
        add: ActionCreator<i32>,
    }

    impl Middleware<i32> for Bonus {
        fn handle(&mut self, action: &Action, _state: &i32, dispatcher: &Dispatcher) -> bool {
            if action.tag() == &"increment" {
                dispatcher.dispatch(self.add.create_with(10));
            }
            true
        }
    }

    /// Re-queues every `increment`, adding an `add(100)` behind the first one
    struct Fork {
        add: ActionCreator<i32>,
        forked: bool,
    }

    impl Middleware<i32> for Fork {
        fn handle(&mut self, action: &Action, _state: &i32, dispatcher: &Dispatcher) -> bool {
            if action.tag() == &"increment" {
                dispatcher.dispatch(action.clone());
                if !self.forked {
                    self.forked = true;
                    dispatcher.dispatch(self.add.create_with(100));
                }
            }
            true
        }
    }

    /// Re-queues every action it sees
    struct Echo;

    impl Middleware<i32> for Echo {
        fn handle(&mut self, action: &Action, _state: &i32, dispatcher: &Dispatcher) -> bool {
            dispatcher.dispatch(action.clone());
            true
        }
    }

    #[test]
    fn test_store_dispatch_reduces_state() {
        let (increment, add, reducer) = counter();
        let mut store = Store::new(reducer);
        assert_eq!(*store.state(), 0);

        store.dispatch(increment.create()).unwrap();
        store.dispatch(add.create_with(5)).unwrap();

        assert_eq!(*store.state(), 6);
    }

    #[test]
    fn test_middleware_can_consume_actions() {
        let (increment, add, reducer) = counter();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::new(reducer);
        store.add_middleware(Box::new(Recorder {
            seen: Arc::clone(&seen),
            consume: Some("add"),
        }));

        store.dispatch(add.create_with(5)).unwrap();
        store.dispatch(increment.create()).unwrap();

        assert_eq!(*store.state(), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![add.create_with(5), increment.create()]
        );
    }

    #[test]
    fn test_queued_actions_re_enter_the_chain() {
        let (increment, add, reducer) = counter();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::new(reducer);
        store.add_middleware(Box::new(Recorder {
            seen: Arc::clone(&seen),
            consume: None,
        }));
        store.add_middleware(Box::new(Bonus { add: add.clone() }));

        store.dispatch(increment.create()).unwrap();

        assert_eq!(*store.state(), 11);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![increment.create(), add.create_with(10)]
        );
    }

    #[test]
    fn test_externally_queued_actions_run_first() {
        let increment = create_action::<(), _>("increment");
        let set = create_action::<i32, _>("set");
        let reducer = create_reducer(
            0,
            [
                on(&increment, |count: i32, _| count + 1),
                on_props(&set, |_, value: &i32| *value),
            ],
        );
        let mut store = Store::new(reducer);

        store.dispatcher().clone().dispatch(set.create_with(5));
        store.dispatch(increment.create()).unwrap();

        assert_eq!(*store.state(), 6);
    }

    #[test]
    fn test_depth_limit_counts_dropped_siblings() {
        let (increment, add, reducer) = counter();
        let config = StoreConfig {
            log_actions: false,
            max_dispatch_depth: 3,
        };
        let mut store = Store::with_config(reducer, &config);
        store.add_middleware(Box::new(Fork {
            add,
            forked: false,
        }));

        let result = store.dispatch(increment.create());

        // `add(100)` waited behind the runaway chain and never ran
        assert_eq!(
            result,
            Err(StoreError::DispatchDepthExceeded {
                limit: 3,
                dropped: 2
            })
        );
        assert_eq!(*store.state(), 4);
    }

    #[test]
    fn test_dispatch_depth_limit() {
        let (increment, _, reducer) = counter();
        let config = StoreConfig {
            log_actions: false,
            max_dispatch_depth: 3,
        };
        let mut store = Store::with_config(reducer, &config);
        store.add_middleware(Box::new(Echo));

        let result = store.dispatch(increment.create());

        assert_eq!(
            result,
            Err(StoreError::DispatchDepthExceeded {
                limit: 3,
                dropped: 1
            })
        );
        // The original action plus three nested echoes were reduced
        assert_eq!(*store.state(), 4);
    }

    #[test]
    fn test_with_config_installs_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
        let (increment, _, reducer) = counter();
        let mut store = Store::with_config(reducer, &StoreConfig::default());

        store.dispatch(increment.create()).unwrap();

        assert_eq!(store.middleware.len(), 1);
        assert_eq!(*store.state(), 1);
    }
}
