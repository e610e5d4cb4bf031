//! Middleware run by [`crate::Store`] ahead of the reducer

use crate::action::{Action, Tag};
use crate::dispatcher::Dispatcher;

pub mod logging;

pub use logging::LoggingMiddleware;

/// Hook that sees every action a [`crate::Store`] dispatches
///
/// Middleware runs in the order it was added to the store, before the reducer.
pub trait Middleware<S, T: Tag = &'static str>: Send {
    /// Inspect `action` against the state it is about to be reduced into
    ///
    /// Follow-up actions sent through `dispatcher` run once this action is
    /// done. Returning `false` stops the chain and keeps the reducer from
    /// seeing the action.
    fn handle(&mut self, action: &Action<T>, state: &S, dispatcher: &Dispatcher<T>) -> bool;
}
