use crate::action::{Action, Tag};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;

/// Writes every action to the `debug` log and lets it through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, T: Tag> Middleware<S, T> for LoggingMiddleware {
    fn handle(&mut self, action: &Action<T>, _state: &S, _dispatcher: &Dispatcher<T>) -> bool {
        log::debug!("Action: {:?}", action);
        true
    }
}
