//! Dispatcher for middleware action dispatch
//!
//! Middleware that wants to trigger follow-up actions queues them here. The
//! store drains the queue once the current action has been reduced, so queued
//! actions go through the full middleware chain again.

use std::sync::mpsc::Sender;

use crate::action::{Action, Tag};

/// Handle for queueing actions on a [`crate::Store`]
#[derive(Clone)]
pub struct Dispatcher<T: Tag = &'static str> {
    action_tx: Sender<Action<T>>,
}

impl<T: Tag> Dispatcher<T> {
    /// Create a dispatcher feeding the store's pending queue
    pub fn new(action_tx: Sender<Action<T>>) -> Self {
        Self { action_tx }
    }

    /// Queue an action behind the one currently being dispatched
    pub fn dispatch(&self, action: Action<T>) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_creator::create_action;
    use std::sync::mpsc;

    #[test]
    fn test_dispatch_queues_in_order() {
        let first = create_action::<(), _>("first");
        let second = create_action::<(), _>("second");
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(first.create());
        dispatcher.clone().dispatch(second.create());

        let queued: Vec<_> = rx.try_iter().collect();
        assert_eq!(queued, vec![first.create(), second.create()]);
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let ping = create_action::<(), _>("ping");
        let (tx, rx) = mpsc::channel();
        drop(rx);

        Dispatcher::new(tx).dispatch(ping.create());
    }
}
