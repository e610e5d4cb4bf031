//! Action Reducer
//!
//! Tagged action creators and dispatch-table reducers for predictable state
//! containers.
//!
//! - [`create_action`] builds an [`ActionCreator`] that stamps one tag onto
//!   every [`Action`] it creates
//! - [`on`] pairs one or more creators with a state transition
//! - [`create_reducer`] assembles those clauses into a [`Reducer`]
//!
//! A [`Store`] runs the usual dispatch loop (middleware chain, reducer,
//! follow-up actions) on top of a reducer.
//!
//! # Example
//!
//! ```
//! use action_reducer::{create_action, create_reducer, on, on_props};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Products {
//!     milk: u32,
//!     blanket: u32,
//! }
//!
//! let add_milk = create_action::<u32, _>("addMilk");
//! let add_blanket = create_action::<(), _>("addBlanket");
//!
//! let products = create_reducer(
//!     Products { milk: 0, blanket: 0 },
//!     [
//!         on_props(&add_milk, |p: Products, units: &u32| Products { milk: p.milk + units, ..p }),
//!         on(&add_blanket, |p: Products, _| Products { blanket: p.blanket + 1, ..p }),
//!     ],
//! );
//!
//! // Nest the products reducer under a parent state
//! let child = products.clone();
//! let root = create_reducer(
//!     None::<Products>,
//!     [on(products.actions(), move |state: Option<Products>, action| {
//!         Some(child.reduce(state, action))
//!     })],
//! );
//!
//! let state = root.reduce(None, &add_milk.create_with(10));
//! let state = root.reduce(Some(state), &add_blanket.create());
//!
//! assert_eq!(state, Some(Products { milk: 10, blanket: 1 }));
//! ```

mod action;
mod action_creator;
mod clause;
mod config;
mod dispatcher;
mod error;
mod middleware;
mod reducer;
mod store;

pub use action::{Action, Props, Tag};
pub use action_creator::{ActionCreator, AnyActionCreator, create_action};
pub use clause::{Handler, IntoCreators, On, on, on_props};
pub use config::StoreConfig;
pub use dispatcher::Dispatcher;
pub use error::{ActionError, ConfigError, StoreError};
pub use middleware::{LoggingMiddleware, Middleware};
pub use reducer::{Reducer, create_reducer};
pub use store::Store;
