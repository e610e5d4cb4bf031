//! Clause builder
//!
//! A clause ([`On`]) pairs one or more action creators with the handler that
//! should run when an action of one of their kinds is dispatched.

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::action::{Action, Props, Tag};
use crate::action_creator::{ActionCreator, AnyActionCreator};

/// State transition run by a clause
pub type Handler<S, T> = Arc<dyn Fn(S, &Action<T>) -> S + Send + Sync>;

/// One or more action creators associated with a handler
pub struct On<S, T: Tag = &'static str> {
    actions: Vec<AnyActionCreator<T>>,
    handler: Handler<S, T>,
}

impl<S, T: Tag> On<S, T> {
    /// The creators this clause responds to, in registration order
    pub fn actions(&self) -> &[AnyActionCreator<T>] {
        &self.actions
    }

    pub(crate) fn into_parts(self) -> (Vec<AnyActionCreator<T>>, Handler<S, T>) {
        (self.actions, self.handler)
    }
}

impl<S, T: Tag> Clone for On<S, T> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S, T: Tag> Debug for On<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("On").field("actions", &self.actions).finish_non_exhaustive()
    }
}

/// Anything that names the action creators a clause listens to
///
/// Implemented for a single creator and for ordered lists of creators,
/// including the `actions()` list of another reducer.
pub trait IntoCreators<T: Tag> {
    /// Flatten into erased creators, keeping order and duplicates
    fn into_creators(self) -> Vec<AnyActionCreator<T>>;
}

impl<P: Props, T: Tag> IntoCreators<T> for ActionCreator<P, T> {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        vec![self.erased()]
    }
}

impl<P: Props, T: Tag> IntoCreators<T> for &ActionCreator<P, T> {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        vec![self.erased()]
    }
}

impl<T: Tag> IntoCreators<T> for AnyActionCreator<T> {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        vec![self]
    }
}

impl<T: Tag> IntoCreators<T> for &AnyActionCreator<T> {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        vec![self.clone()]
    }
}

impl<T: Tag> IntoCreators<T> for Vec<AnyActionCreator<T>> {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        self
    }
}

impl<T: Tag> IntoCreators<T> for &[AnyActionCreator<T>] {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        self.to_vec()
    }
}

impl<T: Tag, const N: usize> IntoCreators<T> for [AnyActionCreator<T>; N] {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        self.into()
    }
}

impl<P: Props, T: Tag, const N: usize> IntoCreators<T> for [&ActionCreator<P, T>; N] {
    fn into_creators(self) -> Vec<AnyActionCreator<T>> {
        self.iter().map(|creator| creator.erased()).collect()
    }
}

/// Associate action creators with a state transition
///
/// `creators` may be a single creator or an ordered list; order and duplicates
/// are kept as given, and an empty list yields a clause that matches nothing.
pub fn on<S, T, C, F>(creators: C, handler: F) -> On<S, T>
where
    T: Tag,
    C: IntoCreators<T>,
    F: Fn(S, &Action<T>) -> S + Send + Sync + 'static,
{
    On {
        actions: creators.into_creators(),
        handler: Arc::new(handler),
    }
}

/// Like [`on`], but hands the creator's payload straight to the handler
///
/// An action that carries the creator's tag with a payload of another type
/// leaves the state untouched.
pub fn on_props<S, P, T, F>(creator: &ActionCreator<P, T>, handler: F) -> On<S, T>
where
    P: Props,
    T: Tag,
    F: Fn(S, &P) -> S + Send + Sync + 'static,
{
    on(creator, move |state: S, action: &Action<T>| {
        match action.try_props::<P>() {
            Ok(props) => handler(state, props),
            Err(e) => {
                log::warn!("Ignoring action: {}", e);
                state
            }
        }
    })
}
