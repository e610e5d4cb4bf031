//! Action factory
//!
//! [`create_action`] returns an [`ActionCreator`]: a value that remembers one
//! tag and stamps it onto every action it builds.

use std::any::{TypeId, type_name};
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::action::{Action, Props, Tag};

/// Create an action creator for `tag`
///
/// `P` is the payload the creator expects; leave it as `()` for actions
/// without props.
///
/// ```
/// use action_reducer::create_action;
///
/// #[derive(Debug, PartialEq)]
/// struct Kick {
///     strength: u32,
/// }
///
/// let launch_carrot = create_action::<(), _>("launchCarrot");
/// let deliver_kick = create_action::<Kick, _>("deliverKick");
///
/// assert_eq!(launch_carrot.create().tag(), &"launchCarrot");
/// let kick = deliver_kick.create_with(Kick { strength: 100 });
/// assert_eq!(kick.props::<Kick>(), Some(&Kick { strength: 100 }));
/// ```
pub fn create_action<P: Props, T: Tag>(tag: T) -> ActionCreator<P, T> {
    ActionCreator {
        tag,
        _props: PhantomData,
    }
}

/// Builds actions of one kind
///
/// The tag is fixed when the creator is made and can only be read afterwards:
///
/// ```compile_fail
/// use action_reducer::create_action;
///
/// let mut get_rabbit = create_action::<(), _>("getRabbit");
/// get_rabbit.tag = "getCarrot";
/// ```
pub struct ActionCreator<P, T: Tag = &'static str> {
    tag: T,
    _props: PhantomData<fn(P)>,
}

impl<P: Props, T: Tag> ActionCreator<P, T> {
    /// The tag stamped onto every action this creator builds
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Build an action carrying `props`
    pub fn create_with(&self, props: P) -> Action<T> {
        Action::new(self.tag.clone(), props)
    }

    /// Type-erased metadata for this creator
    pub fn erased(&self) -> AnyActionCreator<T> {
        AnyActionCreator {
            tag: self.tag.clone(),
            props_type: TypeId::of::<P>(),
            props_type_name: type_name::<P>(),
        }
    }
}

impl<T: Tag> ActionCreator<(), T> {
    /// Build an action without props
    pub fn create(&self) -> Action<T> {
        self.create_with(())
    }
}

impl<P, T: Tag> Clone for ActionCreator<P, T> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            _props: PhantomData,
        }
    }
}

impl<P, T: Tag> Debug for ActionCreator<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("type", &self.tag)
            .field("props", &type_name::<P>())
            .finish()
    }
}

impl<P: Props, T: Tag> PartialEq for ActionCreator<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

/// Metadata of an action creator with its payload type erased
///
/// Clauses and reducers list the creators they respond to in this form, so a
/// single list can hold creators with different payload types.
#[derive(Clone, PartialEq, Eq)]
pub struct AnyActionCreator<T: Tag = &'static str> {
    tag: T,
    props_type: TypeId,
    props_type_name: &'static str,
}

impl<T: Tag> AnyActionCreator<T> {
    /// Tag of the creator this was erased from
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Name of the payload type the original creator expects
    pub fn props_type_name(&self) -> &'static str {
        self.props_type_name
    }
}

impl<T: Tag> Debug for AnyActionCreator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyActionCreator")
            .field("type", &self.tag)
            .field("props", &self.props_type_name)
            .finish()
    }
}

impl<P: Props, T: Tag> From<ActionCreator<P, T>> for AnyActionCreator<T> {
    fn from(creator: ActionCreator<P, T>) -> Self {
        creator.erased()
    }
}

impl<P: Props, T: Tag> From<&ActionCreator<P, T>> for AnyActionCreator<T> {
    fn from(creator: &ActionCreator<P, T>) -> Self {
        creator.erased()
    }
}

impl<P: Props, T: Tag> PartialEq<ActionCreator<P, T>> for AnyActionCreator<T> {
    fn eq(&self, other: &ActionCreator<P, T>) -> bool {
        *self == other.erased()
    }
}
