//! Action values
//!
//! An [`Action`] is an immutable, tagged value describing an event or intent.
//! The tag decides which reducer handler runs; the payload ("props") carries
//! whatever data the handler needs.

use std::any::{Any, type_name};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

use crate::action_creator::ActionCreator;
use crate::error::ActionError;

/// Types usable as an action tag
///
/// Tags key the reducer's dispatch table, so they must be hashable and
/// comparable. `&'static str` is the common choice; integers and fieldless
/// enums work just as well.
pub trait Tag: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> Tag for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// Types usable as an action payload
///
/// `()` is the payload of actions created without props.
pub trait Props: Any + Debug + PartialEq + Send + Sync {}

impl<P> Props for P where P: Any + Debug + PartialEq + Send + Sync {}

/// Object-safe view of a payload, so actions of different kinds share one type
trait Payload: Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
    fn dyn_eq(&self, other: &dyn Payload) -> bool;
}

impl<P: Props> Payload for P {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<P>()
    }

    fn dyn_eq(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<P>()
            .is_some_and(|other| self == other)
    }
}

/// A tagged action carrying an optional payload
#[derive(Clone)]
pub struct Action<T: Tag = &'static str> {
    tag: T,
    props: Arc<dyn Payload>,
}

impl<T: Tag> Action<T> {
    pub(crate) fn new<P: Props>(tag: T, props: P) -> Self {
        Self {
            tag,
            props: Arc::new(props),
        }
    }

    /// The tag identifying what kind of action this is
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Typed view of the payload, `None` if it is not a `P`
    pub fn props<P: Props>(&self) -> Option<&P> {
        self.props.as_any().downcast_ref::<P>()
    }

    /// Like [`Action::props`], but explains what went wrong
    pub fn try_props<P: Props>(&self) -> Result<&P, ActionError> {
        self.props::<P>().ok_or_else(|| ActionError::PropsMismatch {
            tag: format!("{:?}", self.tag),
            expected: type_name::<P>(),
            actual: self.props.type_name(),
        })
    }

    /// Name of the payload type, for diagnostics
    pub fn props_type_name(&self) -> &'static str {
        self.props.type_name()
    }

    /// Whether this action was (or could have been) built by `creator`
    pub fn is<P: Props>(&self, creator: &ActionCreator<P, T>) -> bool {
        &self.tag == creator.tag()
    }
}

impl<T: Tag> PartialEq for Action<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.props.dyn_eq(other.props.as_ref())
    }
}

impl<T: Tag> Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("type", &self.tag)
            .field("props", &self.props)
            .finish()
    }
}
