//! Layer separation verification
//!
//! The subject of a verification is the _caller_: usually a constructor which receives its
//! dependencies as arguments. The caller is described with a [`CallContext`] (its name, the type
//! declaring it, and the types of its declared parameters) and the values it actually received
//! are forwarded as a list of [`Argument`]s, each carrying the [`TypeIdentity`] of the value
//! (or nothing, for an absent value).
//!
//! If the caller's defining module is a protected layer (see [`crate::layers::LayerRegistry`]),
//! then:
//!
//!   - every declared parameter type must either be unprotected or come from the caller's own
//!     layer. Depending statically on a type from another protected layer is a
//!     [`Error::LayerBreak`], regardless of the rank of that layer.
//!
//!   - every argument value must either be unprotected, come from the caller's own layer, or come
//!     from the layer ranked right after it. Lower ranks are [`Error::ReverseDependency`] and
//!     anything further along is [`Error::SkippedLayerDependency`].
//!
//! Checking stops at the first violation, in parameter order. When the caller is only known
//! through a description of the call stack, [`Verifier::verify_stack`] first finds the innermost
//! frame that doesn't belong to the verifier itself.

mod context;
mod errors;
mod identity;
mod settings;
mod stack;
mod verify;

pub use context::*;
pub use errors::*;
pub use identity::*;
pub use settings::*;
pub use stack::*;
pub use verify::*;
