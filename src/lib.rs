//! Runtime checks for layered architectures
//!
//! A _layer_ is a named group of code (a crate, for Rust types) and the [`layers::LayerRegistry`]
//! orders layers by rank, starting at `0`. Constructors living in a registered layer may only
//! depend on their own layer or on the layer ranked immediately after it: no reverse dependencies
//! and no skipped layers. Instead of inspecting the call stack, the instrumented code describes
//! itself with a [`verifier::CallContext`] and forwards its arguments to the verifier.
//!
//! ```
//! use layerguard::layers::LayerRegistry;
//! use layerguard::verifier::{self, Argument, CallContext, Error, TypeIdentity};
//!
//! let registry = LayerRegistry::new(["Core", "Service"]).unwrap();
//!
//! let caller = CallContext::constructor(TypeIdentity::new("Repository", "Core"))
//!     .with_parameter(TypeIdentity::new("IClock", "Runtime"));
//!
//! // An argument from the next layer is fine
//! let clock = Argument::from(TypeIdentity::new("SystemClock", "Service"));
//! assert!(verifier::verify(&registry, &caller, &[clock]).is_ok());
//!
//! // Forgetting to forward an argument is a usage error
//! assert!(matches!(
//!     verifier::verify(&registry, &caller, &[]),
//!     Err(Error::ArgumentCountMismatch { .. })
//! ));
//! ```

pub mod layers;
pub mod verifier;
