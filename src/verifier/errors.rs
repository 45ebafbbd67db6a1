use super::CallerRole;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Ways a verification can fail
///
/// Except for `CallerNotFound`, the `caller` is the calling name (the constructed type for
/// constructors, otherwise the method name).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Not every declared parameter got forwarded to the verifier (indicates a usage bug)
    ArgumentCountMismatch {
        caller: String,
        role: CallerRole,
        declared: usize,
        supplied: usize,
    },

    /// A declared parameter type is from a separate protected layer
    LayerBreak {
        caller: String,
        role: CallerRole,
        index: usize,
        parameter_type: String,
        parameter_layer: String,
    },

    /// An argument is from a layer with a lower rank than the caller's
    ReverseDependency {
        caller: String,
        role: CallerRole,
        index: usize,
        argument_type: String,
        argument_layer: String,
    },

    /// An argument is from a layer more than one rank after the caller's
    SkippedLayerDependency {
        caller: String,
        role: CallerRole,
        index: usize,
        argument_type: String,
        argument_layer: String,
    },

    /// Every frame of the described call stack belongs to the verifier
    CallerNotFound {
        verifier_module: String,
        frames: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::ArgumentCountMismatch {
                caller,
                role,
                declared,
                supplied,
            } => write!(
                f,
                "Calling error for {} {}: please pass all parameters to the verifier \
                 ({} declared, {} supplied)",
                caller, role, declared, supplied
            ),
            Error::LayerBreak {
                caller,
                role,
                index,
                parameter_type,
                parameter_layer,
            } => write!(
                f,
                "Layer break detected: {} {} requires a {} (parameter {}), which is declared in \
                 the separate protected layer {}",
                caller, role, parameter_type, index, parameter_layer
            ),
            Error::ReverseDependency {
                caller,
                role,
                index,
                argument_type,
                argument_layer,
            } => write!(
                f,
                "Reverse dependency detected: {} {} acquired a {} (parameter {}), which is \
                 defined in the higher protected layer {}",
                caller, role, argument_type, index, argument_layer
            ),
            Error::SkippedLayerDependency {
                caller,
                role,
                index,
                argument_type,
                argument_layer,
            } => write!(
                f,
                "Skipped layer dependency detected: {} {} acquired a {} (parameter {}), which \
                 is defined in the too low protected layer {}",
                caller, role, argument_type, index, argument_layer
            ),
            Error::CallerNotFound {
                verifier_module,
                frames,
            } => write!(
                f,
                "No caller found: all {} stack frames belong to {}",
                frames, verifier_module
            ),
        }
    }
}

impl std::error::Error for Error {}
