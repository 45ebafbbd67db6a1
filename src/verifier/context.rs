use super::TypeIdentity;
use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What sort of function is being verified
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CallerRole {
    Constructor,
    Method,
}

impl Display for CallerRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            CallerRole::Constructor => "constructor",
            CallerRole::Method => "method",
        })
    }
}

/// Description of the caller being verified
///
/// This is what the instrumented code knows about itself: which function is running, which type
/// declares it, and the types of its declared parameters in order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CallContext {
    /// Name of the function (constructors are all called `new`)
    pub method: Cow<'static, str>,

    pub role: CallerRole,

    /// Type declaring the function. Its module decides the layer of the caller.
    pub declaring_type: TypeIdentity,

    /// Declared parameter types, in order
    pub parameters: Vec<TypeIdentity>,
}

impl CallContext {
    /// Name used for constructors
    pub const CONSTRUCTOR_NAME: &'static str = "new";

    /// Constructor of some type, with no parameters yet
    pub fn constructor(declaring_type: TypeIdentity) -> CallContext {
        CallContext {
            method: Cow::Borrowed(Self::CONSTRUCTOR_NAME),
            role: CallerRole::Constructor,
            declaring_type,
            parameters: vec![],
        }
    }

    /// Constructor of a Rust type, with no parameters yet
    pub fn constructor_of<T: ?Sized>() -> CallContext {
        CallContext::constructor(TypeIdentity::of::<T>())
    }

    /// Regular method, with no parameters yet
    pub fn method(
        name: impl Into<Cow<'static, str>>,
        declaring_type: TypeIdentity,
    ) -> CallContext {
        CallContext {
            method: name.into(),
            role: CallerRole::Method,
            declaring_type,
            parameters: vec![],
        }
    }

    /// Append a declared parameter
    pub fn with_parameter(mut self, parameter: TypeIdentity) -> CallContext {
        self.parameters.push(parameter);
        self
    }

    /// Append a declared parameter of a Rust type
    pub fn with_parameter_of<T: ?Sized>(self) -> CallContext {
        self.with_parameter(TypeIdentity::of::<T>())
    }

    /// Append several declared parameters
    pub fn with_parameters(
        mut self,
        parameters: impl IntoIterator<Item = TypeIdentity>,
    ) -> CallContext {
        self.parameters.extend(parameters);
        self
    }

    /// Name by which the caller is reported
    ///
    /// For constructors, this is the name of the type being constructed.
    pub fn calling_name(&self) -> &str {
        match self.role {
            CallerRole::Constructor => &self.declaring_type.name,
            CallerRole::Method => &self.method,
        }
    }

    /// Name of the layer the caller would be in
    pub fn layer_name(&self) -> &str {
        &self.declaring_type.module
    }
}
