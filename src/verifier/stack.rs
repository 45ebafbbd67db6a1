use super::{CallContext, CallerRole, Error, TypeIdentity};
use std::borrow::Cow;

/// One frame of a described call stack
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StackFrame {
    /// Module owning the code of this frame
    pub module: Cow<'static, str>,

    /// Name of the function running in this frame
    pub method: Cow<'static, str>,

    pub is_constructor: bool,

    /// Type declaring the function
    pub declaring_type: TypeIdentity,

    /// Declared parameter types, in order
    pub parameters: Vec<TypeIdentity>,
}

impl StackFrame {
    /// Frame running a constructor, owned by the declaring type's module
    pub fn constructor(declaring_type: TypeIdentity, parameters: Vec<TypeIdentity>) -> StackFrame {
        StackFrame {
            module: declaring_type.module.clone(),
            method: Cow::Borrowed(CallContext::CONSTRUCTOR_NAME),
            is_constructor: true,
            declaring_type,
            parameters,
        }
    }

    /// Frame running a regular method, owned by the declaring type's module
    pub fn method(
        name: impl Into<Cow<'static, str>>,
        declaring_type: TypeIdentity,
        parameters: Vec<TypeIdentity>,
    ) -> StackFrame {
        StackFrame {
            module: declaring_type.module.clone(),
            method: name.into(),
            is_constructor: false,
            declaring_type,
            parameters,
        }
    }

    /// Override the owning module (eg. for generated or inlined code)
    pub fn in_module(mut self, module: impl Into<Cow<'static, str>>) -> StackFrame {
        self.module = module.into();
        self
    }

    /// Describe the function in this frame as a caller
    pub fn call_context(&self) -> CallContext {
        CallContext {
            method: self.method.clone(),
            role: if self.is_constructor {
                CallerRole::Constructor
            } else {
                CallerRole::Method
            },
            declaring_type: self.declaring_type.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

/// Described call stack, innermost frame first
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn new(frames: Vec<StackFrame>) -> CallStack {
        CallStack { frames }
    }

    /// Add a frame further out than all existing frames
    pub fn push_outer(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Find the innermost frame not owned by `own_module`
    ///
    /// Frames owned by `own_module` are scaffolding around the check (the verifier itself,
    /// helpers forwarding arguments to it, etc.) and are skipped.
    pub fn caller(&self, own_module: &str) -> Result<&StackFrame, Error> {
        self.frames
            .iter()
            .find(|frame| frame.module != own_module)
            .ok_or_else(|| Error::CallerNotFound {
                verifier_module: own_module.to_owned(),
                frames: self.frames.len(),
            })
    }
}

impl FromIterator<StackFrame> for CallStack {
    fn from_iter<I: IntoIterator<Item = StackFrame>>(frames: I) -> CallStack {
        CallStack::new(frames.into_iter().collect())
    }
}
