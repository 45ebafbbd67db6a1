use std::any::type_name;
use std::borrow::Cow;

/// Identity of a type, as far as layering is concerned
///
/// The `module` is the unit the type is defined in (an assembly, or a crate for Rust types). It
/// gets matched against the layer names in the registry.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct TypeIdentity {
    /// Short type name (eg. `Repository`)
    pub name: Cow<'static, str>,

    /// Name of the defining module (eg. `Core`)
    pub module: Cow<'static, str>,
}

impl TypeIdentity {
    /// Module used for primitive and other built-in types
    pub const BUILTIN_MODULE: &'static str = "core";

    pub fn new(
        name: impl Into<Cow<'static, str>>,
        module: impl Into<Cow<'static, str>>,
    ) -> TypeIdentity {
        TypeIdentity {
            name: name.into(),
            module: module.into(),
        }
    }

    /// Identity of a Rust type, where the defining crate is the module
    ///
    /// This is derived from [`std::any::type_name`], so it is best-effort: references and
    /// pointers are looked through, generic arguments are ignored, and slices, arrays, tuples,
    /// function pointers and primitives are all considered built-in.
    pub fn of<T: ?Sized>() -> TypeIdentity {
        TypeIdentity::from_type_name(type_name::<T>())
    }

    /// Parse a fully qualified Rust type name (eg. `alloc::vec::Vec<u8>`)
    pub fn from_type_name(type_name: &str) -> TypeIdentity {
        // Strip off references, pointers, and trait object markers
        let mut path = type_name.trim();
        loop {
            let stripped = path.trim_start_matches(&['&', '*', ' '][..]);
            let stripped = ["mut ", "const ", "dyn "]
                .iter()
                .fold(stripped, |p, prefix| p.strip_prefix(prefix).unwrap_or(p));
            if stripped == path {
                break;
            }
            path = stripped;
        }

        let is_function_pointer = ["fn(", "unsafe ", "extern "]
            .iter()
            .any(|prefix| path.starts_with(prefix));
        if path.starts_with(&['[', '('][..]) || is_function_pointer {
            return TypeIdentity::new(path.to_owned(), Self::BUILTIN_MODULE);
        }

        // Generic arguments and extra trait object bounds aren't part of the identity
        let path = path.split(&['<', ' '][..]).next().unwrap_or(path);
        let mut segments = path.split("::");
        let first = segments.next().unwrap_or(path);
        match segments.last() {
            Some(last) => TypeIdentity::new(last.to_owned(), first.to_owned()),
            None => TypeIdentity::new(first.to_owned(), Self::BUILTIN_MODULE),
        }
    }
}

/// Values that know their own type identity
///
/// This is mostly useful for trait objects, where the static type of a reference says nothing
/// about which layer the value behind it came from.
pub trait Layered {
    fn type_identity(&self) -> TypeIdentity;
}

/// Actual argument received by the caller
///
/// Only the identity of the value's type is kept. An argument with no identity stands for an
/// absent value (`None` or null) and is skipped when checking argument layers.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Default)]
pub struct Argument(Option<TypeIdentity>);

impl Argument {
    /// Absent value
    pub const NULL: Argument = Argument(None);

    /// Argument identified by the static type of the value
    pub fn of<T: ?Sized>(_value: &T) -> Argument {
        Argument(Some(TypeIdentity::of::<T>()))
    }

    /// Argument identified by the value itself
    pub fn layered<T: Layered + ?Sized>(value: &T) -> Argument {
        Argument(Some(value.type_identity()))
    }

    /// Argument which may be absent
    pub fn optional<T>(value: Option<&T>) -> Argument {
        value.map_or(Argument::NULL, Argument::of)
    }

    /// Type identity of the value, unless the value is absent
    pub fn identity(&self) -> Option<&TypeIdentity> {
        self.0.as_ref()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl From<TypeIdentity> for Argument {
    fn from(identity: TypeIdentity) -> Argument {
        Argument(Some(identity))
    }
}

impl From<Option<TypeIdentity>> for Argument {
    fn from(identity: Option<TypeIdentity>) -> Argument {
        Argument(identity)
    }
}
