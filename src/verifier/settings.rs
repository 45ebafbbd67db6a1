use bitflags::bitflags;
use std::borrow::Cow;

bitflags! {
    /// Layering rules to enforce
    ///
    /// The argument count check is a usage precondition and always runs.
    pub struct Checks: u8 {
        /// Declared parameter types may not come from another protected layer
        const DECLARED_PARAMETERS = 0b001;

        /// Arguments may not come from a layer with a lower rank
        const REVERSE_DEPENDENCIES = 0b010;

        /// Arguments may not come from more than one rank further along
        const SKIPPED_LAYERS = 0b100;
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Rules to enforce (all of them, by default)
    pub checks: Checks,

    /// Module owning the verifier
    ///
    /// When looking for the caller in a described call stack, frames owned by this module are
    /// skipped. Defaults to the name of this crate.
    pub verifier_module: Cow<'static, str>,
}

impl Settings {
    pub fn new() -> Settings {
        Settings {
            checks: Checks::all(),
            verifier_module: Cow::Borrowed(env!("CARGO_CRATE_NAME")),
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings::new()
    }
}
