use super::{Argument, CallContext, CallStack, Checks, Error, Settings};
use crate::layers::{Dependency, LayerRegistry};

/// Checks callers against a layer registry
#[derive(Debug)]
pub struct Verifier<'a> {
    registry: &'a LayerRegistry,
    settings: Settings,
}

/// Verify a caller with the default settings
pub fn verify(
    registry: &LayerRegistry,
    caller: &CallContext,
    arguments: &[Argument],
) -> Result<(), Error> {
    Verifier::new(registry).verify(caller, arguments)
}

impl<'a> Verifier<'a> {
    pub fn new(registry: &'a LayerRegistry) -> Verifier<'a> {
        Verifier::with_settings(registry, Settings::new())
    }

    pub fn with_settings(registry: &'a LayerRegistry, settings: Settings) -> Verifier<'a> {
        Verifier { registry, settings }
    }

    pub fn registry(&self) -> &LayerRegistry {
        self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Verify the caller found in a described call stack
    ///
    /// The caller is the innermost frame not owned by [`Settings::verifier_module`].
    pub fn verify_stack(&self, stack: &CallStack, arguments: &[Argument]) -> Result<(), Error> {
        let frame = stack.caller(&self.settings.verifier_module)?;
        self.verify(&frame.call_context(), arguments)
    }

    /// Verify that a caller and the arguments it received respect the layering
    pub fn verify(&self, caller: &CallContext, arguments: &[Argument]) -> Result<(), Error> {
        let calling_name = caller.calling_name();
        let caller_layer = caller.layer_name();
        log::trace!(
            "{} name: {}, module: {}",
            caller.role,
            calling_name,
            caller_layer
        );

        // Callers outside of protected layers are always fine
        let caller_rank = match self.registry.rank(caller_layer) {
            Some(rank) => rank,
            None => return Ok(()),
        };

        if caller.parameters.len() != arguments.len() {
            return Err(Error::ArgumentCountMismatch {
                caller: calling_name.to_owned(),
                role: caller.role,
                declared: caller.parameters.len(),
                supplied: arguments.len(),
            });
        }

        let checks = self.settings.checks;
        for (index, (parameter, argument)) in caller.parameters.iter().zip(arguments).enumerate() {
            log::trace!(
                "Parameter type: {}, module: {}",
                parameter.name,
                parameter.module
            );
            if checks.contains(Checks::DECLARED_PARAMETERS)
                && parameter.module != caller_layer
                && self.registry.contains(&parameter.module)
            {
                return Err(Error::LayerBreak {
                    caller: calling_name.to_owned(),
                    role: caller.role,
                    index,
                    parameter_type: parameter.name.to_string(),
                    parameter_layer: parameter.module.to_string(),
                });
            }

            let argument_type = match argument.identity() {
                Some(argument_type) => argument_type,
                None => continue,
            };
            log::trace!(
                "Argument type: {}, module: {}",
                argument_type.name,
                argument_type.module
            );
            let argument_rank = match self.registry.rank(&argument_type.module) {
                Some(rank) => rank,
                None => continue,
            };

            match LayerRegistry::classify(caller_rank, argument_rank) {
                Dependency::Reverse if checks.contains(Checks::REVERSE_DEPENDENCIES) => {
                    return Err(Error::ReverseDependency {
                        caller: calling_name.to_owned(),
                        role: caller.role,
                        index,
                        argument_type: argument_type.name.to_string(),
                        argument_layer: argument_type.module.to_string(),
                    });
                }
                Dependency::Skipped if checks.contains(Checks::SKIPPED_LAYERS) => {
                    return Err(Error::SkippedLayerDependency {
                        caller: calling_name.to_owned(),
                        role: caller.role,
                        index,
                        argument_type: argument_type.name.to_string(),
                        argument_layer: argument_type.module.to_string(),
                    });
                }
                _ => (),
            }
        }

        Ok(())
    }
}
