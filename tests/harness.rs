use layerguard::layers::LayerRegistry;
use layerguard::verifier::{
    self, Argument, CallContext, CallStack, Checks, Error, Layered, Settings, StackFrame,
    TypeIdentity, Verifier,
};

fn ty(name: &'static str, module: &'static str) -> TypeIdentity {
    TypeIdentity::new(name, module)
}

/// Constructor in `caller_module` receiving a single argument from `argument_module`
fn single_argument(
    registry: &LayerRegistry,
    caller_module: &'static str,
    argument_module: &'static str,
) -> Result<(), Error> {
    let caller = CallContext::constructor(ty("Subject", caller_module))
        .with_parameter(ty("IThing", "Contracts"));
    verifier::verify(registry, &caller, &[Argument::from(ty("Thing", argument_module))])
}

#[test]
fn core_and_service() {
    let registry = LayerRegistry::new(["Core", "Service"]).unwrap();

    assert_eq!(single_argument(&registry, "Core", "Service"), Ok(()));
    assert_eq!(single_argument(&registry, "Core", "UI"), Ok(()));
    assert_eq!(single_argument(&registry, "Core", "Core"), Ok(()));
    assert!(matches!(
        single_argument(&registry, "Service", "Core"),
        Err(Error::ReverseDependency { .. })
    ));
}

#[test]
fn skipped_layer() {
    let registry = LayerRegistry::new(["A", "B", "C"]).unwrap();
    assert!(matches!(
        single_argument(&registry, "A", "C"),
        Err(Error::SkippedLayerDependency { .. })
    ));
}

#[test]
fn registry_from_configuration() {
    let path = std::env::temp_dir().join(format!("layerguard-harness-{}.txt", std::process::id()));
    std::fs::write(&path, "# protected layers\nCore\nService\nStorage\n").unwrap();
    let registry = LayerRegistry::load(&path);
    std::fs::remove_file(&path).unwrap();
    let registry = registry.unwrap();

    assert_eq!(registry.rank("Storage"), Some(2));
    assert_eq!(single_argument(&registry, "Service", "Storage"), Ok(()));
    assert!(matches!(
        single_argument(&registry, "Core", "Storage"),
        Err(Error::SkippedLayerDependency { .. })
    ));
}

/// Mimics a small application whose dependencies are injected as trait objects
mod app {
    use super::*;

    pub trait Clock: Layered {}

    pub struct SystemClock;

    impl Layered for SystemClock {
        fn type_identity(&self) -> TypeIdentity {
            ty("SystemClock", "Service")
        }
    }

    impl Clock for SystemClock {}

    pub struct TestClock;

    impl Layered for TestClock {
        fn type_identity(&self) -> TypeIdentity {
            ty("TestClock", "Testing")
        }
    }

    impl Clock for TestClock {}

    pub struct Repository<'a> {
        pub clock: &'a dyn Clock,
    }

    impl<'a> Repository<'a> {
        pub fn new(
            registry: &LayerRegistry,
            clock: &'a dyn Clock,
        ) -> Result<Repository<'a>, Error> {
            let caller = CallContext::constructor(ty("Repository", "Core"))
                .with_parameter(ty("IClock", "Contracts"));
            verifier::verify(registry, &caller, &[Argument::layered(clock)])?;
            Ok(Repository { clock })
        }
    }
}

#[test]
fn injected_trait_objects() {
    use app::*;

    let registry = LayerRegistry::new(["Core", "Service", "Testing"]).unwrap();

    let repository = Repository::new(&registry, &SystemClock).unwrap();
    assert_eq!(repository.clock.type_identity().module, "Service");

    match Repository::new(&registry, &TestClock) {
        Err(Error::SkippedLayerDependency {
            caller,
            argument_type,
            argument_layer,
            ..
        }) => {
            assert_eq!(caller, "Repository");
            assert_eq!(argument_type, "TestClock");
            assert_eq!(argument_layer, "Testing");
        }
        Err(other) => panic!("expected a skipped layer, got {:?}", other),
        Ok(_) => panic!("expected a skipped layer"),
    }
}

#[test]
fn rust_crates_as_layers() {
    // `String` is defined in `alloc` and `Duration` in `core`
    let registry = LayerRegistry::new(["alloc", "core"]).unwrap();

    let caller = CallContext::constructor_of::<String>().with_parameter(ty("Value", "Contracts"));
    let duration = std::time::Duration::from_secs(1);
    assert_eq!(
        verifier::verify(&registry, &caller, &[Argument::of(&duration)]),
        Ok(())
    );

    let caller = CallContext::constructor_of::<std::time::Duration>()
        .with_parameter(ty("Value", "Contracts"));
    let text = String::from("text");
    assert!(matches!(
        verifier::verify(&registry, &caller, &[Argument::of(&text)]),
        Err(Error::ReverseDependency { .. })
    ));
}

#[test]
fn described_stack() {
    let registry = LayerRegistry::new(["Core", "Service"]).unwrap();
    let verifier = Verifier::new(&registry);
    let own_module = verifier.settings().verifier_module.clone();

    let guard =
        StackFrame::method("check", ty("Guard", "layerguard"), vec![]).in_module(own_module);
    let repository = StackFrame::constructor(
        ty("Repository", "Core"),
        vec![ty("Clock", "Core"), ty("Store", "Contracts")],
    );
    let stack = CallStack::new(vec![guard.clone(), repository]);

    assert_eq!(
        verifier.verify_stack(&stack, &[Argument::from(ty("Clock", "Core")), Argument::NULL]),
        Ok(())
    );
    assert!(matches!(
        verifier.verify_stack(&stack, &[Argument::NULL]),
        Err(Error::ArgumentCountMismatch {
            declared: 2,
            supplied: 1,
            ..
        })
    ));

    let exhausted = CallStack::new(vec![guard]);
    assert!(matches!(
        verifier.verify_stack(&exhausted, &[]),
        Err(Error::CallerNotFound { frames: 1, .. })
    ));
}

#[test]
fn custom_verifier_module() {
    let registry = LayerRegistry::new(["Core", "Service"]).unwrap();
    let mut settings = Settings::new();
    settings.verifier_module = "Diagnostics".into();
    settings.checks = Checks::all() - Checks::DECLARED_PARAMETERS;
    let verifier = Verifier::with_settings(&registry, settings);

    let stack = CallStack::new(vec![
        StackFrame::method("assert_layers", ty("Asserts", "Diagnostics"), vec![]),
        StackFrame::constructor(ty("Handler", "Service"), vec![ty("Repository", "Core")]),
    ]);

    // The declared parameter would be a layer break, but that rule is off
    assert_eq!(verifier.verify_stack(&stack, &[Argument::NULL]), Ok(()));
    assert!(matches!(
        verifier.verify_stack(&stack, &[Argument::from(ty("Repository", "Core"))]),
        Err(Error::ReverseDependency { .. })
    ));
}
