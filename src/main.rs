use layerguard::layers::{self, LayerRegistry};
use layerguard::verifier::{self, Argument, CallContext, TypeIdentity};

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::process;

/// Ways a run can go wrong
#[derive(Debug)]
enum Error {
    Registry(layers::Error),
    Verification(verifier::Error),
    BadArgument(String),
}

impl From<layers::Error> for Error {
    fn from(err: layers::Error) -> Error {
        Error::Registry(err)
    }
}

impl From<verifier::Error> for Error {
    fn from(err: verifier::Error) -> Error {
        Error::Verification(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::Registry(err) => Display::fmt(err, f),
            Error::Verification(err) => Display::fmt(err, f),
            Error::BadArgument(msg) => f.write_str(msg),
        }
    }
}

fn main() {
    env_logger::init();

    let matches = command().get_matches();
    match Request::from_matches(&matches).run() {
        Ok(()) => log::info!("No layering violations found"),
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    }
}

fn command() -> Command {
    Command::new("Layer separation verifier")
        .version(clap::crate_version!())
        .author("Alec Theriault <alec.theriault@gmail.com>")
        .about("Check that a constructor only depends on its own or the adjacent protected layer")
        .arg(
            Arg::new("layers-file")
                .long("layers-file")
                .value_name("FILE")
                .help("Read protected layers from a file (one per line, in rank order)"),
        )
        .arg(
            Arg::new("layer")
                .long("layer")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Add a protected layer (after those from `--layers-file`)"),
        )
        .arg(
            Arg::new("caller-module")
                .long("caller-module")
                .value_name("MODULE")
                .required(true)
                .help("Module declaring the caller"),
        )
        .arg(
            Arg::new("constructor")
                .long("constructor")
                .value_name("TYPE")
                .help("The caller is the constructor of this type"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .value_name("NAME")
                .requires("declaring-type")
                .help("The caller is this method"),
        )
        .arg(
            Arg::new("declaring-type")
                .long("declaring-type")
                .value_name("TYPE")
                .conflicts_with("constructor")
                .help("Type declaring `--method`"),
        )
        .group(
            ArgGroup::new("caller")
                .args(["constructor", "method"])
                .required(true),
        )
        .arg(
            Arg::new("param")
                .long("param")
                .value_name("TYPE@MODULE")
                .action(ArgAction::Append)
                .help("Declared parameter type (eg. `IClock@Core`)"),
        )
        .arg(
            Arg::new("arg")
                .long("arg")
                .value_name("TYPE@MODULE")
                .action(ArgAction::Append)
                .help("Type of an actual argument, or `null`"),
        )
}

/// One verification, as described on the command line
#[derive(Debug, Default)]
struct Request {
    layers_file: Option<String>,
    layers: Vec<String>,
    caller_module: String,
    constructor: Option<String>,
    method: Option<String>,
    declaring_type: Option<String>,
    params: Vec<String>,
    args: Vec<String>,
}

impl Request {
    fn from_matches(matches: &ArgMatches) -> Request {
        let one = |id: &str| matches.get_one::<String>(id).cloned();
        let many = |id: &str| {
            matches
                .get_many::<String>(id)
                .into_iter()
                .flatten()
                .cloned()
                .collect::<Vec<_>>()
        };
        Request {
            layers_file: one("layers-file"),
            layers: many("layer"),
            caller_module: one("caller-module").unwrap_or_default(),
            constructor: one("constructor"),
            method: one("method"),
            declaring_type: one("declaring-type"),
            params: many("param"),
            args: many("arg"),
        }
    }

    fn run(&self) -> Result<(), Error> {
        let registry = self.registry()?;
        let caller = self.caller()?;
        let arguments = self.arguments()?;
        verifier::verify(&registry, &caller, &arguments)?;
        Ok(())
    }

    /// Layers from the file rank before those given with `--layer`
    fn registry(&self) -> Result<LayerRegistry, Error> {
        let mut registry = match &self.layers_file {
            Some(path) => LayerRegistry::load(path)?,
            None => LayerRegistry::default(),
        };
        for layer in &self.layers {
            registry.push(layer.as_str())?;
        }
        log::debug!("Protected layers: {:?}", registry.layers().collect::<Vec<_>>());
        Ok(registry)
    }

    fn caller(&self) -> Result<CallContext, Error> {
        let module = self.caller_module.clone();
        let caller = match (&self.constructor, &self.method, &self.declaring_type) {
            (Some(type_name), None, None) => {
                CallContext::constructor(TypeIdentity::new(type_name.clone(), module))
            }
            (None, Some(method), Some(declaring_type)) => CallContext::method(
                method.clone(),
                TypeIdentity::new(declaring_type.clone(), module),
            ),
            _ => {
                return Err(Error::BadArgument(String::from(
                    "Expected either `--constructor` or both `--method` and `--declaring-type`",
                )))
            }
        };

        let parameters = self
            .params
            .iter()
            .map(|param| parse_type(param))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(caller.with_parameters(parameters))
    }

    fn arguments(&self) -> Result<Vec<Argument>, Error> {
        self.args.iter().map(|arg| parse_argument(arg)).collect()
    }
}

/// Parse `TYPE@MODULE`
fn parse_type(text: &str) -> Result<TypeIdentity, Error> {
    match text.split_once('@') {
        Some((name, module)) if !name.is_empty() && !module.is_empty() => {
            Ok(TypeIdentity::new(name.to_owned(), module.to_owned()))
        }
        _ => Err(Error::BadArgument(format!(
            "Expected `TYPE@MODULE`, but got '{}'",
            text
        ))),
    }
}

/// Parse `TYPE@MODULE` or `null`
fn parse_argument(text: &str) -> Result<Argument, Error> {
    if text == "null" {
        Ok(Argument::NULL)
    } else {
        parse_type(text).map(Argument::from)
    }
}
