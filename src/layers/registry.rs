use super::{Error, LayerName};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Ordered set of protected layers
///
/// The position of a layer is its _rank_. Lower ranks are more "core": a layer may depend on
/// itself and on the layer ranked right after it, nothing else.
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    /// Layers, ordered by rank
    layers: Vec<LayerName>,

    /// Inverse of `layers`
    ranks: HashMap<LayerName, usize>,
}

/// How a dependency relates to the layer depending on it
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Dependency {
    /// Both sides are in the same layer
    SameLayer,

    /// The dependency is in the layer ranked immediately after
    InnerAdjacent,

    /// The dependency is in a layer with a lower rank
    Reverse,

    /// The dependency is more than one rank further along, so layers in between are skipped
    Skipped,
}

impl Dependency {
    /// Is this dependency allowed?
    pub fn is_allowed(&self) -> bool {
        matches!(self, Dependency::SameLayer | Dependency::InnerAdjacent)
    }
}

impl LayerRegistry {
    /// Build a registry from layer names, in rank order
    pub fn new<I, S>(names: I) -> Result<LayerRegistry, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = LayerRegistry::default();
        for name in names {
            registry.push(name)?;
        }
        Ok(registry)
    }

    /// Parse the registry file format
    ///
    /// There is one layer per line, ranked by line order. Anything after a `#` is a comment and
    /// lines that are blank (after removing comments) are skipped.
    pub fn parse(source: &str) -> Result<LayerRegistry, Error> {
        let names = source
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty());
        LayerRegistry::new(names)
    }

    /// Read and parse a registry file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LayerRegistry, Error> {
        let path = path.as_ref();
        log::debug!("Loading layer registry from {:?}", path);
        let source = fs::read_to_string(path)?;
        LayerRegistry::parse(&source)
    }

    /// Add a layer after all of the existing ones
    pub fn push(&mut self, name: impl Into<String>) -> Result<usize, Error> {
        let name = LayerName::from_string(name).map_err(Error::MalformedName)?;
        if self.ranks.contains_key(&name) {
            return Err(Error::DuplicateLayer(name.as_str().to_owned()));
        }
        let rank = self.layers.len();
        self.ranks.insert(name.clone(), rank);
        self.layers.push(name);
        Ok(rank)
    }

    /// Rank of a layer, if it is registered
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Is this a protected layer?
    pub fn contains(&self, name: &str) -> bool {
        self.ranks.contains_key(name)
    }

    /// Layer at a given rank
    pub fn layer(&self, rank: usize) -> Option<&LayerName> {
        self.layers.get(rank)
    }

    /// Layers in rank order
    pub fn layers(&self) -> impl Iterator<Item = &LayerName> + '_ {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Relationship of a dependency at `dependency_rank` to a dependent at `dependent_rank`
    pub fn classify(dependent_rank: usize, dependency_rank: usize) -> Dependency {
        if dependency_rank < dependent_rank {
            Dependency::Reverse
        } else if dependency_rank == dependent_rank {
            Dependency::SameLayer
        } else if dependency_rank == dependent_rank + 1 {
            Dependency::InnerAdjacent
        } else {
            Dependency::Skipped
        }
    }
}
