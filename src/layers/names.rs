use std::borrow::{Borrow, Cow};
use std::fmt::{Debug, Display, Error as FmtError, Formatter};

/// Name of a protected layer
///
/// Layers stand in for assemblies or crates, so a name is a single identifier-ish token: it may
/// not be empty, contain whitespace, or contain `,` (which separates a module name from its
/// version and culture in fully qualified assembly names).
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct LayerName(Cow<'static, str>);

impl LayerName {
    /// Check if a string would be a valid layer name
    pub fn check_valid(name: impl AsRef<str>) -> Result<(), String> {
        let name = name.as_ref();
        if name.is_empty() {
            Err(String::from("Layer name is empty"))
        } else if name.contains(|c: char| c.is_whitespace() || c == ',') {
            Err(format!(
                "Layer name '{}' contains an illegal character",
                name
            ))
        } else {
            Ok(())
        }
    }

    /// Try to construct a name from a string
    pub fn from_string(name: impl Into<String>) -> Result<LayerName, String> {
        let name = name.into();
        Self::check_valid(&name)?;
        Ok(LayerName(Cow::Owned(name)))
    }

    /// Extract the raw underlying string name
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl AsRef<str> for LayerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Lets the registry be searched by plain `&str` module names
impl Borrow<str> for LayerName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Debug for LayerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.as_str())
    }
}

impl Display for LayerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::LayerName;

    #[test]
    fn valid_names() {
        assert!(LayerName::check_valid("Core").is_ok());
        assert!(LayerName::check_valid("my_crate").is_ok());
        assert!(LayerName::check_valid("Contoso.Service").is_ok());
        assert_eq!(LayerName::from_string("Core").unwrap().as_str(), "Core");
    }

    #[test]
    fn invalid_names() {
        assert!(LayerName::check_valid("").is_err(), "empty");
        assert!(LayerName::check_valid("two words").is_err(), "space");
        assert!(LayerName::check_valid("tab\tname").is_err(), "tab");
        assert!(
            LayerName::check_valid("Core, Version=1.0.0.0").is_err(),
            "full assembly name"
        );
    }
}
