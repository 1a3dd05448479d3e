use std::fmt;
use thiserror::Error;

/// Application name a key belongs to inside the Security World (e.g. `pkcs11`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

/// Key identifier, unique within an application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

fn validate(field: &'static str, value: &str) -> Result<(), KeyIdentError> {
    if value.is_empty() {
        return Err(KeyIdentError::Empty { field });
    }
    Ok(())
}

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self, KeyIdentError> {
        let name = name.into();
        validate("appname", &name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ident {
    pub fn new(ident: impl Into<String>) -> Result<Self, KeyIdentError> {
        let ident = ident.into();
        validate("ident", &ident)?;
        Ok(Self(ident))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full identity of a key: application name plus identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyIdent {
    pub appname: AppName,
    pub ident: Ident,
}

impl KeyIdent {
    pub fn new(appname: AppName, ident: Ident) -> Self {
        Self { appname, ident }
    }

    /// Validate and build from raw strings
    pub fn parse(appname: &str, ident: &str) -> Result<Self, KeyIdentError> {
        Ok(Self::new(AppName::new(appname)?, Ident::new(ident)?))
    }
}

impl fmt::Display for KeyIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.appname, self.ident)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIdentError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}
