use serde::{Deserialize, Serialize};
use std::fmt;

/// Module number within the Security World
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operational state of a module as reported by the Security World
///
/// States this crate doesn't know about read as `Unknown`, which is never
/// usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ModuleState {
    Usable,
    Unusable,
    Uninitialised,
    PreInitMode,
    InitMode,
    Failed,
    Foreign,
    AccelOnly,
    Unknown,
}

impl ModuleState {
    pub fn is_usable(self) -> bool {
        self == Self::Usable
    }
}

impl From<&str> for ModuleState {
    fn from(name: &str) -> Self {
        match name {
            "Usable" => Self::Usable,
            "Unusable" => Self::Unusable,
            "Uninitialised" => Self::Uninitialised,
            "PreInitMode" => Self::PreInitMode,
            "InitMode" => Self::InitMode,
            "Failed" => Self::Failed,
            "Foreign" => Self::Foreign,
            "AccelOnly" => Self::AccelOnly,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for ModuleState {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub module: ModuleId,
    pub state: ModuleState,
}

/// Snapshot of the modules available in the Security World
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldInfo {
    pub modules: Vec<ModuleInfo>,
}

impl WorldInfo {
    pub fn new(modules: Vec<ModuleInfo>) -> Self {
        Self { modules }
    }

    /// First module in list order whose state is `Usable`
    pub fn first_usable(&self) -> Option<&ModuleInfo> {
        self.modules.iter().find(|m| m.state.is_usable())
    }
}
