//! Runtime-version thresholds: module bypass and per-server minimum bytecode level.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tool::ServerId;

/// Class-file major version of the target JDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeVersion(u32);

impl RuntimeVersion {
    pub const JAVA6: RuntimeVersion = RuntimeVersion(50);
    pub const JAVA8: RuntimeVersion = RuntimeVersion(52);
    pub const JAVA9: RuntimeVersion = RuntimeVersion(53);
    pub const JAVA11: RuntimeVersion = RuntimeVersion(55);
    pub const JAVA17: RuntimeVersion = RuntimeVersion(61);
    pub const JAVA21: RuntimeVersion = RuntimeVersion(65);

    const KNOWN: [(RuntimeVersion, &'static str); 6] = [
        (Self::JAVA6, "Java6"),
        (Self::JAVA8, "Java8"),
        (Self::JAVA9, "Java9"),
        (Self::JAVA11, "Java11"),
        (Self::JAVA17, "Java17"),
        (Self::JAVA21, "Java21"),
    ];

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Selectable JDK targets, ascending.
    pub fn known() -> impl Iterator<Item = RuntimeVersion> {
        Self::KNOWN.into_iter().map(|(version, _)| version)
    }

    /// `JavaN` label for a known target.
    pub fn label(self) -> Option<&'static str> {
        Self::KNOWN
            .iter()
            .find(|(version, _)| *version == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label} ({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// First class-file version that ships the module system.
pub const MODULE_SYSTEM_VERSION: RuntimeVersion = RuntimeVersion::JAVA9;

/// Floor applied to servers that only run on Java 8 bytecode or newer.
pub const MODULE_ERA_FLOOR: RuntimeVersion = RuntimeVersion::JAVA8;

/// Servers whose shells cannot target anything older than [`MODULE_ERA_FLOOR`].
pub const MINIMUM_RUNTIME_SERVERS: &[&str] = &["SpringWebFlux", "XXLJOB"];

/// Whether the generated shell must work around module encapsulation.
pub fn derive_bypass_module(version: RuntimeVersion) -> bool {
    version >= MODULE_SYSTEM_VERSION
}

/// Minimum runtime version the server requires, if any.
pub fn minimum_runtime_for(server: &ServerId) -> Option<RuntimeVersion> {
    MINIMUM_RUNTIME_SERVERS
        .contains(&server.as_str())
        .then_some(MODULE_ERA_FLOOR)
}
