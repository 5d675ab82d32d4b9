//! Language version and extension selection.
//!
//! A [`Dialect`] is what the conformance layer checks keyword categories
//! against (see [`crate::keywords::is_accepted`]). The lexer itself is
//! dialect-agnostic: every dialect shares one token space.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// XQuery language version. Ordered, so "reserved since 3.0" is a
/// comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum XQueryVersion {
    V1_0,
    V3_0,
    #[default]
    V3_1,
}

impl XQueryVersion {
    pub const ALL: [XQueryVersion; 3] = [Self::V1_0, Self::V3_0, Self::V3_1];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V3_0 => "3.0",
            Self::V3_1 => "3.1",
        }
    }
}

impl fmt::Display for XQueryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for XQueryVersion {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|version| version.as_str() == s)
            .copied()
            .ok_or_else(|| ParseDialectError::UnknownVersion(s.to_owned()))
    }
}

bitflags! {
    /// Optional grammar extensions layered on a version.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Extensions: u8 {
        /// XQuery Update Facility.
        const UPDATE = 1 << 0;
        /// XQuery Scripting Extension.
        const SCRIPTING = 1 << 1;
        /// MarkLogic vendor syntax (JSON node tests, `binary()`).
        const MARKLOGIC = 1 << 2;
        /// Saxon vendor syntax (`tuple`, `enum` types).
        const SAXON = 1 << 3;
        const BASEX = 1 << 4;
    }
}

impl Extensions {
    /// Parse a single lowercase extension name (`update`, `scripting`,
    /// `marklogic`, `saxon`, `basex`).
    pub fn parse_one(name: &str) -> Result<Self, ParseDialectError> {
        match name {
            "update" => Ok(Self::UPDATE),
            "scripting" => Ok(Self::SCRIPTING),
            "marklogic" => Ok(Self::MARKLOGIC),
            "saxon" => Ok(Self::SAXON),
            "basex" => Ok(Self::BASEX),
            _ => Err(ParseDialectError::UnknownExtension(name.to_owned())),
        }
    }
}

/// A version plus the extensions enabled on top of it.
///
/// Defaults to XQuery 3.1 with no extensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dialect {
    pub version: XQueryVersion,
    pub extensions: Extensions,
}

impl Dialect {
    pub const fn new(version: XQueryVersion, extensions: Extensions) -> Self {
        Self {
            version,
            extensions,
        }
    }

    #[must_use]
    pub const fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = self.extensions.union(extensions);
        self
    }
}

/// A version or extension name that is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDialectError {
    #[error("unknown XQuery version `{0}` (expected 1.0, 3.0 or 3.1)")]
    UnknownVersion(String),
    #[error("unknown extension `{0}`")]
    UnknownExtension(String),
}

#[cfg(test)]
mod tests;
