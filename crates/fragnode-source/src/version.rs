use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SourceError;

/// GLSL `#version` values a pass may target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GlslVersion {
    V100,
    V120,
    V130,
    V140,
    V150,
    #[default]
    V330,
    V330Core,
    V400,
    V410,
    V420,
    V430,
    V440,
}

impl GlslVersion {
    pub const ALL: [GlslVersion; 12] = [
        GlslVersion::V100,
        GlslVersion::V120,
        GlslVersion::V130,
        GlslVersion::V140,
        GlslVersion::V150,
        GlslVersion::V330,
        GlslVersion::V330Core,
        GlslVersion::V400,
        GlslVersion::V410,
        GlslVersion::V420,
        GlslVersion::V430,
        GlslVersion::V440,
    ];

    /// The text that follows `#version`.
    pub fn as_str(self) -> &'static str {
        match self {
            GlslVersion::V100 => "100",
            GlslVersion::V120 => "120",
            GlslVersion::V130 => "130",
            GlslVersion::V140 => "140",
            GlslVersion::V150 => "150",
            GlslVersion::V330 => "330",
            GlslVersion::V330Core => "330 core",
            GlslVersion::V400 => "400",
            GlslVersion::V410 => "410",
            GlslVersion::V420 => "420",
            GlslVersion::V430 => "430",
            GlslVersion::V440 => "440",
        }
    }

    /// `attribute`/`varying` era. Everything else uses `in`/`out`.
    pub fn is_legacy(self) -> bool {
        matches!(self, GlslVersion::V100 | GlslVersion::V120)
    }
}

impl fmt::Display for GlslVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlslVersion {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        GlslVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SourceError::UnknownVersion(s.to_string()))
    }
}

impl TryFrom<String> for GlslVersion {
    type Error = SourceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GlslVersion> for String {
    fn from(v: GlslVersion) -> Self {
        v.as_str().to_string()
    }
}
