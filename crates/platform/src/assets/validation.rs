//! Critical content directories that must be installed before startup.

use serde::Serialize;

use crate::error::{PlatformError, Result};

/// Top-level content directories whose absence blocks startup.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum CriticalAsset {
    Dialog,
    Fonts,
    Effects,
    Atlases,
    #[strum(serialize = "FMOD")]
    #[serde(rename = "FMOD")]
    Fmod,
}

impl CriticalAsset {
    /// Validation order.
    pub const ALL: [CriticalAsset; 5] = [
        CriticalAsset::Dialog,
        CriticalAsset::Fonts,
        CriticalAsset::Effects,
        CriticalAsset::Atlases,
        CriticalAsset::Fmod,
    ];

    /// Directory name under the content root.
    pub fn dir_name(self) -> &'static str {
        match self {
            CriticalAsset::Dialog => "Dialog",
            CriticalAsset::Fonts => "Fonts",
            CriticalAsset::Effects => "Effects",
            CriticalAsset::Atlases => "Atlases",
            CriticalAsset::Fmod => "FMOD",
        }
    }
}

/// Outcome of a content check; derived on demand and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentValidationResult {
    pub ok: bool,
    /// Missing assets, in validation order.
    pub missing: Vec<CriticalAsset>,
}

impl ContentValidationResult {
    pub fn from_missing(missing: Vec<CriticalAsset>) -> Self {
        Self {
            ok: missing.is_empty(),
            missing,
        }
    }

    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(|asset| asset.dir_name()).collect()
    }

    /// Convert a failed check into [`PlatformError::ValidationFailure`].
    pub fn into_result(self) -> Result<()> {
        if self.ok {
            return Ok(());
        }
        Err(PlatformError::ValidationFailure {
            missing: self.missing_names().into_iter().map(String::from).collect(),
        })
    }
}
