use crate::error::{KavaError, Result};
use crate::models::platform::{Architecture, OperatingSystem, Platform};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The distributions the launcher offers for download.
///
/// This is a closed set: the selector only ever shows vendors whose
/// packages have been vetted against the game's runtime requirements,
/// so unlike the Disco API itself there is no open-ended variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavaDistribution {
    Temurin,
    Liberica,
    Zulu,
    Corretto,
    Semeru,
}

impl JavaDistribution {
    pub const ALL: [JavaDistribution; 5] = [
        JavaDistribution::Temurin,
        JavaDistribution::Liberica,
        JavaDistribution::Zulu,
        JavaDistribution::Corretto,
        JavaDistribution::Semeru,
    ];

    /// The `distribution` query parameter the Disco API expects.
    pub fn api_parameter(&self) -> &'static str {
        match self {
            JavaDistribution::Temurin => "temurin",
            JavaDistribution::Liberica => "liberica",
            JavaDistribution::Zulu => "zulu",
            JavaDistribution::Corretto => "corretto",
            JavaDistribution::Semeru => "semeru",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JavaDistribution::Temurin => "Eclipse Temurin",
            JavaDistribution::Liberica => "BellSoft Liberica",
            JavaDistribution::Zulu => "Azul Zulu",
            JavaDistribution::Corretto => "Amazon Corretto",
            JavaDistribution::Semeru => "IBM Semeru",
        }
    }

    /// Whether the vendor publishes builds for the given platform.
    ///
    /// Vendors do not all cover the same platform matrix; the selector
    /// must not offer a distribution that has nothing to download.
    pub fn supports(&self, platform: Platform) -> bool {
        use Architecture::*;
        use OperatingSystem::*;

        match self {
            JavaDistribution::Temurin => match platform.arch {
                X64 | Aarch64 => true,
                X86 => platform.os == Windows,
                Riscv64 | Arm32 => platform.os == Linux,
            },
            JavaDistribution::Liberica => match platform.arch {
                X64 | Aarch64 => true,
                X86 => matches!(platform.os, Windows | Linux),
                Riscv64 | Arm32 => platform.os == Linux,
            },
            JavaDistribution::Zulu => match platform.arch {
                X64 | Aarch64 => true,
                X86 => matches!(platform.os, Windows | Linux),
                Arm32 => platform.os == Linux,
                Riscv64 => false,
            },
            JavaDistribution::Corretto => {
                matches!(platform.arch, X64 | Aarch64) && platform.os != Windows
                    || platform.arch == X64 && platform.os == Windows
            }
            JavaDistribution::Semeru => {
                matches!(platform.arch, X64 | Aarch64) && matches!(platform.os, Linux | MacOS)
                    || platform.arch == X64 && platform.os == Windows
            }
        }
    }

    /// Distributions eligible to display on the given platform.
    pub fn supported_on(platform: Platform) -> Vec<JavaDistribution> {
        Self::ALL
            .into_iter()
            .filter(|distribution| distribution.supports(platform))
            .collect()
    }
}

impl FromStr for JavaDistribution {
    type Err = KavaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "temurin" | "adoptium" | "adoptopenjdk" => Ok(JavaDistribution::Temurin),
            "liberica" | "bellsoft" => Ok(JavaDistribution::Liberica),
            "zulu" | "azul" => Ok(JavaDistribution::Zulu),
            "corretto" | "amazon" => Ok(JavaDistribution::Corretto),
            "semeru" | "ibm" => Ok(JavaDistribution::Semeru),
            other => Err(KavaError::UnknownDistribution(other.to_string())),
        }
    }
}

impl std::fmt::Display for JavaDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
