use crate::error::{KavaError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Package type a version list is partitioned by: runtime kind crossed
/// with whether JavaFX is bundled. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavaPackageType {
    Jdk,
    Jre,
    JdkFx,
    JreFx,
}

impl JavaPackageType {
    /// Recover the tag from the Disco API's split representation.
    pub fn from_api(package_type: &str, javafx_bundled: bool) -> Result<Self> {
        match (package_type.to_lowercase().as_str(), javafx_bundled) {
            ("jdk", false) => Ok(JavaPackageType::Jdk),
            ("jre", false) => Ok(JavaPackageType::Jre),
            ("jdk", true) => Ok(JavaPackageType::JdkFx),
            ("jre", true) => Ok(JavaPackageType::JreFx),
            (other, _) => Err(KavaError::UnknownPackageType(other.to_string())),
        }
    }

    /// The `package_type` query parameter value.
    pub fn runtime(&self) -> &'static str {
        match self {
            JavaPackageType::Jdk | JavaPackageType::JdkFx => "jdk",
            JavaPackageType::Jre | JavaPackageType::JreFx => "jre",
        }
    }

    pub fn javafx_bundled(&self) -> bool {
        matches!(self, JavaPackageType::JdkFx | JavaPackageType::JreFx)
    }

    pub fn label(&self) -> &'static str {
        match self {
            JavaPackageType::Jdk => "JDK",
            JavaPackageType::Jre => "JRE",
            JavaPackageType::JdkFx => "JDK (FX)",
            JavaPackageType::JreFx => "JRE (FX)",
        }
    }
}

impl FromStr for JavaPackageType {
    type Err = KavaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jdk" => Ok(JavaPackageType::Jdk),
            "jre" => Ok(JavaPackageType::Jre),
            "jdkfx" | "jdk+fx" => Ok(JavaPackageType::JdkFx),
            "jrefx" | "jre+fx" => Ok(JavaPackageType::JreFx),
            other => Err(KavaError::UnknownPackageType(other.to_string())),
        }
    }
}

impl std::fmt::Display for JavaPackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            JavaPackageType::Jdk => "jdk",
            JavaPackageType::Jre => "jre",
            JavaPackageType::JdkFx => "jdkfx",
            JavaPackageType::JreFx => "jrefx",
        };
        write!(f, "{tag}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveType {
    TarGz,
    Zip,
    Dmg,
    Msi,
    Exe,
    Deb,
    Rpm,
}

impl FromStr for ArchiveType {
    type Err = KavaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tar.gz" | "tgz" => Ok(ArchiveType::TarGz),
            "zip" => Ok(ArchiveType::Zip),
            "dmg" => Ok(ArchiveType::Dmg),
            "msi" => Ok(ArchiveType::Msi),
            "exe" => Ok(ArchiveType::Exe),
            "deb" => Ok(ArchiveType::Deb),
            "rpm" => Ok(ArchiveType::Rpm),
            _ => Err(KavaError::InvalidMetadata(format!(
                "Unknown archive type: {s}"
            ))),
        }
    }
}

impl ArchiveType {
    pub fn extension(&self) -> &str {
        match self {
            ArchiveType::TarGz => "tar.gz",
            ArchiveType::Zip => "zip",
            ArchiveType::Dmg => "dmg",
            ArchiveType::Msi => "msi",
            ArchiveType::Exe => "exe",
            ArchiveType::Deb => "deb",
            ArchiveType::Rpm => "rpm",
        }
    }
}

impl std::fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
