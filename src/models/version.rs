// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::api::Package;
use crate::error::{KavaError, Result};
use crate::models::package::{ArchiveType, JavaPackageType};
use serde::{Deserialize, Serialize};

/// The newest major version the supported game versions require.
pub const LATEST_MAJOR: u32 = 21;

/// Game versions around 1.17 require exactly Java 16, so that major
/// stays downloadable even though it is neither LTS nor current.
pub const LEGACY_MAJOR: u32 = 16;

/// One downloadable package of a Java distribution.
///
/// Immutable once constructed; owned by the version list that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVersion {
    pub id: String,
    /// Vendor build string, opaque and display-comparable.
    pub distribution_version: String,
    pub java_version: String,
    /// Major version, e.g. 17 or 21.
    pub jdk_version: u32,
    pub is_lts: bool,
    pub package_type: JavaPackageType,
    pub archive_type: ArchiveType,
    pub filename: String,
    pub size: u64,
    pub download_uri: String,
    pub info_uri: Option<String>,
}

impl RemoteVersion {
    /// Convert a Disco API package into the launcher's model.
    ///
    /// Fails on packages whose package type or archive type the
    /// launcher does not handle; callers skip those entries.
    pub fn from_package(package: Package) -> Result<Self> {
        if !package.directly_downloadable {
            return Err(KavaError::InvalidMetadata(format!(
                "package {} is not directly downloadable",
                package.id
            )));
        }

        let package_type =
            JavaPackageType::from_api(&package.package_type, package.javafx_bundled)?;
        let archive_type = package.archive_type.parse::<ArchiveType>()?;

        let is_lts = package
            .term_of_support
            .as_deref()
            .is_some_and(|term| term.eq_ignore_ascii_case("lts"));

        Ok(Self {
            id: package.id,
            distribution_version: package.distribution_version,
            java_version: package.java_version,
            jdk_version: package.jdk_version,
            is_lts,
            package_type,
            archive_type,
            filename: package.filename,
            size: package.size,
            download_uri: package.links.pkg_download_redirect,
            info_uri: package.links.pkg_info_uri,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Links;

    fn sample_package() -> Package {
        Package {
            id: "4c4f879899012ff0a8b2e2117df03b0e".to_string(),
            archive_type: "tar.gz".to_string(),
            distribution: "temurin".to_string(),
            major_version: 21,
            java_version: "21.0.7+6".to_string(),
            distribution_version: "21.0.7".to_string(),
            jdk_version: 21,
            package_type: "jdk".to_string(),
            javafx_bundled: false,
            term_of_support: Some("lts".to_string()),
            release_status: Some("ga".to_string()),
            directly_downloadable: true,
            filename: "OpenJDK21U-jdk_x64_linux_hotspot_21.0.7_6.tar.gz".to_string(),
            links: Links {
                pkg_download_redirect:
                    "https://api.foojay.io/disco/v3.0/ids/4c4f879899012ff0a8b2e2117df03b0e/redirect"
                        .to_string(),
                pkg_info_uri: Some(
                    "https://api.foojay.io/disco/v3.0/ids/4c4f879899012ff0a8b2e2117df03b0e"
                        .to_string(),
                ),
            },
            free_use_in_production: true,
            size: 206919519,
            operating_system: "linux".to_string(),
            lib_c_type: Some("glibc".to_string()),
        }
    }

    #[test]
    fn test_from_package() {
        let version = RemoteVersion::from_package(sample_package()).unwrap();
        assert_eq!(version.distribution_version, "21.0.7");
        assert_eq!(version.jdk_version, 21);
        assert!(version.is_lts);
        assert_eq!(version.package_type, JavaPackageType::Jdk);
        assert_eq!(version.archive_type, ArchiveType::TarGz);
    }

    #[test]
    fn test_from_package_sts_is_not_lts() {
        let mut package = sample_package();
        package.term_of_support = Some("sts".to_string());
        let version = RemoteVersion::from_package(package).unwrap();
        assert!(!version.is_lts);

        let mut package = sample_package();
        package.term_of_support = None;
        let version = RemoteVersion::from_package(package).unwrap();
        assert!(!version.is_lts);
    }

    #[test]
    fn test_from_package_rejects_indirect_downloads() {
        let mut package = sample_package();
        package.directly_downloadable = false;
        assert!(RemoteVersion::from_package(package).is_err());
    }

    #[test]
    fn test_from_package_rejects_unknown_archive() {
        let mut package = sample_package();
        package.archive_type = "cab".to_string();
        assert!(RemoteVersion::from_package(package).is_err());
    }
}
