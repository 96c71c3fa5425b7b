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

use crate::models::version::RemoteVersion;

/// Pick the selection index in a freshly exposed version list.
///
/// `previous` is the selection from the list being replaced, if any;
/// `preferred_major` is the newest major the game is known to want.
/// Precedence, first match wins:
///
/// 1. the exact build the user had selected (vendor version string);
/// 2. any build of the same major line;
/// 3. any build of `preferred_major`;
/// 4. any LTS build;
/// 5. the first entry.
///
/// Each rule takes the first hit in list order; callers wanting a
/// secondary preference (e.g. newest build first) must order
/// `versions` accordingly before calling.
pub fn reconcile(
    versions: &[RemoteVersion],
    previous: Option<&RemoteVersion>,
    preferred_major: u32,
) -> Option<usize> {
    if versions.is_empty() {
        return None;
    }

    if let Some(previous) = previous {
        if let Some(i) = versions
            .iter()
            .position(|v| v.distribution_version == previous.distribution_version)
        {
            return Some(i);
        }
        if let Some(i) = versions
            .iter()
            .position(|v| v.jdk_version == previous.jdk_version)
        {
            return Some(i);
        }
    }

    if let Some(i) = versions
        .iter()
        .position(|v| v.jdk_version == preferred_major)
    {
        return Some(i);
    }

    if let Some(i) = versions.iter().position(|v| v.is_lts) {
        return Some(i);
    }

    Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::package::{ArchiveType, JavaPackageType};

    fn version(distribution_version: &str, jdk_version: u32, is_lts: bool) -> RemoteVersion {
        RemoteVersion {
            id: format!("id-{distribution_version}"),
            distribution_version: distribution_version.to_string(),
            java_version: distribution_version.to_string(),
            jdk_version,
            is_lts,
            package_type: JavaPackageType::Jdk,
            archive_type: ArchiveType::TarGz,
            filename: format!("jdk-{distribution_version}.tar.gz"),
            size: 1,
            download_uri: "https://example.com/pkg".to_string(),
            info_uri: None,
        }
    }

    #[test]
    fn test_exact_match_wins_over_everything() {
        let versions = vec![version("17.0.1", 17, false), version("21.0.1", 21, true)];
        let previous = version("17.0.1", 17, false);
        assert_eq!(reconcile(&versions, Some(&previous), 21), Some(0));
    }

    #[test]
    fn test_same_major_beats_preferred_and_lts() {
        let versions = vec![version("17.0.1", 17, false), version("21.0.1", 21, true)];
        // Same major line, different build string.
        let previous = version("17.0.2", 17, false);
        assert_eq!(reconcile(&versions, Some(&previous), 21), Some(0));
    }

    #[test]
    fn test_preferred_major_without_previous() {
        let versions = vec![version("11.0.9", 11, true), version("21.0.1", 21, false)];
        assert_eq!(reconcile(&versions, None, 21), Some(1));
    }

    #[test]
    fn test_lts_fallback_when_preferred_absent() {
        let versions = vec![version("17.0.1", 17, false), version("18.0.2", 18, true)];
        assert_eq!(reconcile(&versions, None, 99), Some(1));
    }

    #[test]
    fn test_first_entry_is_the_last_resort() {
        let versions = vec![version("18.0.1", 18, false), version("19.0.1", 19, false)];
        assert_eq!(reconcile(&versions, None, 99), Some(0));
    }

    #[test]
    fn test_empty_list_reconciles_to_none() {
        assert_eq!(reconcile(&[], None, 21), None);
        let previous = version("17.0.1", 17, false);
        assert_eq!(reconcile(&[], Some(&previous), 21), None);
    }

    #[test]
    fn test_stale_previous_falls_through_to_preferred() {
        let versions = vec![version("11.0.9", 11, false), version("21.0.1", 21, false)];
        let previous = version("8.0.392", 8, true);
        assert_eq!(reconcile(&versions, Some(&previous), 21), Some(1));
    }

    #[test]
    fn test_first_hit_wins_within_a_rule() {
        let versions = vec![
            version("21.0.1", 21, true),
            version("21.0.2", 21, true),
            version("17.0.1", 17, true),
        ];
        // Two entries share the previous major; natural order decides.
        let previous = version("21.0.9", 21, false);
        assert_eq!(reconcile(&versions, Some(&previous), 17), Some(0));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let versions = vec![version("17.0.1", 17, false), version("21.0.1", 21, true)];
        let previous = version("17.0.2", 17, false);
        let first = reconcile(&versions, Some(&previous), 21);
        let second = reconcile(&versions, Some(&previous), 21);
        assert_eq!(first, second);
    }
}
