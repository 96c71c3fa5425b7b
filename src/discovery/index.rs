use crate::discovery::list::PackageIndex;
use crate::models::version::{LEGACY_MAJOR, RemoteVersion};
use std::collections::BTreeMap;

/// Categorize a raw fetch result into the index the selector consumes.
///
/// Within each package type, one entry is kept per major version (a
/// later package replaces an earlier one with the same major), and only
/// major lines worth offering survive: LTS releases, the newest major
/// of the group, and the major some game versions require exactly
/// ([`LEGACY_MAJOR`]). Groups are emitted newest major first.
pub fn categorize(versions: Vec<RemoteVersion>) -> PackageIndex {
    let mut grouped: BTreeMap<_, BTreeMap<u32, RemoteVersion>> = BTreeMap::new();
    for version in versions {
        grouped
            .entry(version.package_type)
            .or_default()
            .insert(version.jdk_version, version);
    }

    let mut index = PackageIndex::new();
    for (package_type, by_major) in grouped {
        let newest = by_major.keys().next_back().copied();
        let kept: Vec<RemoteVersion> = by_major
            .into_values()
            .rev()
            .filter(|version| {
                version.is_lts
                    || Some(version.jdk_version) == newest
                    || version.jdk_version == LEGACY_MAJOR
            })
            .collect();
        index.insert(package_type, kept);
    }
    index
}
