use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub archive_type: String,
    pub distribution: String,
    pub major_version: u32,
    pub java_version: String,
    pub distribution_version: String,
    pub jdk_version: u32,
    pub package_type: String,
    #[serde(default)]
    pub javafx_bundled: bool,
    #[serde(default)]
    pub term_of_support: Option<String>,
    #[serde(default)]
    pub release_status: Option<String>,
    pub directly_downloadable: bool,
    pub filename: String,
    pub links: Links,
    pub free_use_in_production: bool,
    pub size: u64,
    pub operating_system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_c_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub pkg_download_redirect: String,
    pub pkg_info_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub api_parameter: String,
    pub maintained: bool,
    pub available: bool,
    pub build_of_openjdk: bool,
    pub build_of_graalvm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_use_in_production: Option<bool>,
    pub synonyms: Vec<String>,
    pub versions: Vec<String>,
}
