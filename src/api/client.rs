use crate::api::models::*;
use crate::api::query::PackageQuery;
use crate::error::{KavaError, Result};
use attohttpc::{RequestBuilder, Session};
use log::debug;
use retry::{OperationResult, delay::Exponential, retry_with_index};
use serde::Deserialize;
use std::thread;
use std::time::Duration;

const FOOJAY_API_BASE: &str = "https://api.foojay.io/disco";
const API_VERSION: &str = "v3.0";
const USER_AGENT: &str = concat!("kava/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: u64 = 30;
const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct DiscoClient {
    session: Session,
    base_url: String,
}

impl DiscoClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", USER_AGENT);
        session.timeout(Duration::from_secs(DEFAULT_TIMEOUT));
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: FOOJAY_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }

    pub fn get_distributions(&self) -> Result<Vec<Distribution>> {
        let url = format!("{}/{}/distributions", self.base_url, API_VERSION);
        self.execute_with_retry(move || self.session.get(&url))
    }

    pub fn get_packages(&self, query: Option<PackageQuery>) -> Result<Vec<Package>> {
        let url = format!("{}/{}/packages", self.base_url, API_VERSION);
        self.execute_with_retry(move || {
            let mut request = self.session.get(&url);

            // Build query parameters for logging
            let mut query_params = Vec::new();

            if let Some(ref q) = query {
                if let Some(ref version) = q.version {
                    request = request.param("version", version);
                    query_params.push(format!("version={version}"));
                }
                if let Some(ref distribution) = q.distribution {
                    request = request.param("distribution", distribution);
                    query_params.push(format!("distribution={distribution}"));
                }
                if let Some(ref architecture) = q.architecture {
                    request = request.param("architecture", architecture);
                    query_params.push(format!("architecture={architecture}"));
                }
                if let Some(ref package_type) = q.package_type {
                    request = request.param("package_type", package_type);
                    query_params.push(format!("package_type={package_type}"));
                }
                if let Some(ref operating_system) = q.operating_system {
                    request = request.param("operating_system", operating_system);
                    query_params.push(format!("operating_system={operating_system}"));
                }
                if let Some(ref archive_type) = q.archive_type {
                    request = request.param("archive_type", archive_type);
                    query_params.push(format!("archive_type={archive_type}"));
                }
                if let Some(ref latest) = q.latest {
                    request = request.param("latest", latest);
                    query_params.push(format!("latest={latest}"));
                }
                if let Some(directly_downloadable) = q.directly_downloadable {
                    request =
                        request.param("directly_downloadable", directly_downloadable.to_string());
                    query_params.push(format!("directly_downloadable={directly_downloadable}"));
                }
                if let Some(javafx_bundled) = q.javafx_bundled {
                    request = request.param("javafx_bundled", javafx_bundled.to_string());
                    query_params.push(format!("javafx_bundled={javafx_bundled}"));
                }

                let full_url = if query_params.is_empty() {
                    url.clone()
                } else {
                    format!("{url}?{}", query_params.join("&"))
                };
                debug!("API Request: {full_url}");
            }

            request
        })
    }

    fn execute_with_retry<T, F>(&self, request_builder: F) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        F: Fn() -> RequestBuilder,
    {
        let result = retry_with_index(
            Exponential::from_millis(INITIAL_BACKOFF_MS).take(MAX_RETRIES),
            |current_try| {
                let response = match request_builder().send() {
                    Ok(resp) => resp,
                    Err(e) => {
                        let user_error = KavaError::VersionListFetch(format!(
                            "Network error connecting to foojay.io API {API_VERSION}: {e}. Please check your internet connection and try again."
                        ));

                        if current_try < (MAX_RETRIES - 1) as u64 {
                            return OperationResult::Retry(user_error);
                        }
                        return OperationResult::Err(user_error);
                    }
                };

                if response.status() == attohttpc::StatusCode::TOO_MANY_REQUESTS
                    && current_try < (MAX_RETRIES - 1) as u64
                {
                    if let Some(retry_after) = response.headers().get("Retry-After") {
                        if let Ok(retry_str) = retry_after.to_str() {
                            if let Ok(seconds) = retry_str.parse::<u64>() {
                                thread::sleep(Duration::from_secs(seconds));
                            }
                        }
                    }
                    return OperationResult::Retry(KavaError::VersionListFetch(
                        "Too many requests. Waiting before retrying...".to_string(),
                    ));
                }

                if !response.is_success() {
                    let status = response.status();
                    let error_msg = match status.as_u16() {
                        404 => format!(
                            "The requested resource was not found on foojay.io API {API_VERSION}. The API endpoint may have changed."
                        ),
                        500..=599 => format!(
                            "Server error occurred on foojay.io API {API_VERSION}. Please try again later."
                        ),
                        401 | 403 => format!(
                            "Authentication failed for foojay.io API {API_VERSION}."
                        ),
                        _ => format!(
                            "HTTP error ({}) from foojay.io API {API_VERSION}: {}",
                            status.as_u16(),
                            status.canonical_reason().unwrap_or("Unknown error")
                        ),
                    };
                    return OperationResult::Err(KavaError::VersionListFetch(error_msg));
                }

                match response.text() {
                    Ok(body) => match parse_result_envelope(&body) {
                        Ok(data) => OperationResult::Ok(data),
                        Err(e) => OperationResult::Err(e),
                    },
                    Err(e) => OperationResult::Err(KavaError::VersionListFetch(format!(
                        "Failed to read response body: {e}"
                    ))),
                }
            },
        );

        result.map_err(|e| e.error)
    }
}

impl Default for DiscoClient {
    fn default() -> Self {
        Self::new()
    }
}

// API v3.0 always wraps responses in a {"result": ...} envelope.
fn parse_result_envelope<T>(body: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let json_value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        debug!("Failed to parse as JSON: {e}");
        KavaError::VersionListFetch(format!(
            "Invalid JSON response from API {API_VERSION}: {e}"
        ))
    })?;

    let Some(result) = json_value.get("result") else {
        return Err(KavaError::VersionListFetch(format!(
            "Invalid API {API_VERSION} response: missing 'result' field"
        )));
    };

    serde_json::from_value::<T>(result.clone()).map_err(|e| {
        debug!("Failed to parse 'result' field: {e}");
        KavaError::VersionListFetch(format!(
            "Failed to parse API {API_VERSION} response: {e}"
        ))
    })
}
