use thiserror::Error;

#[derive(Error, Debug)]
pub enum KavaError {
    #[error("Unknown distribution '{0}'")]
    UnknownDistribution(String),

    #[error("Unknown package type '{0}'")]
    UnknownPackageType(String),

    #[error("{distribution} does not publish builds for {platform}")]
    UnsupportedPlatform {
        distribution: String,
        platform: String,
    },

    #[error("Failed to fetch version list: {0}")]
    VersionListFetch(String),

    #[error("Timed out waiting for the {0} version list")]
    VersionListTimeout(String),

    #[error("Invalid package metadata: {0}")]
    InvalidMetadata(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KavaError>;

pub fn get_exit_code(error: &KavaError) -> i32 {
    match error {
        KavaError::UnknownDistribution(_)
        | KavaError::UnknownPackageType(_)
        | KavaError::InvalidConfig(_)
        | KavaError::ConfigFile(_) => 2,

        KavaError::UnsupportedPlatform { .. } => 3,

        KavaError::NetworkError(_)
        | KavaError::Http(_)
        | KavaError::VersionListFetch(_)
        | KavaError::VersionListTimeout(_) => 20,

        _ => 1,
    }
}

/// Render an error and its source chain for the top-level handler.
pub fn format_error_chain(error: &KavaError) -> String {
    let mut output = format!("Error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        output.push_str(&format!("\nCaused by: {cause}"));
        source = cause.source();
    }

    if matches!(
        error,
        KavaError::NetworkError(_)
            | KavaError::Http(_)
            | KavaError::VersionListFetch(_)
            | KavaError::VersionListTimeout(_)
    ) {
        output.push_str("\n\nCheck your internet connection and try again.");
    }

    output
}
