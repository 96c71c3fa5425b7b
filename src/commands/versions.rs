use crate::api::DiscoClient;
use crate::config::KavaConfig;
use crate::discovery::{DiscoverySession, ListStatus, reconcile};
use crate::error::{KavaError, Result};
use crate::models::distribution::JavaDistribution;
use crate::models::package::JavaPackageType;
use crate::models::platform::Platform;
use crate::models::version::{LATEST_MAJOR, RemoteVersion};
use chrono::Local;
use colored::Colorize;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Fetch and display the downloadable runtimes of one distribution.
pub fn execute(
    config: &KavaConfig,
    distribution: Option<&str>,
    package_type: Option<&str>,
    json: bool,
    timeout: Option<u64>,
) -> Result<()> {
    let platform = Platform::current();
    let distribution = resolve_distribution(config, distribution)?;

    if !distribution.supports(platform) {
        return Err(KavaError::UnsupportedPlatform {
            distribution: distribution.display_name().to_string(),
            platform: platform.to_string(),
        });
    }

    let package_type_filter = package_type
        .map(JavaPackageType::from_str)
        .transpose()?;

    let timeout_secs = timeout.unwrap_or(config.api.fetch_timeout_secs);
    let mut client = DiscoClient::new().with_timeout(Duration::from_secs(timeout_secs));
    if let Some(base_url) = &config.api.base_url {
        client = client.with_base_url(base_url.clone());
    }

    let mut session = DiscoverySession::new(Arc::new(client), platform);
    session.get_or_fetch(distribution);

    let spinner = if json {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!(
            "Loading {} versions from foojay.io...",
            distribution.display_name()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    };

    if let Some(spinner) = &spinner {
        let spinner = spinner.clone();
        if let Some(list) = session.list_mut(distribution) {
            list.subscribe(Box::new(move |list| {
                let message = match list.status() {
                    ListStatus::Success => "Version list loaded",
                    ListStatus::Failed => "Version list failed to load",
                    ListStatus::Loading => "Loading...",
                };
                spinner.set_message(message);
            }));
        }
    }

    // The fetch itself retries with backoff, so give the wait room for
    // all attempts before declaring the list stuck.
    let wait_budget = Duration::from_secs(timeout_secs.saturating_mul(4));
    let wait_result = session.wait_for(distribution, wait_budget).map(|_| ());

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    // The command is done watching this list.
    if let Some(list) = session.list_mut(distribution) {
        list.unsubscribe();
    }
    wait_result?;

    let Some(list) = session.list(distribution) else {
        return Err(KavaError::VersionListFetch(
            "version list entry vanished".to_string(),
        ));
    };

    let Some(index) = list.versions() else {
        return Err(KavaError::VersionListFetch(format!(
            "Could not load the {} version list",
            distribution.display_name()
        )));
    };

    if index.is_empty() {
        println!(
            "{} {} has no downloadable runtimes for {platform}",
            "!".yellow(),
            distribution.display_name()
        );
        return Ok(());
    }

    let groups: BTreeMap<JavaPackageType, &Vec<RemoteVersion>> = index
        .iter()
        .filter(|(package_type, _)| package_type_filter.is_none_or(|f| **package_type == f))
        .map(|(package_type, versions)| (*package_type, versions))
        .collect();

    if groups.is_empty() {
        println!(
            "{} {} publishes no packages of the requested type for {platform}",
            "!".yellow(),
            distribution.display_name()
        );
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!(
        "Downloadable {} runtimes for {}:",
        distribution.display_name().cyan(),
        platform.to_string().cyan()
    );

    for (package_type, versions) in groups {
        let default_pick = reconcile(versions, None, LATEST_MAJOR);

        println!("\n{}", package_type.label().bold());

        let mut table = Table::new();
        table.set_header(vec!["", "Version", "Java", "Support", "Archive", "Size"]);
        for (i, version) in versions.iter().enumerate() {
            table.add_row(vec![
                if Some(i) == default_pick { "*" } else { "" }.to_string(),
                version.distribution_version.clone(),
                version.java_version.clone(),
                if version.is_lts { "LTS" } else { "" }.to_string(),
                version.archive_type.extension().to_string(),
                format_size(version.size),
            ]);
        }
        println!("{table}");
    }

    if let Some(loaded_at) = list.loaded_at() {
        info!(
            "Version list fetched at {}",
            loaded_at.with_timezone(&Local).format("%H:%M:%S")
        );
    }
    println!("\n{} marks the default selection", "*".green());

    Ok(())
}

fn resolve_distribution(
    config: &KavaConfig,
    requested: Option<&str>,
) -> Result<JavaDistribution> {
    if let Some(name) = requested {
        return name.parse();
    }
    if let Some(name) = &config.default_distribution {
        return name.parse();
    }
    Ok(JavaDistribution::Temurin)
}

fn format_size(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else {
        format!("{} KB", bytes.div_ceil(1024))
    }
}
