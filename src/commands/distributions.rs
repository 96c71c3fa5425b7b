use crate::api::DiscoClient;
use crate::config::KavaConfig;
use crate::error::Result;
use crate::models::distribution::JavaDistribution;
use crate::models::platform::Platform;
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;

#[derive(Serialize)]
struct DistributionRow<'a> {
    name: &'a str,
    api_parameter: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    maintained: Option<bool>,
}

/// List the distributions the launcher can offer on this platform.
///
/// With `remote`, the local offering is cross-checked against the Disco
/// API's distribution catalog to report which vendors are still
/// maintained upstream.
pub fn execute(config: &KavaConfig, json: bool, remote: bool) -> Result<()> {
    let platform = Platform::current();
    let supported = JavaDistribution::supported_on(platform);

    let catalog = if remote {
        let mut client = DiscoClient::new();
        if let Some(base_url) = &config.api.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Some(client.get_distributions()?)
    } else {
        None
    };

    let maintained = |distribution: &JavaDistribution| -> Option<bool> {
        catalog.as_ref().map(|catalog| {
            catalog
                .iter()
                .any(|d| d.api_parameter == distribution.api_parameter() && d.maintained)
        })
    };

    if json {
        let rows: Vec<DistributionRow> = supported
            .iter()
            .map(|distribution| DistributionRow {
                name: distribution.display_name(),
                api_parameter: distribution.api_parameter(),
                maintained: maintained(distribution),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "Java distributions available for {}:",
        platform.to_string().cyan()
    );

    let mut table = Table::new();
    let mut header = vec!["Distribution", "API parameter"];
    if remote {
        header.push("Maintained");
    }
    table.set_header(header);

    for distribution in &supported {
        let mut row = vec![
            Cell::new(distribution.display_name()),
            Cell::new(distribution.api_parameter()),
        ];
        if remote {
            let mark = match maintained(distribution) {
                Some(true) => "yes",
                Some(false) => "no",
                None => "",
            };
            row.push(Cell::new(mark).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
