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

use clap::{Parser, Subcommand};
use kava::commands;
use kava::config::{KavaConfig, kava_home};
use kava::error::{Result, format_error_chain, get_exit_code};
use kava::logging;

#[derive(Parser)]
#[command(name = "kava")]
#[command(author, version, about = "Java runtime discovery for game launchers", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List Java distributions available on this platform
    #[command(visible_alias = "ls")]
    Distributions {
        /// Output as JSON for programmatic use
        #[arg(long)]
        json: bool,

        /// Cross-check the offering against the foojay.io catalog
        #[arg(long)]
        remote: bool,
    },

    /// Show downloadable runtime versions of a distribution
    #[command(visible_alias = "v")]
    Versions {
        /// Distribution to query (e.g. "temurin", "liberica"); defaults
        /// to the configured distribution
        distribution: Option<String>,

        /// Only show one package type (jdk, jre, jdkfx, jrefx)
        #[arg(long)]
        package_type: Option<String>,

        /// Output as JSON for programmatic use
        #[arg(long)]
        json: bool,

        /// Fetch timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let result: Result<()> = (|| {
        let config = KavaConfig::load(&kava_home()?)?;

        match cli.command {
            Commands::Distributions { json, remote } => {
                commands::distributions::execute(&config, json, remote)
            }
            Commands::Versions {
                distribution,
                package_type,
                json,
                timeout,
            } => commands::versions::execute(
                &config,
                distribution.as_deref(),
                package_type.as_deref(),
                json,
                timeout,
            ),
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
