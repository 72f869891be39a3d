// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::path::PathBuf;

pub(crate) use clap::Parser;
#[derive(Debug, Parser)]
#[command(name = "synet")]
#[command(version)]
#[command(about = "Generate Cisco IOS router configurations from a network topology", long_about = None)]
pub(crate) struct CmdArgs {
    #[arg(long, value_name = "topology file (yaml)")]
    pub topology: PathBuf,
    #[arg(long, value_name = "output directory", default_value = ".")]
    pub output: PathBuf,
    #[arg(long = "router", value_name = "router to generate (all if none)")]
    pub routers: Vec<String>,
    #[arg(long, value_name = "log level", default_value = "info")]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}
