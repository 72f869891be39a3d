// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Command-line front-end of the configuration generator

#![deny(clippy::all, clippy::pedantic, clippy::unwrap_used, clippy::expect_used)]

mod args;

use crate::args::{CmdArgs, Parser};
use cfggen::ConfigGenerator;
use color_eyre::eyre::{Result, WrapErr, eyre};
use config::{NetworkGraph, PolicyStore};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_topology(path: &Path) -> Result<NetworkGraph> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read topology file {}", path.display()))?;
    let graph: NetworkGraph = serde_yaml_ng::from_str(&text)
        .wrap_err_with(|| format!("Invalid topology in {}", path.display()))?;
    debug!("Loaded {} routers from {}", graph.routers().len(), path.display());
    Ok(graph)
}

fn emit(args: &CmdArgs, router: &str, document: &str) -> Result<()> {
    if args.stdout {
        print!("{document}");
        return Ok(());
    }
    let path = args.output.join(format!("{router}.cfg"));
    fs::write(&path, document).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CmdArgs::parse();
    init_logging(&args.log_level);

    let mut graph = load_topology(&args.topology)?;
    if !args.stdout {
        fs::create_dir_all(&args.output).wrap_err_with(|| {
            format!("Failed to create output directory {}", args.output.display())
        })?;
    }

    let routers = if args.routers.is_empty() {
        graph.routers()
    } else {
        args.routers.clone()
    };
    if routers.is_empty() {
        return Err(eyre!("No routers in {}", args.topology.display()));
    }

    /* one generator for the whole run: all routers share the prefix allocator */
    let mut generator = ConfigGenerator::new();
    for router in &routers {
        let document = generator
            .generate(&mut graph, router)
            .wrap_err_with(|| format!("Failed to generate configuration for {router}"))?;
        emit(&args, router, &document)?;
    }
    for (key, network) in generator.allocator().iter() {
        info!("Prefix {key} allocated {network}");
    }
    Ok(())
}
