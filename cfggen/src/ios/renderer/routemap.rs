// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: route maps.
//! Rendering a match needs the configuration of the router it belongs to,
//! since prefix-lists must be defined on the router to be referenced.

use tracing::error;

use crate::ios::renderer::builder::{ConfigBuilder, MARKER, Render, Rendered};
use config::internal::routing::routemap::{
    RouteMap, RouteMapAction, RouteMapLine, RouteMapMatch, RouteMapTable,
};
use config::{ConfigError, RouterConfig};

impl Render for RouteMapMatch {
    type Context = RouterConfig;
    type Output = Result<String, ConfigError>;
    fn render(&self, router: &Self::Context) -> Self::Output {
        match self {
            RouteMapMatch::CommunityList(id) => Ok(format!(" match community {id}")),
            RouteMapMatch::PrefixList(name) => {
                if !router.prefix_lists.contains(name) {
                    let err = ConfigError::UnregisteredReference {
                        router: router.hostname.clone(),
                        name: name.clone(),
                    };
                    error!("{err}");
                    return Err(err);
                }
                Ok(format!(" match ip address prefix-list {name}"))
            }
        }
    }
}

impl Rendered for RouteMapAction {
    fn rendered(&self) -> String {
        match self {
            RouteMapAction::LocalPreference(pref) => format!(" set local-preference {pref}"),
            RouteMapAction::Community(communities, additive) => {
                let mut statement = format!(" set community {}", communities.rendered());
                if *additive {
                    statement += " additive";
                }
                statement
            }
            RouteMapAction::AsPathPrepend(path) => {
                let path: Vec<String> = path.iter().map(u32::to_string).collect();
                format!(" set as-path prepend {}", path.join(" "))
            }
            RouteMapAction::Raw(line) => format!(" {line}"),
        }
    }
}

impl Render for RouteMap {
    type Context = RouterConfig;
    type Output = Result<ConfigBuilder, ConfigError>;
    fn render(&self, router: &Self::Context) -> Self::Output {
        let mut config = ConfigBuilder::new();
        for line in self.lines() {
            config += render_line(line, &self.name, router)?;
        }
        Ok(config)
    }
}

/// Render a single line of route-map `name`
fn render_line(
    line: &RouteMapLine,
    name: &str,
    router: &RouterConfig,
) -> Result<ConfigBuilder, ConfigError> {
    let mut config = ConfigBuilder::new();
    config += format!("route-map {name} {} {}", line.access.rendered(), line.lineno);
    for m in &line.matches {
        config += m.render(router)?;
    }
    line.actions.iter().for_each(|a| config += a.rendered());
    Ok(config)
}

impl Render for RouteMapTable {
    type Context = RouterConfig;
    type Output = Result<ConfigBuilder, ConfigError>;
    fn render(&self, router: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        for rmap in self.values() {
            cfg += rmap.render(router)?;
            cfg += MARKER;
        }
        Ok(cfg)
    }
}
