// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: route maps.
//! Matches and actions are closed sets. Anything else found in an input
//! model is refused when it is loaded, as an unsupported construct.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::error;

use crate::errors::{ConfigError, ConfigResult};
use crate::internal::routing::access::Access;
use crate::internal::routing::communitylist::Community;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatchDef", into = "MatchDef")]
pub enum RouteMapMatch {
    CommunityList(u32),
    PrefixList(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ActionDef", into = "ActionDef")]
pub enum RouteMapAction {
    LocalPreference(u32),
    Community(Vec<Community>, bool), /* bool: additive */
    AsPathPrepend(Vec<u32>),
    Raw(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RouteMapLine {
    pub lineno: u32,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub matches: Vec<RouteMapMatch>,
    #[serde(default)]
    pub actions: Vec<RouteMapAction>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteMapDef", into = "RouteMapDef")]
pub struct RouteMap {
    pub name: String,
    lines: BTreeMap<u32, RouteMapLine>,
}

/// Route maps of a router, keyed by name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RouteMap>", into = "Vec<RouteMap>")]
pub struct RouteMapTable(BTreeMap<String, RouteMap>);

/* Impl basic ops */
impl RouteMapLine {
    #[must_use]
    pub fn new(lineno: u32, access: Access) -> Self {
        Self {
            lineno,
            access,
            matches: vec![],
            actions: vec![],
        }
    }
    #[must_use]
    pub fn add_match(mut self, m: RouteMapMatch) -> Self {
        self.matches.push(m);
        self
    }
    #[must_use]
    pub fn add_action(mut self, action: RouteMapAction) -> Self {
        self.actions.push(action);
        self
    }
}
impl RouteMap {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            lines: BTreeMap::new(),
        }
    }
    pub fn add_line(&mut self, line: RouteMapLine) -> ConfigResult {
        if self.lines.contains_key(&line.lineno) {
            let err = ConfigError::DuplicateRouteMapLine {
                name: self.name.clone(),
                lineno: line.lineno,
            };
            error!("{err}");
            return Err(err);
        }
        self.lines.insert(line.lineno, line);
        Ok(())
    }
    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = RouteMapLine>) -> ConfigResult {
        for line in lines {
            self.add_line(line)?;
        }
        Ok(())
    }
    /// Lines in ascending line-number order
    pub fn lines(&self) -> impl Iterator<Item = &RouteMapLine> {
        self.lines.values()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
impl RouteMapTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_route_map(&mut self, rmap: RouteMap) {
        self.0.insert(rmap.name.clone(), rmap);
    }
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouteMap> {
        self.0.get(name)
    }
    /// Route maps sorted by name
    pub fn values(&self) -> impl Iterator<Item = &RouteMap> {
        self.0.values()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<RouteMap>> for RouteMapTable {
    fn from(value: Vec<RouteMap>) -> Self {
        let mut table = Self::new();
        value.into_iter().for_each(|r| table.add_route_map(r));
        table
    }
}
impl From<RouteMapTable> for Vec<RouteMap> {
    fn from(value: RouteMapTable) -> Self {
        value.0.into_values().collect()
    }
}

/* Serialized forms */
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MatchDef {
    CommunityList { id: u32 },
    PrefixList { name: String },
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ActionDef {
    LocalPreference {
        value: u32,
    },
    Community {
        communities: Vec<Community>,
        #[serde(default)]
        additive: bool,
    },
    AsPathPrepend {
        path: Vec<u32>,
    },
    Raw {
        line: String,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RouteMapDef {
    name: String,
    #[serde(default)]
    lines: Vec<RouteMapLine>,
}

impl TryFrom<MatchDef> for RouteMapMatch {
    type Error = ConfigError;
    fn try_from(value: MatchDef) -> Result<Self, Self::Error> {
        match value {
            MatchDef::CommunityList { id } => Ok(RouteMapMatch::CommunityList(id)),
            MatchDef::PrefixList { name } => Ok(RouteMapMatch::PrefixList(name)),
            MatchDef::Unsupported => Err(ConfigError::UnsupportedConstruct(
                "route-map match".to_string(),
            )),
        }
    }
}
impl From<RouteMapMatch> for MatchDef {
    fn from(value: RouteMapMatch) -> Self {
        match value {
            RouteMapMatch::CommunityList(id) => MatchDef::CommunityList { id },
            RouteMapMatch::PrefixList(name) => MatchDef::PrefixList { name },
        }
    }
}
impl TryFrom<ActionDef> for RouteMapAction {
    type Error = ConfigError;
    fn try_from(value: ActionDef) -> Result<Self, Self::Error> {
        match value {
            ActionDef::LocalPreference { value } => Ok(RouteMapAction::LocalPreference(value)),
            ActionDef::Community {
                communities,
                additive,
            } => Ok(RouteMapAction::Community(communities, additive)),
            ActionDef::AsPathPrepend { path } => Ok(RouteMapAction::AsPathPrepend(path)),
            ActionDef::Raw { line } => Ok(RouteMapAction::Raw(line)),
            ActionDef::Unsupported => Err(ConfigError::UnsupportedConstruct(
                "route-map action".to_string(),
            )),
        }
    }
}
impl From<RouteMapAction> for ActionDef {
    fn from(value: RouteMapAction) -> Self {
        match value {
            RouteMapAction::LocalPreference(value) => ActionDef::LocalPreference { value },
            RouteMapAction::Community(communities, additive) => ActionDef::Community {
                communities,
                additive,
            },
            RouteMapAction::AsPathPrepend(path) => ActionDef::AsPathPrepend { path },
            RouteMapAction::Raw(line) => ActionDef::Raw { line },
        }
    }
}
impl TryFrom<RouteMapDef> for RouteMap {
    type Error = ConfigError;
    fn try_from(value: RouteMapDef) -> Result<Self, Self::Error> {
        let mut rmap = RouteMap::new(&value.name);
        rmap.add_lines(value.lines)?;
        Ok(rmap)
    }
}
impl From<RouteMap> for RouteMapDef {
    fn from(value: RouteMap) -> Self {
        Self {
            name: value.name,
            lines: value.lines.into_values().collect(),
        }
    }
}
