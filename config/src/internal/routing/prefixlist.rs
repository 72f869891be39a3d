// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: ip prefix lists.
//! Entries carry no sequence number: it is a function of the position of
//! the network in the list and is assigned when rendering.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::internal::routing::access::Access;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PrefixList {
    pub name: String,
    #[serde(default)]
    pub access: Access,
    pub networks: Vec<IpNet>,
}

/// Prefix lists of a router, keyed by name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PrefixList>", into = "Vec<PrefixList>")]
pub struct PrefixListTable(BTreeMap<String, PrefixList>);

/* Impl basic ops */
impl PrefixList {
    #[must_use]
    pub fn new(name: &str, access: Access) -> Self {
        Self {
            name: name.to_owned(),
            access,
            networks: vec![],
        }
    }
    #[must_use]
    pub fn add_network(mut self, network: IpNet) -> Self {
        self.networks.push(network);
        self
    }
}
impl PrefixListTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_prefix_list(&mut self, plist: PrefixList) {
        self.0.insert(plist.name.clone(), plist);
    }
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PrefixList> {
        self.0.get(name)
    }
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
    pub fn values(&self) -> impl Iterator<Item = &PrefixList> {
        self.0.values()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<PrefixList>> for PrefixListTable {
    fn from(value: Vec<PrefixList>) -> Self {
        let mut table = Self::new();
        value.into_iter().for_each(|p| table.add_prefix_list(p));
        table
    }
}
impl From<PrefixListTable> for Vec<PrefixList> {
    fn from(value: PrefixListTable) -> Self {
        value.0.into_values().collect()
    }
}
