// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: interface trackers. A tracker ties the line-protocol state of an
//! interface to the advertisement of the network of that interface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::address::InterfaceAddress;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: u32,
    pub iface: String,
    pub addr: InterfaceAddress,
    pub route_map: String,
}

/// Trackers of a router, keyed by tracker id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Tracker>", into = "Vec<Tracker>")]
pub struct TrackerTable(BTreeMap<u32, Tracker>);

/// The trackers of a router together with the AS the remediation acts on
#[derive(Clone, Debug, PartialEq)]
pub struct FailoverConfig {
    pub asn: u32,
    pub trackers: TrackerTable,
}

impl Tracker {
    #[must_use]
    pub fn new(id: u32, iface: &str, addr: InterfaceAddress, route_map: &str) -> Self {
        Self {
            id,
            iface: iface.to_owned(),
            addr,
            route_map: route_map.to_owned(),
        }
    }
}
impl TrackerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_tracker(&mut self, tracker: Tracker) {
        self.0.insert(tracker.id, tracker);
    }
    pub fn values(&self) -> impl Iterator<Item = &Tracker> {
        self.0.values()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<Tracker>> for TrackerTable {
    fn from(value: Vec<Tracker>) -> Self {
        let mut table = Self::new();
        value.into_iter().for_each(|t| table.add_tracker(t));
        table
    }
}
impl From<TrackerTable> for Vec<Tracker> {
    fn from(value: TrackerTable) -> Self {
        value.0.into_values().collect()
    }
}
