// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: community lists

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::internal::routing::access::Access;

/// A community value, kept as an opaque token (e.g. "10:100")
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Community(String);

impl Community {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_owned())
    }
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommunityList {
    pub id: u32,
    #[serde(default)]
    pub access: Access,
    pub communities: Vec<Community>,
}

/// Community lists of a router, keyed by list id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CommunityList>", into = "Vec<CommunityList>")]
pub struct CommunityListTable(BTreeMap<u32, CommunityList>);

impl CommunityList {
    #[must_use]
    pub fn new(id: u32, access: Access) -> Self {
        Self {
            id,
            access,
            communities: vec![],
        }
    }
    #[must_use]
    pub fn add_community(mut self, community: Community) -> Self {
        self.communities.push(community);
        self
    }
}

impl CommunityListTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_community_list(&mut self, clist: CommunityList) {
        self.0.insert(clist.id, clist);
    }
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CommunityList> {
        self.0.get(&id)
    }
    pub fn values(&self) -> impl Iterator<Item = &CommunityList> {
        self.0.values()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<CommunityList>> for CommunityListTable {
    fn from(value: Vec<CommunityList>) -> Self {
        let mut table = Self::new();
        value.into_iter().for_each(|c| table.add_community_list(c));
        table
    }
}
impl From<CommunityListTable> for Vec<CommunityList> {
    fn from(value: CommunityListTable) -> Self {
        value.0.into_values().collect()
    }
}
