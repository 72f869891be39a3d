// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: community lists

use crate::ios::renderer::builder::{ConfigBuilder, MARKER, Render, Rendered};
use config::internal::routing::access::Access;
use config::internal::routing::communitylist::{Community, CommunityList, CommunityListTable};

impl Rendered for Access {
    fn rendered(&self) -> String {
        match self {
            Access::Permit => "permit".to_string(),
            Access::Deny => "deny".to_string(),
        }
    }
}

/// Communities, space separated
impl Rendered for [Community] {
    fn rendered(&self) -> String {
        self.iter()
            .map(Community::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Render for CommunityList {
    type Context = ();
    type Output = String;
    fn render(&self, _: &Self::Context) -> String {
        format!(
            "ip community-list {} {} {}",
            self.id,
            self.access.rendered(),
            self.communities.rendered()
        )
    }
}
impl Render for CommunityListTable {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut cfg = ConfigBuilder::new();
        self.values().for_each(|clist| {
            cfg += clist.render(&());
            cfg += MARKER;
        });
        cfg += MARKER;
        cfg
    }
}
