// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Access verdict shared by community-lists, prefix-lists and route-map lines

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Permit,
    Deny,
}
