// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Methods for config names generation

pub(crate) fn loopback_name(index: usize) -> String {
    format!("lo{index}")
}
pub(crate) fn loopback_description(prefix: &impl std::fmt::Display) -> String {
    format!("For {prefix}")
}
pub(crate) fn prefix_list_name(index: usize) -> String {
    format!("L_{index}")
}
pub(crate) fn export_route_map_name(router: &str) -> String {
    format!("Export_{router}")
}
/// Name of the applet reacting to an interface reaching `state`
pub(crate) fn applet_name(iface: &str, state: &str) -> String {
    format!("Track{}_{state}", iface.replace('/', "_"))
}
