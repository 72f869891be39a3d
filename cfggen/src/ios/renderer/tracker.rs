// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: interface trackers.
//! Every tracker comes with two EEM applets reacting to the line-protocol
//! transitions of the tracked interface. When the interface goes down, the network
//! of the interface is withdrawn from BGP; when it comes back up, it is announced again.

use crate::ios::renderer::bgp::network_statement;
use crate::ios::renderer::builder::{ConfigBuilder, MARKER, Render, Rendered};
use crate::processor::namegen::applet_name;
use config::internal::routing::tracker::{FailoverConfig, Tracker};

/// Line-protocol states of a tracked interface
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LineState {
    Up,
    Down,
}

impl Rendered for LineState {
    fn rendered(&self) -> String {
        match self {
            LineState::Up => "Up".to_string(),
            LineState::Down => "Down".to_string(),
        }
    }
}

impl LineState {
    fn previous(self) -> Self {
        match self {
            LineState::Up => LineState::Down,
            LineState::Down => LineState::Up,
        }
    }
}

/// The applet run when the tracked interface of `tracker` reaches `state`
fn render_applet(tracker: &Tracker, asn: u32, state: LineState) -> ConfigBuilder {
    let mut cfg = ConfigBuilder::new();
    let network = tracker.addr.network();
    let statement = network_statement(&network, Some(tracker.route_map.as_str()));
    let command = match state {
        LineState::Up => statement,
        LineState::Down => format!("no {statement}"),
    };
    cfg += MARKER;
    cfg += format!(
        "event manager applet {}",
        applet_name(&tracker.iface, &state.rendered())
    );
    cfg += format!(
        " event syslog pattern \"%TRACKING-5-STATE: {} interface {} line-protocol {}->{}\"",
        tracker.id,
        tracker.iface,
        state.previous().rendered(),
        state.rendered()
    );
    cfg += " action 0.0 cli command \"en\"";
    cfg += " action 1.0 cli command \"config t\"";
    cfg += format!(" action 2.0 cli command \"router bgp {asn}\"");
    cfg += format!(" action 3.0 cli command \"{command}\"");
    cfg += " action 4.0 cli command \"end\"";
    cfg += MARKER;
    cfg
}

impl Render for Tracker {
    type Context = u32; /* AS number */
    type Output = ConfigBuilder;
    fn render(&self, asn: &Self::Context) -> ConfigBuilder {
        let mut cfg = ConfigBuilder::new();
        cfg += format!("track {} interface {} line-protocol", self.id, self.iface);
        cfg += MARKER;
        cfg += MARKER;
        cfg += render_applet(self, *asn, LineState::Up);
        cfg += render_applet(self, *asn, LineState::Down);
        cfg
    }
}

impl Render for FailoverConfig {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut cfg = ConfigBuilder::new();
        self.trackers
            .values()
            .for_each(|tracker| cfg += tracker.render(&self.asn));
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tracker() -> Tracker {
        Tracker::new(10, "Fa0/0", "10.0.0.1/30".parse().unwrap(), "RM-TRACK")
    }

    #[test]
    fn test_up_transition_announces() {
        let applet = render_applet(&tracker(), 100, LineState::Up).to_string();
        let expected = "!
event manager applet TrackFa0_0_Up
 event syslog pattern \"%TRACKING-5-STATE: 10 interface Fa0/0 line-protocol Down->Up\"
 action 0.0 cli command \"en\"
 action 1.0 cli command \"config t\"
 action 2.0 cli command \"router bgp 100\"
 action 3.0 cli command \"network 10.0.0.0 mask 255.255.255.252 route-map RM-TRACK\"
 action 4.0 cli command \"end\"
!
";
        assert_eq!(applet, expected);
    }

    #[test]
    fn test_down_transition_withdraws() {
        let applet = render_applet(&tracker(), 100, LineState::Down);
        let lines = applet.lines();
        assert_eq!(lines[1], "event manager applet TrackFa0_0_Down");
        assert!(lines[2].ends_with("line-protocol Up->Down\""));
        assert_eq!(
            lines[6],
            " action 3.0 cli command \"no network 10.0.0.0 mask 255.255.255.252 route-map RM-TRACK\""
        );
    }

    #[test]
    fn test_tracker_render() {
        let config = tracker().render(&100);
        let lines = config.lines();
        assert_eq!(lines[0], "track 10 interface Fa0/0 line-protocol");
        assert_eq!(lines[1], MARKER);
        assert_eq!(lines[2], MARKER);
        assert_eq!(lines[3], MARKER);
        assert_eq!(lines[4], "event manager applet TrackFa0_0_Up");
        assert_eq!(lines[13], "event manager applet TrackFa0_0_Down");
        assert_eq!(lines.len(), 21);
    }
}
