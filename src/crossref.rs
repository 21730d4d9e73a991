//! Net cross-reference joins
//!
//! Pairs every left member with every right member on the same net
//! (test point to connector, test point to connector pin, and so on).

use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::board::NetMember;

/// One `(left, right)` pairing on a shared net
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NetMatch {
    pub left_id: String,
    pub right_id: String,
    pub net_name: String,
    /// `left_id` and `right_id` joined by the configured separator
    pub label: String,
}

/// Cartesian product of ids sharing a net name
///
/// Members without a net name are skipped. Identical rows are kept once.
/// Output is ordered by net name (names starting with a digit first), then
/// left id, then right id.
pub fn join_by_net(left: &[NetMember], right: &[NetMember], separator: &str) -> Vec<NetMatch> {
    let start = std::time::Instant::now();

    if left.is_empty() || right.is_empty() {
        tracing::warn!(
            left = left.len(),
            right = right.len(),
            "[NetJoin] One of the input tables is empty, no join performed"
        );
        return vec![];
    }

    let mut right_by_net: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for member in right {
        if let Some(net) = member.net_name.as_deref() {
            right_by_net.entry(net).or_default().push(member.id.as_str());
        }
    }

    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut matches = Vec::new();

    for member in left {
        let Some(net) = member.net_name.as_deref() else {
            continue;
        };
        let Some(right_ids) = right_by_net.get(net) else {
            continue;
        };
        for &right_id in right_ids {
            if !seen.insert((member.id.as_str(), right_id, net)) {
                continue;
            }
            matches.push(NetMatch {
                left_id: member.id.clone(),
                right_id: right_id.to_string(),
                net_name: net.to_string(),
                label: format!("{}{}{}", member.id, separator, right_id),
            });
        }
    }

    matches.sort_by(compare_matches);

    tracing::info!(
        "[NetJoin] {} x {} members: {} matches on {} nets in {:?}",
        left.len(),
        right.len(),
        matches.len(),
        right_by_net.len(),
        start.elapsed()
    );

    matches
}

/// Net names starting with a digit (any script) sort before all others
pub fn compare_net_names(a: &str, b: &str) -> Ordering {
    let group = |name: &str| !name.starts_with(|c: char| c.is_numeric());
    group(a).cmp(&group(b)).then_with(|| a.cmp(b))
}

fn compare_matches(a: &NetMatch, b: &NetMatch) -> Ordering {
    compare_net_names(&a.net_name, &b.net_name)
        .then_with(|| a.left_id.cmp(&b.left_id))
        .then_with(|| a.right_id.cmp(&b.right_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(id: &str, net: Option<&str>) -> NetMember {
        NetMember::new(id, net)
    }

    #[test]
    fn test_join_example() {
        let left = vec![m("A", Some("N1")), m("B", Some("N2"))];
        let right = vec![m("X", Some("N1")), m("Y", Some("N1"))];
        let out = join_by_net(&left, &right, " - ");
        assert_eq!(out.len(), 2);
        assert_eq!((out[0].left_id.as_str(), out[0].right_id.as_str()), ("A", "X"));
        assert_eq!((out[1].left_id.as_str(), out[1].right_id.as_str()), ("A", "Y"));
        assert_eq!(out[0].label, "A - X");
        assert!(out.iter().all(|r| r.net_name == "N1"));
    }

    #[test]
    fn test_digit_leading_nets_first() {
        let left = vec![m("TP1", Some("VCC")), m("TP2", Some("3V3")), m("TP3", Some("12V")), m("TP4", Some("AGND"))];
        let right = vec![m("J1", Some("VCC")), m("J2", Some("3V3")), m("J3", Some("12V")), m("J4", Some("AGND"))];
        let nets: Vec<String> = join_by_net(&left, &right, " - ").into_iter().map(|r| r.net_name).collect();
        assert_eq!(nets, vec!["12V", "3V3", "AGND", "VCC"]);
    }

    #[test]
    fn test_non_ascii_digit_leads() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        assert_eq!(compare_net_names("\u{663}V3", "AGND"), Ordering::Less);
        assert_eq!(compare_net_names("ZZ", "\u{663}V3"), Ordering::Greater);
    }

    #[test]
    fn test_missing_net_and_duplicates() {
        let left = vec![m("TP1", Some("GND")), m("TP1", Some("GND")), m("TP2", None)];
        let right = vec![m("J1", Some("GND")), m("J9", None)];
        let out = join_by_net(&left, &right, "/");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "TP1/J1");
    }

    #[test]
    fn test_empty_side() {
        assert!(join_by_net(&[], &[m("J1", Some("GND"))], " - ").is_empty());
    }
}
