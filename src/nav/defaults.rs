//! Built-in navigation tree used when the configuration does not provide one.

use super::item::{NavGroup, NavIcon, NavItem};

/// Groups whose items follow the `<Prefix> Add/Remove/Usage` pattern.
const RESOURCE_GROUPS: [(&str, &str, &str); 4] = [
    ("CPU", "CPU", "cpu"),
    ("MEMORY", "Memory", "memory"),
    ("STORAGE", "Storage", "storage"),
    ("NETWORK", "Network", "network"),
];

/// The default drawer tree: an example group followed by four resource groups.
pub fn default_groups() -> Vec<NavGroup> {
    let mut groups = vec![NavGroup::new(
        "EXAMPLE",
        vec![
            NavItem::new("Home", "/", NavIcon::Home),
            NavItem::new("Page2", "/page2", NavIcon::Web),
            NavItem::new("Page3", "/page3", NavIcon::Web).disabled(),
            NavItem::new("Page4", "/page4", NavIcon::Web).hidden(),
            NavItem::new("Page5", "/page5", NavIcon::Web),
        ],
    )];

    for (name, prefix, segment) in RESOURCE_GROUPS {
        groups.push(NavGroup::new(
            name,
            vec![
                NavItem::new(format!("{} Add", prefix), format!("/{}/add", segment), NavIcon::Add),
                NavItem::new(format!("{} Remove", prefix), format!("/{}/remove", segment), NavIcon::Remove),
                NavItem::new(format!("{} Usage", prefix), format!("/{}/usage", segment), NavIcon::ShowChart),
            ],
        ));
    }

    groups
}
