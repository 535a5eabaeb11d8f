//! The seven capability areas and their per-role visibility.

use serde::{Deserialize, Serialize};

use crate::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Listings,
    AddProperty,
    Map,
    Favorites,
    Contact,
    Mortgage,
    Dashboard,
}

impl Tab {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Listings,
            Self::AddProperty,
            Self::Map,
            Self::Favorites,
            Self::Contact,
            Self::Mortgage,
            Self::Dashboard,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Listings => "Listings",
            Self::AddProperty => "Add Property",
            Self::Map => "Map",
            Self::Favorites => "Favorites",
            Self::Contact => "Contact",
            Self::Mortgage => "Mortgage",
            Self::Dashboard => "Dashboard",
        }
    }

    pub const fn permitted(self, role: Role) -> bool {
        match (self, role) {
            (Self::AddProperty, Role::Buyer) => false,
            (Self::Dashboard, Role::Buyer | Role::Agent) => false,
            _ => true,
        }
    }
}

/// Visible tabs for a role in fixed order, except that the active tab is
/// pulled to the front when it survives the role filter
/// (most-recently-requested-first, not a scheduler).
pub fn tab_order(role: Role, active: Tab) -> Vec<Tab> {
    let mut tabs: Vec<Tab> = Tab::ordered()
        .into_iter()
        .filter(|tab| tab.permitted(role))
        .collect();
    if let Some(position) = tabs.iter().position(|tab| *tab == active) {
        let focused = tabs.remove(position);
        tabs.insert(0, focused);
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyers_lose_add_property_and_dashboard() {
        let tabs = tab_order(Role::Buyer, Tab::Listings);
        assert_eq!(tabs.len(), 5);
        assert!(!tabs.contains(&Tab::AddProperty));
        assert!(!tabs.contains(&Tab::Dashboard));
    }

    #[test]
    fn agents_lose_only_the_dashboard() {
        let tabs = tab_order(Role::Agent, Tab::Listings);
        assert_eq!(tabs.len(), 6);
        assert!(tabs.contains(&Tab::AddProperty));
        assert!(!tabs.contains(&Tab::Dashboard));
    }

    #[test]
    fn admins_see_everything() {
        assert_eq!(tab_order(Role::Admin, Tab::Listings).len(), 7);
    }

    #[test]
    fn active_tab_moves_to_the_front() {
        let tabs = tab_order(Role::Buyer, Tab::Contact);
        assert_eq!(tabs[0], Tab::Contact);
        assert_eq!(tabs[1], Tab::Listings);
    }

    #[test]
    fn hidden_active_tab_leaves_the_order_alone() {
        let tabs = tab_order(Role::Buyer, Tab::Dashboard);
        assert_eq!(tabs[0], Tab::Listings);
    }
}
