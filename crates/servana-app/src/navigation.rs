//! Tab and stack navigation.
//!
//! Four bottom tabs; Home and Orders each own a stack of routes. Routes carry
//! only the parameters the next screen needs.

use servana_core::OrderId;

/// Bottom tabs in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Orders,
    Support,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Orders, Tab::Support, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Orders => "Orders",
            Tab::Support => "Support",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Orders => 1,
            Tab::Support => 2,
            Tab::Profile => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A screen plus its navigation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Services,
    ServiceProviders { service_name: String },
    Payment { provider_id: u32 },
    OrdersList,
    OrderDetails { order_id: OrderId },
    SupportHome,
    Profile,
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Route::Services => "Available Services".to_string(),
            Route::ServiceProviders { service_name } => format!("{service_name} Professionals"),
            Route::Payment { .. } => "Confirm Payment".to_string(),
            Route::OrdersList => "Your Orders".to_string(),
            Route::OrderDetails { .. } => "Order Details".to_string(),
            Route::SupportHome => "Home Services Assistant".to_string(),
            Route::Profile => "Profile".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active_tab: Tab,
    home: Vec<Route>,
    orders: Vec<Route>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            active_tab: Tab::Home,
            home: vec![Route::Services],
            orders: vec![Route::OrdersList],
        }
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Route on top of the active tab's stack
    pub fn current(&self) -> &Route {
        self.current_in(self.active_tab)
    }

    /// Route on top of `tab`'s stack
    pub fn current_in(&self, tab: Tab) -> &Route {
        match tab {
            Tab::Home => self.home.last().unwrap_or(&Route::Services),
            Tab::Orders => self.orders.last().unwrap_or(&Route::OrdersList),
            Tab::Support => &Route::SupportHome,
            Tab::Profile => &Route::Profile,
        }
    }

    /// Push onto the active tab's stack. Tabs without a stack ignore pushes.
    pub fn push(&mut self, route: Route) {
        if let Some(stack) = self.stack_mut(self.active_tab) {
            stack.push(route);
        }
    }

    /// Pop the active tab's stack, never removing its root.
    ///
    /// Returns `true` if a route was popped.
    pub fn pop(&mut self) -> bool {
        match self.stack_mut(self.active_tab) {
            Some(stack) if stack.len() > 1 => {
                stack.pop();
                true
            }
            _ => false,
        }
    }

    /// Reset `tab`'s stack to its root
    pub fn pop_to_root(&mut self, tab: Tab) {
        if let Some(stack) = self.stack_mut(tab) {
            stack.truncate(1);
        }
    }

    /// Stack depth of the active tab (1 = root)
    pub fn depth(&self) -> usize {
        match self.active_tab {
            Tab::Home => self.home.len(),
            Tab::Orders => self.orders.len(),
            Tab::Support | Tab::Profile => 1,
        }
    }

    fn stack_mut(&mut self, tab: Tab) -> Option<&mut Vec<Route>> {
        match tab {
            Tab::Home => Some(&mut self.home),
            Tab::Orders => Some(&mut self.orders),
            Tab::Support | Tab::Profile => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roots() {
        let mut nav = Navigation::new();
        assert_eq!(nav.active_tab(), Tab::Home);
        assert_eq!(nav.current(), &Route::Services);
        nav.select_tab(Tab::Orders);
        assert_eq!(nav.current(), &Route::OrdersList);
        nav.select_tab(Tab::Support);
        assert_eq!(nav.current(), &Route::SupportHome);
    }

    #[test]
    fn test_push_and_pop_keep_root() {
        let mut nav = Navigation::new();
        nav.push(Route::ServiceProviders {
            service_name: "Plumber".to_string(),
        });
        nav.push(Route::Payment { provider_id: 3 });
        assert_eq!(nav.depth(), 3);

        assert!(nav.pop());
        assert!(nav.pop());
        assert!(!nav.pop());
        assert_eq!(nav.current(), &Route::Services);
    }

    #[test]
    fn test_stacks_are_per_tab() {
        let mut nav = Navigation::new();
        nav.push(Route::Payment { provider_id: 1 });
        nav.select_tab(Tab::Orders);
        nav.push(Route::OrderDetails {
            order_id: OrderId::from("1"),
        });

        assert_eq!(nav.current_in(Tab::Home), &Route::Payment { provider_id: 1 });
        nav.pop_to_root(Tab::Home);
        assert_eq!(nav.current_in(Tab::Home), &Route::Services);
        assert!(matches!(nav.current(), Route::OrderDetails { .. }));
    }

    #[test]
    fn test_push_on_stackless_tab_is_ignored() {
        let mut nav = Navigation::new();
        nav.select_tab(Tab::Profile);
        nav.push(Route::OrdersList);
        assert_eq!(nav.current(), &Route::Profile);
        assert!(!nav.pop());
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Profile);
        assert_eq!(Tab::from_index(2), Some(Tab::Support));
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn test_provider_route_title() {
        let route = Route::ServiceProviders {
            service_name: "Electrician".to_string(),
        };
        assert_eq!(route.title(), "Electrician Professionals");
    }
}
