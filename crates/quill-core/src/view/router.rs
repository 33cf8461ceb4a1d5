//! Layout routing.
//!
//! Decides which top-level layout renders for the current view and, inside
//! the administrative layout, which screen.

use serde::{Deserialize, Serialize};

use super::model::View;

/// Top-level layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    Normal,
    Admin,
}

/// Screens of the administrative layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdminScreen {
    Overview,
    Categories,
    Tools,
    Users,
}

pub fn layout_for(view: View) -> Layout {
    if view.is_admin() {
        Layout::Admin
    } else {
        Layout::Normal
    }
}

/// Selects the administrative screen for a view.
///
/// Anything that is not a mapped administrative view gets the overview.
pub fn admin_screen_for(view: View) -> AdminScreen {
    match view {
        View::AdminCategories => AdminScreen::Categories,
        View::AdminTools => AdminScreen::Tools,
        View::AdminUsers => AdminScreen::Users,
        _ => AdminScreen::Overview,
    }
}

/// The router's full decision for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub view: View,
    pub layout: Layout,
    /// Present only for the administrative layout.
    pub admin_screen: Option<AdminScreen>,
}

impl Route {
    pub fn resolve(view: View) -> Self {
        let layout = layout_for(view);
        let admin_screen = match layout {
            Layout::Admin => Some(admin_screen_for(view)),
            Layout::Normal => None,
        };
        Self {
            view,
            layout,
            admin_screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_layout_for_every_view() {
        for view in View::iter() {
            let expected = match view {
                View::AdminDashboard
                | View::AdminCategories
                | View::AdminTools
                | View::AdminUsers => Layout::Admin,
                _ => Layout::Normal,
            };
            assert_eq!(layout_for(view), expected, "{view}");
        }
    }

    #[test]
    fn test_admin_screen_mapping() {
        assert_eq!(
            admin_screen_for(View::AdminDashboard),
            AdminScreen::Overview
        );
        assert_eq!(
            admin_screen_for(View::AdminCategories),
            AdminScreen::Categories
        );
        assert_eq!(admin_screen_for(View::AdminTools), AdminScreen::Tools);
        assert_eq!(admin_screen_for(View::AdminUsers), AdminScreen::Users);
        assert_eq!(admin_screen_for(View::Dashboard), AdminScreen::Overview);
    }

    #[test]
    fn test_route_resolve() {
        let route = Route::resolve(View::AdminTools);
        assert_eq!(route.layout, Layout::Admin);
        assert_eq!(route.admin_screen, Some(AdminScreen::Tools));

        let route = Route::resolve(View::History);
        assert_eq!(route.layout, Layout::Normal);
        assert_eq!(route.admin_screen, None);
    }

    #[test]
    fn test_unknown_admin_name_routes_to_overview() {
        let route = Route::resolve(View::parse_lenient("admin-reports"));
        assert_eq!(route.admin_screen, Some(AdminScreen::Overview));
    }
}
