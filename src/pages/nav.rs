//! Navigation header shared by every page

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Stories,
}

impl NavLocation {
    pub const ALL: [NavLocation; 2] = [NavLocation::Home, NavLocation::Stories];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Shell",
            NavLocation::Stories => "Stories",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Stories => Route::Gallery {},
        }
    }
}

/// Header with the app title and a link per location
#[component]
pub fn NavHeader() -> Element {
    rsx! {
        nav { class: "nav-header",
            span { class: "nav-header__title", "cardkit" }
            for location in NavLocation::ALL {
                Link {
                    key: "{location.display_name()}",
                    class: "nav-link",
                    active_class: "active",
                    to: location.route(),
                    "{location.display_name()}"
                }
            }
        }
    }
}
