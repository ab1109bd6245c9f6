//! Home page - the application shell.

use cardkit_ui::Shell;
use dioxus::prelude::*;

use super::nav::NavHeader;

#[component]
pub fn Home() -> Element {
    rsx! {
        NavHeader {}
        Shell {}
    }
}
