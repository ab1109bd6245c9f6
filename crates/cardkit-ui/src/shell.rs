//! Application Shell
//!
//! Static header with the logo, an editing hint and an outbound link.

use dioxus::prelude::*;

// Embed the logo as a base64 data URI
const LOGO_SVG: &str = include_str!("../assets/logo.svg");

/// Where the shell's outbound link points
pub const LEARN_URL: &str = "https://dioxuslabs.com";

pub fn logo_data_uri() -> String {
    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(LOGO_SVG);
    format!("data:image/svg+xml;base64,{}", base64)
}

/// Top-level application shell
///
/// The outbound link opens in a new tab with `noopener noreferrer`, so the
/// opened page gets neither `window.opener` nor a referrer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "app__wrapper",
            header { class: "app__header",
                img {
                    src: "{logo_data_uri()}",
                    class: "app__logo",
                    alt: "logo",
                }
                p {
                    "Edit "
                    code { "src/app.rs" }
                    " and save to reload."
                }
                a {
                    class: "app__link",
                    href: LEARN_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Learn Dioxus"
                }
            }
        }
    }
}
