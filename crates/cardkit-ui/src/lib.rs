//! cardkit UI Components
//!
//! Presentational Dioxus components: a reusable [`Card`] with two visual
//! variants and the static application [`Shell`].
//!
//! ## Card variants
//!
//! - **simple-card**: optional `<img>` above the info block
//! - **overlay**: the image becomes a CSS background, painted twice
//!   (outer layer and inside the info block)
//!
//! Class names follow BEM (`card__box`, `card__box--overlay`,
//! `card__box__info__title`) so the stylesheet can target every part.
//!
//! Rendering is a pure function of [`CardConfig`]. The only fallible
//! operations live at the edges: parsing kinds, looking up stories and
//! loading JSON configs, all reported through [`CardError`].

#![allow(non_snake_case)]

pub mod card;
pub mod class_list;
pub mod error;
pub mod shell;
pub mod ssr;
pub mod stories;

pub use card::{Card, CardConfig, CardKind, CardLayout, LinkWrap};
pub use class_list::ClassList;
pub use error::{CardError, CardResult};
pub use shell::Shell;
pub use stories::{ComponentDoc, Story};
