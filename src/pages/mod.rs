//! Page components for the cardkit desktop host.

mod gallery;
mod home;
mod nav;
mod story_view;

pub use gallery::Gallery;
pub use home::Home;
pub use story_view::StoryView;
