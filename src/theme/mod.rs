//! Global theme for the desktop host.

mod styles;

pub use styles::GLOBAL_STYLES;
