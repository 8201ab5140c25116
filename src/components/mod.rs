//! Landing page widgets.
//!
//! Each widget keeps its behavior in plain Rust that runs against injected
//! timers and state, with a thin Leptos component on top.

pub mod clock;
pub mod jokes;
pub mod logo;
pub mod particles;
pub mod theme;
pub mod trail;
pub mod transient;
pub mod weather;
