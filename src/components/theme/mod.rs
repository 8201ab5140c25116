//! Light/dark theming.
//!
//! - [`ThemeMode`] and the colors each mode implies
//! - [`ThemeManager`], the stored-preference vs. system-preference rules
//! - [`ThemeHandle`], the shared signal every theme-aware widget reads
//! - [`ThemeToggle`], the button with its click ripple

mod component;
mod manager;
mod mode;
mod ripple;

pub use component::{ThemeHandle, ThemeToggle, provide_theme, use_theme};
pub use manager::{LocalStorage, PreferenceStore, THEME_KEY, ThemeManager};
pub use mode::{Color, ThemeMode, ThemeQuery, UnknownMode};
pub use ripple::{RIPPLE_LIFETIME, Ripple};
