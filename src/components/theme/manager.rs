//! Theme preference resolution and persistence.
//!
//! An explicit choice stored under [`THEME_KEY`] always wins. Without one the
//! system `prefers-color-scheme` decides, and keeps deciding as it changes.

use log::warn;

use super::mode::{ThemeMode, UnknownMode};

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

/// Preference slot holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Key/value string storage for user preferences.
pub trait PreferenceStore {
	/// Stored value for `key`, if any.
	fn load(&self, key: &str) -> Option<String>;
	/// Store `value` under `key`.
	fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads and writes are skipped when storage is
/// unavailable (private browsing, sandboxed frames).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok().flatten()
	}
}

impl PreferenceStore for LocalStorage {
	fn load(&self, key: &str) -> Option<String> {
		Self::storage()?.get_item(key).ok().flatten()
	}

	fn save(&self, key: &str, value: &str) {
		if let Some(storage) = Self::storage() {
			let _ = storage.set_item(key, value);
		}
	}
}

/// Decides which mode applies and records explicit user choices.
#[derive(Clone, Debug, Default)]
pub struct ThemeManager<S> {
	store: S,
}

impl<S: PreferenceStore> ThemeManager<S> {
	/// Manager over `store`.
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// The explicitly stored mode, if any. Any non-empty value other than
	/// `"light"` counts as dark.
	pub fn stored(&self) -> Option<ThemeMode> {
		let raw = self.store.load(THEME_KEY)?;
		if raw.is_empty() {
			return None;
		}
		let mode = raw.parse().unwrap_or_else(|e: UnknownMode| {
			warn!("landing-page: {}, treating it as dark", e);
			ThemeMode::Dark
		});
		Some(mode)
	}

	/// Mode to apply at startup.
	pub fn initial_mode(&self, system_prefers_dark: bool) -> ThemeMode {
		self.stored()
			.unwrap_or_else(|| ThemeMode::from_system(system_prefers_dark))
	}

	/// Flip `current`, persist the result and return it.
	pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
		let next = current.opposite();
		self.store.save(THEME_KEY, next.as_str());
		next
	}

	/// Mode to switch to after the system preference changed, or `None` when
	/// an explicit choice is stored and the signal must be ignored.
	pub fn on_system_change(&self, prefers_dark: bool) -> Option<ThemeMode> {
		match self.stored() {
			Some(_) => None,
			None => Some(ThemeMode::from_system(prefers_dark)),
		}
	}
}
