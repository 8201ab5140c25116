//! Light/dark mode and the colors that depend on it.

use std::fmt;
use std::str::FromStr;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The page's visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	/// Every mode, light first.
	pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

	/// Mode matching the `prefers-color-scheme` result.
	pub fn from_system(prefers_dark: bool) -> Self {
		if prefers_dark {
			Self::Dark
		} else {
			Self::Light
		}
	}

	/// The other mode.
	pub fn opposite(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Value stored in the `theme` preference slot.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Marker class placed on the root element.
	pub fn class_name(self) -> &'static str {
		match self {
			Self::Light => "light-mode",
			Self::Dark => "dark-mode",
		}
	}

	/// Glyph shown inside the toggle button.
	pub fn icon(self) -> &'static str {
		match self {
			Self::Light => "☀️",
			Self::Dark => "🌙",
		}
	}

	/// Browser chrome color for the `theme-color` meta tag.
	pub fn meta_color(self) -> Color {
		match self {
			Self::Light => Color::rgb(0xe0, 0xe8, 0xff),
			Self::Dark => Color::rgb(0x66, 0x7e, 0xea),
		}
	}

	/// Base color for background particles; alpha comes from each particle.
	pub fn particle_color(self) -> Color {
		match self {
			Self::Light => Color::rgb(0, 0, 0),
			Self::Dark => Color::rgb(255, 255, 255),
		}
	}

	/// Fill for pointer-trail marks.
	pub fn trail_color(self) -> Color {
		match self {
			Self::Light => Color::rgba(0, 0, 0, 0.4),
			Self::Dark => Color::rgba(255, 255, 255, 0.6),
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error for a stored preference that names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for ThemeMode {
	type Err = UnknownMode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			other => Err(UnknownMode(other.to_string())),
		}
	}
}

/// Read access to the active mode, shared by every theme-dependent widget.
pub trait ThemeQuery {
	/// The mode currently applied.
	fn mode(&self) -> ThemeMode;

	/// Whether dark mode is applied.
	fn is_dark(&self) -> bool {
		self.mode() == ThemeMode::Dark
	}
}

impl ThemeQuery for ThemeMode {
	fn mode(&self) -> ThemeMode {
		*self
	}
}
