//! Shared, single-threaded widget state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// A handle to state that timers and event handlers mutate after setup.
///
/// Components hand widgets a reactive [`RwSignal`] so the view follows every
/// change; tests hand them an `Rc<RefCell<_>>` and inspect it directly.
pub trait Shared<T>: Clone + 'static {
	/// Mutate the state in place.
	fn modify(&self, f: impl FnOnce(&mut T));

	/// Read the state without subscribing to it.
	fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

	/// Replace the state wholesale.
	fn replace(&self, value: T) {
		self.modify(|slot| *slot = value);
	}
}

impl<T: Send + Sync + 'static> Shared<T> for RwSignal<T> {
	fn modify(&self, f: impl FnOnce(&mut T)) {
		Update::update(self, f);
	}

	fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.with_untracked(f)
	}
}

impl<T: 'static> Shared<T> for Rc<RefCell<T>> {
	fn modify(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.borrow_mut());
	}

	fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.borrow())
	}
}
