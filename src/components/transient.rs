//! Short-lived decorative elements that remove themselves.

use std::time::Duration;

use crate::runtime::{Scheduler, Shared};

#[cfg(test)]
#[path = "transient_test.rs"]
mod transient_test;

/// An item with a stable key for keyed list rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyed<T> {
	/// Key unique within its layer.
	pub id: u64,
	/// The wrapped item.
	pub item: T,
}

/// The set of currently visible transient items, in creation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Transients<T> {
	next_id: u64,
	items: Vec<Keyed<T>>,
}

impl<T> Default for Transients<T> {
	fn default() -> Self {
		Self {
			next_id: 0,
			items: Vec::new(),
		}
	}
}

impl<T> Transients<T> {
	/// Add an item and return its key.
	pub fn push(&mut self, item: T) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.items.push(Keyed { id, item });
		id
	}

	/// Drop the item with key `id`, if present.
	pub fn remove(&mut self, id: u64) {
		self.items.retain(|k| k.id != id);
	}

	/// Number of items held.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether nothing is held.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Items in creation order.
	pub fn iter(&self) -> impl Iterator<Item = &Keyed<T>> {
		self.items.iter()
	}
}

impl<T: Clone> Transients<T> {
	/// Snapshot for keyed rendering.
	pub fn to_vec(&self) -> Vec<Keyed<T>> {
		self.items.clone()
	}
}

/// Add `item` to `layer` and remove it again once `lifetime` has passed.
pub fn show_for<T, S, L>(scheduler: &S, layer: &L, lifetime: Duration, item: T) -> u64
where
	T: 'static,
	S: Scheduler,
	L: Shared<Transients<T>>,
{
	let mut id = 0;
	layer.modify(|items| id = items.push(item));

	let layer = layer.clone();
	scheduler.set_timeout(lifetime, move || layer.modify(|items| items.remove(id)));
	id
}
