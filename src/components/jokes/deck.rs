//! The joke list and the fade-swap between jokes.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rand::Rng;

use crate::runtime::{Scheduler, Shared};

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

/// Every joke the card can show.
pub const JOKES: [&str; 15] = [
	"Why don't scientists trust atoms? Because they make up everything!",
	"I told my wife she was drawing her eyebrows too high. She looked surprised.",
	"Why don't eggs tell jokes? They'd crack each other up!",
	"What do you call a fake noodle? An impasta!",
	"Why did the scarecrow win an award? He was outstanding in his field!",
	"What do you call a bear with no teeth? A gummy bear!",
	"Why don't skeletons fight each other? They don't have the guts!",
	"What do you call a fish wearing a bowtie? So-fish-ticated!",
	"Why did the math book look so sad? Because it had too many problems!",
	"What do you call a dinosaur that crashes his car? Tyrannosaurus Wrecks!",
	"Why don't scientists trust stairs? Because they're always up to something!",
	"What do you call a cow with no legs? Ground beef!",
	"Why did the coffee file a police report? It got mugged!",
	"What do you call a belt made of watches? A waist of time!",
	"Why don't oysters donate to charity? Because they are shellfish!",
];

/// Time the card stays faded out before the next joke appears.
pub const FADE_DELAY: Duration = Duration::from_millis(200);

/// Pick a joke uniformly at random.
pub fn pick(rng: &mut impl Rng) -> (usize, &'static str) {
	let index = rng.random_range(0..JOKES.len());
	(index, JOKES[index])
}

/// What the joke card currently shows.
#[derive(Clone, Debug, PartialEq)]
pub struct JokeCard {
	/// Index into [`JOKES`], `None` before the first pick.
	pub index: Option<usize>,
	/// CSS opacity of the text.
	pub opacity: f64,
}

impl Default for JokeCard {
	fn default() -> Self {
		Self {
			index: None,
			opacity: 1.0,
		}
	}
}

impl JokeCard {
	/// The joke text, empty before the first pick.
	pub fn text(&self) -> &'static str {
		self.index.and_then(|i| JOKES.get(i).copied()).unwrap_or("")
	}
}

/// Swaps the card to a random joke: fade out, wait, replace, fade in.
pub struct JokeRotation<S, F, R> {
	/// Runs the fade delay.
	pub scheduler: S,
	/// State the card renders.
	pub card: F,
	/// Source for joke picks.
	pub rng: Rc<RefCell<R>>,
}

impl<S, F, R> JokeRotation<S, F, R>
where
	S: Scheduler,
	F: Shared<JokeCard>,
	R: Rng + 'static,
{
	/// Rotation that owns `rng`.
	pub fn new(scheduler: S, card: F, rng: R) -> Self {
		Self {
			scheduler,
			card,
			rng: Rc::new(RefCell::new(rng)),
		}
	}

	/// Start a fade swap to a random joke.
	pub fn show_next(&self) {
		self.card.modify(|c| c.opacity = 0.0);

		let (card, rng) = (self.card.clone(), self.rng.clone());
		self.scheduler.set_timeout(FADE_DELAY, move || {
			let (index, _) = pick(&mut *rng.borrow_mut());
			card.replace(JokeCard {
				index: Some(index),
				opacity: 1.0,
			});
		});
	}
}
