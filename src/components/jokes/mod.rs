//! Dad joke card.

mod component;
mod deck;

pub use component::DadJokes;
pub use deck::{FADE_DELAY, JOKES, JokeCard, JokeRotation, pick};
