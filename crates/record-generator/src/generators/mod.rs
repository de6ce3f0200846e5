//! Individual value generators used to assemble fake records.
//!
//! Every generator takes the RNG explicitly so a record built from a seeded
//! `StdRng` is reproducible byte for byte.

pub mod collection;
pub mod net;
pub mod numeric;
pub mod path;
pub mod text;
pub mod uuid;

use rand::Rng;

/// Pick one element of a non-empty slice.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
