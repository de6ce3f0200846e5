//! Network-flavoured generators: private IPv4 addresses, URIs and slugs.

use super::pick;
use super::text::word;
use rand::Rng;

const TLDS: &[&str] = &["com", "net", "org", "io", "info"];

/// An address from one of the RFC 1918 private ranges.
pub fn ipv4_private<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!(
            "10.{}.{}.{}",
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        ),
        1 => format!(
            "172.{}.{}.{}",
            rng.random_range(16..=31),
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        ),
        _ => format!(
            "192.168.{}.{}",
            rng.random_range(0..=255),
            rng.random_range(1..=254)
        ),
    }
}

/// Three lowercase words joined by dashes.
pub fn slug<R: Rng>(rng: &mut R) -> String {
    (0..3).map(|_| word(rng)).collect::<Vec<_>>().join("-")
}

pub fn uri<R: Rng>(rng: &mut R) -> String {
    format!(
        "https://www.{}.{}/{}/{}.html",
        word(rng),
        pick(rng, TLDS),
        word(rng),
        word(rng)
    )
}
