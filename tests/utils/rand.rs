use rand::distr::{Alphanumeric, SampleString};
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TAIL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

fn pick(rng: &mut impl Rng, set: &[u8]) -> char {
    set[rng.random_range(0..set.len())] as char
}

pub fn rand_test_group() -> String {
    let id = Alphanumeric.sample_string(&mut rand::rng(), 10);
    format!("test_{}", id)
}

/// A random name matching `^[A-Za-z][A-Za-z0-9_-]*$` with `len` characters.
pub fn rand_valid_group(len: usize) -> String {
    let mut rng = rand::rng();
    let mut name = String::with_capacity(len);
    name.push(pick(&mut rng, LETTERS));
    while name.len() < len {
        name.push(pick(&mut rng, TAIL));
    }
    name
}

/// A random whitespace-only string, possibly empty.
pub fn rand_blank() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(0..8);
    (0..len)
        .map(|_| WHITESPACE[rng.random_range(0..WHITESPACE.len())])
        .collect()
}

/// Surrounds `s` with random leading and trailing whitespace.
pub fn rand_padded(s: &str) -> String {
    format!("{}{}{}", rand_blank(), s, rand_blank())
}

/// A random string of printable ASCII characters, possibly empty.
pub fn rand_printable(max_len: usize) -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| rng.random_range(0x20u8..0x7f) as char)
        .collect()
}
