//! Fixture helpers shared by the scenario and property tests under
//! `tests/`. This crate carries no wire logic of its own — everything it
//! exercises lives in `bancho-proto`/`bancho-core`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::expect_used)] // fixture literals, never untrusted input

/// Decode a whitespace-separated hex fixture (e.g. `"0B 05 41 6C 69 63 65"`)
/// into raw bytes. Panics on malformed hex, since fixtures are compile-time
/// literals written by hand for a test, never runtime input.
#[must_use]
pub fn hex_bytes(fixture: &str) -> Vec<u8> {
    let compact: String = fixture.split_whitespace().collect();
    hex::decode(compact).expect("fixture hex must be valid")
}

#[cfg(test)]
mod tests {
    use super::hex_bytes;

    #[test]
    fn hex_bytes_strips_whitespace() {
        assert_eq!(hex_bytes("0B 05 41 6C"), vec![0x0B, 0x05, 0x41, 0x6C]);
    }
}
