// SPDX-License-Identifier: MPL-2.0
//! Images bundled into the binary, addressed by numeric resource id.
//!
//! Resource `n` maps to `assets/resources/<n>.png`.

use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/resources/"]
struct Bundled;

/// Returns the encoded bytes of resource `id`, if bundled.
#[must_use]
pub fn bytes(id: u32) -> Option<Cow<'static, [u8]>> {
    Bundled::get(&format!("{id}.png")).map(|file| file.data)
}

/// Lists the ids of all bundled resources, in ascending order.
#[must_use]
pub fn available() -> Vec<u32> {
    let mut ids: Vec<u32> = Bundled::iter()
        .filter_map(|name| name.strip_suffix(".png").and_then(|stem| stem.parse().ok()))
        .collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_resource_one_is_present() {
        assert!(available().contains(&1));
        assert!(bytes(1).is_some_and(|data| !data.is_empty()));
    }

    #[test]
    fn unknown_resource_is_none() {
        assert!(bytes(999_999).is_none());
    }
}
