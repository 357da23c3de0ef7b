//! Runtime configuration read from the host page.

use crate::constants::{GALLERY_SLOT_COUNT, PHOTO_OVERRIDE_PREFIX};
use crate::gallery::SlotId;

/// Pick chosen photos out of `data-photo-<slot>` attributes.
///
/// Attributes without the prefix are skipped silently; prefixed ones with a bad
/// slot number or an empty value are skipped with a warning.
pub fn parse_photo_overrides<I, K, V>(attrs: I) -> Vec<(SlotId, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = Vec::new();
    for (name, value) in attrs {
        let name = name.as_ref();
        let Some(suffix) = name.strip_prefix(PHOTO_OVERRIDE_PREFIX) else {
            continue;
        };
        let slot = match suffix.parse::<u8>() {
            Ok(n) if (1..=GALLERY_SLOT_COUNT as u8).contains(&n) => SlotId(n),
            _ => {
                log::warn!("[config] ignoring {}: not a slot 1..={}", name, GALLERY_SLOT_COUNT);
                continue;
            }
        };
        let value = value.as_ref().trim();
        if value.is_empty() {
            log::warn!("[config] ignoring {}: empty url", name);
            continue;
        }
        out.push((slot, value.to_string()));
    }
    out
}
