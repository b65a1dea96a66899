//! Color-id picking.
//!
//! Every pickable arrow gets a [`PickId`] that is encoded as an RGB color and
//! painted into an offscreen pick render. Reading the pixel under the pointer
//! and decoding it back yields the arrow's name.
//!
//! Ordering contract:
//! - Ids are allocated monotonically and never reused, so a pixel sampled
//!   from a stale pick render decodes to `None` instead of a different arrow.
//! - Id zero is reserved for the background.

use std::collections::BTreeMap;

use foundation::handles::PickId;

#[derive(Debug)]
pub struct Mousemap {
    next: u32,
    by_id: BTreeMap<PickId, String>,
}

impl Default for Mousemap {
    fn default() -> Self {
        Self::new()
    }
}

impl Mousemap {
    pub fn new() -> Self {
        Self {
            // Id zero means "nothing under the pointer".
            next: 1,
            by_id: BTreeMap::new(),
        }
    }

    pub fn allocate(&mut self, name: impl Into<String>) -> PickId {
        let id = PickId(self.next);
        self.next += 1;
        self.by_id.insert(id, name.into());
        id
    }

    pub fn release(&mut self, id: PickId) -> bool {
        self.by_id.remove(&id).is_some()
    }

    pub fn resolve(&self, id: PickId) -> Option<&str> {
        if id.is_background() {
            return None;
        }
        self.by_id.get(&id).map(String::as_str)
    }

    /// Decode a sampled pick-render pixel to the arrow under the pointer.
    pub fn decode(&self, pixel: [u8; 3]) -> Option<&str> {
        self.resolve(PickId::decode_rgb8(pixel))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
