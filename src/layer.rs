use crate::dom;
use fnv::{FnvHashMap, FnvHashSet};
use valentine_core::ParticleId;
use web_sys as web;

/// DOM mirror of an expiring particle list, keyed by particle id.
pub struct ParticleLayer {
    document: web::Document,
    container: web::Element,
    class: &'static str,
    glyph: &'static str,
    nodes: FnvHashMap<ParticleId, web::Element>,
}

impl ParticleLayer {
    pub fn new(
        document: &web::Document,
        container: &web::Element,
        class: &'static str,
        glyph: &'static str,
    ) -> Self {
        Self {
            document: document.clone(),
            container: container.clone(),
            class,
            glyph,
            nodes: FnvHashMap::default(),
        }
    }

    /// Add nodes for new ids and remove nodes whose id is gone.
    pub fn sync(&mut self, items: impl Iterator<Item = (ParticleId, String)>) {
        let mut keep = FnvHashSet::default();
        for (id, style) in items {
            keep.insert(id);
            if self.nodes.contains_key(&id) {
                continue;
            }
            match dom::create_child(&self.document, &self.container, "div", self.class) {
                Ok(el) => {
                    _ = el.set_attribute("style", &style);
                    el.set_text_content(Some(self.glyph));
                    self.nodes.insert(id, el);
                }
                Err(e) => log::warn!("[layer] {}", e),
            }
        }
        self.nodes.retain(|id, el| {
            let live = keep.contains(id);
            if !live {
                el.remove();
            }
            live
        });
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        for (_, el) in self.nodes.drain() {
            el.remove();
        }
    }
}
