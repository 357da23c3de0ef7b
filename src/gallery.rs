use crate::dom::{self, Listener, RevealTarget};
use crate::layer::ParticleLayer;
use crate::mount::{Mounted, SectionView};
use valentine_core::{
    parse_photo_overrides, Entrance, GallerySection, PhotoSlot, Section, SlotId, SlotPosition,
    GALLERY_EMOJI_GLYPH,
};
use web_sys as web;

// Concentric pulsing outlines drawn behind the centre photo.
const PULSE_FRAMES_HTML: &str = r#"<svg class="pulse-frame" style="width:320px;height:320px;animation-delay:0.9s" viewBox="0 0 200 200"><path d="M 100,180 C 100,180 20,130 20,65 C 20,32 48,12 73,12 C 87,12 100,22 100,22 C 100,22 113,12 127,12 C 152,12 180,32 180,65 C 180,130 100,180 100,180 Z" fill="none" stroke="rgba(255,255,255,0.5)" stroke-width="4"/></svg><svg class="pulse-frame" style="width:280px;height:280px;animation-delay:0.6s" viewBox="0 0 200 200"><path d="M 100,180 C 100,180 20,130 20,65 C 20,32 48,12 73,12 C 87,12 100,22 100,22 C 100,22 113,12 127,12 C 152,12 180,32 180,65 C 180,130 100,180 100,180 Z" fill="none" stroke="rgba(255,255,255,0.4)" stroke-width="4"/></svg><svg class="pulse-frame" style="width:240px;height:240px;animation-delay:0.3s" viewBox="0 0 200 200"><path d="M 100,180 C 100,180 20,130 20,65 C 20,32 48,12 73,12 C 87,12 100,22 100,22 C 100,22 113,12 127,12 C 152,12 180,32 180,65 C 180,130 100,180 100,180 Z" fill="none" stroke="rgba(255,255,255,0.3)" stroke-width="4"/></svg><svg class="pulse-frame" style="width:200px;height:200px;animation-delay:0s" viewBox="0 0 200 200"><path d="M 100,180 C 100,180 20,130 20,65 C 20,32 48,12 73,12 C 87,12 100,22 100,22 C 100,22 113,12 127,12 C 152,12 180,32 180,65 C 180,130 100,180 100,180 Z" fill="none" stroke="rgba(255,255,255,0.2)" stroke-width="4"/></svg>"#;

struct SlotNodes {
    id: SlotId,
    root: web::Element,
    photo: web::Element,
    delete: web::Element,
}

impl SlotNodes {
    fn paint(&self, slot: &PhotoSlot) {
        _ = self.photo.set_attribute("style", &slot.style());
        let display = if slot.has_chosen_image() { "" } else { "display:none" };
        _ = self.delete.set_attribute("style", display);
    }
}

pub struct GalleryView {
    state: GallerySection,
    header: RevealTarget,
    heart: RevealTarget,
    footer: RevealTarget,
    caption: web::Element,
    slots: Vec<SlotNodes>,
    popups: ParticleLayer,
}

impl GalleryView {
    fn render_popups(&mut self) {
        let items = self.state.popups().map(|p| (p.id, p.item.style()));
        self.popups.sync(items);
    }

    fn render_slots(&self) {
        for nodes in &self.slots {
            if let Some(slot) = self.state.slot(nodes.id) {
                nodes.paint(slot);
            }
        }
        self.caption.set_text_content(Some(&self.state.caption()));
    }
}

impl Drop for GalleryView {
    fn drop(&mut self) {
        for nodes in self.slots.drain(..) {
            nodes.root.remove();
        }
    }
}

impl SectionView for GalleryView {
    type State = GallerySection;

    fn state(&self) -> &GallerySection {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GallerySection {
        &mut self.state
    }

    fn render(&mut self) {
        let visible = self.state.is_visible();
        self.header.apply(visible);
        self.heart.apply(visible);
        self.footer.apply(visible);
        self.render_slots();
        self.render_popups();
    }
}

fn build_slot(document: &web::Document, parent: &web::Element, slot: &PhotoSlot) -> anyhow::Result<SlotNodes> {
    let class = format!("slot slot-{}", slot.position.css_name());
    let root = dom::create_child(document, parent, "div", &class)?;
    _ = root.set_attribute("data-slot", &slot.id.to_string());
    if slot.position == SlotPosition::Center {
        let frames = dom::create_child(document, &root, "div", "pulse-frames")?;
        frames.set_inner_html(PULSE_FRAMES_HTML);
    }
    let photo = dom::create_child(document, &root, "div", "slot-photo")?;
    let delete = dom::create_child(document, &root, "button", "slot-delete")?;
    delete.set_text_content(Some("✕"));
    _ = delete.set_attribute("aria-label", &format!("Remove photo {}", slot.id));
    Ok(SlotNodes {
        id: slot.id,
        root,
        photo,
        delete,
    })
}

pub fn mount(document: &web::Document, window: &web::Window) -> anyhow::Result<Mounted<GalleryView>> {
    let root = dom::element_by_id(document, "gallery")?;
    let heart = dom::element_by_id(document, "gallery-heart")?;
    let slot_parent = dom::element_by_id(document, "gallery-slots")?;

    let mut state = GallerySection::new();
    for (id, url) in parse_photo_overrides(dom::attributes(&root)) {
        if let Err(e) = state.set_photo(id, url) {
            log::warn!("[gallery] {}", e);
        }
    }

    let slots = state
        .slots()
        .iter()
        .map(|slot| build_slot(document, &slot_parent, slot))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let slot_handles: Vec<(SlotId, web::Element, web::Element)> = slots
        .iter()
        .map(|s| (s.id, s.root.clone(), s.delete.clone()))
        .collect();

    let view = GalleryView {
        state,
        header: RevealTarget::new(dom::element_by_id(document, "gallery-header")?, Entrance::Up),
        popups: ParticleLayer::new(document, &heart, "emoji-popup", GALLERY_EMOJI_GLYPH),
        heart: RevealTarget::new(heart.clone(), Entrance::Up),
        footer: RevealTarget::new(dom::element_by_id(document, "gallery-footer")?, Entrance::Up),
        caption: dom::element_by_id(document, "gallery-caption")?,
        slots,
    };
    let mut mounted = Mounted::new(view, &root, window)?;

    for (id, slot_root, delete) in slot_handles {
        {
            let view = mounted.view.clone();
            let timers = mounted.timers.clone();
            let area = heart.clone();
            mounted.listen(Listener::new(&slot_root, "click", move |ev: web::MouseEvent| {
                let at = dom::rect_of(&area).local(dom::client_point(&ev));
                let mut v = view.borrow_mut();
                if v.state.click_slot(at, &mut *timers.borrow_mut()).is_some() {
                    v.render_popups();
                }
            })?);
        }
        {
            let view = mounted.view.clone();
            mounted.listen(Listener::new(&delete, "click", move |ev: web::MouseEvent| {
                ev.stop_propagation();
                let mut v = view.borrow_mut();
                match v.state.delete_photo(id) {
                    Ok(true) => v.render_slots(),
                    Ok(false) => {}
                    Err(e) => log::warn!("[gallery] {}", e),
                }
            })?);
        }
    }

    Ok(mounted)
}
