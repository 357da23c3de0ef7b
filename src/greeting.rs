use crate::dom::{self, Listener, RevealTarget};
use crate::layer::ParticleLayer;
use crate::mount::{Mounted, SectionView};
use valentine_core::{bouquet_svg, Entrance, GreetingSection, Section, HEART_GLYPH};
use web_sys as web;

pub struct GreetingView {
    state: GreetingSection,
    frame: RevealTarget,
    frame_card: web::Element,
    bouquet: RevealTarget,
    bouquet_tilt: web::Element,
    text: [RevealTarget; 3],
    hearts: ParticleLayer,
}

impl GreetingView {
    fn render_tilt(&self) {
        _ = self
            .frame_card
            .set_attribute("style", &self.state.frame_style());
        _ = self
            .bouquet_tilt
            .set_attribute("style", &self.state.bouquet_style());
    }

    fn render_hearts(&mut self) {
        let items = self.state.hearts().map(|h| (h.id, h.item.style()));
        self.hearts.sync(items);
    }
}

impl SectionView for GreetingView {
    type State = GreetingSection;

    fn state(&self) -> &GreetingSection {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GreetingSection {
        &mut self.state
    }

    fn render(&mut self) {
        let visible = self.state.is_visible();
        self.frame.apply(visible);
        self.bouquet.apply(visible);
        for block in &self.text {
            block.apply(visible);
        }
        self.render_tilt();
        self.render_hearts();
    }
}

pub fn mount(document: &web::Document, window: &web::Window) -> anyhow::Result<Mounted<GreetingView>> {
    let root = dom::element_by_id(document, "greeting")?;
    let state = GreetingSection::new();

    let text = [
        RevealTarget::new(dom::element_by_id(document, "greeting-text-1")?, Entrance::Up),
        RevealTarget::new(dom::element_by_id(document, "greeting-text-2")?, Entrance::Up),
        RevealTarget::new(dom::element_by_id(document, "greeting-text-3")?, Entrance::Up),
    ];
    for (block, delay) in text.iter().zip(state.text_block_delays()) {
        _ = block.element().set_attribute("style", &delay);
    }

    let bouquet_tilt = dom::element_by_id(document, "greeting-bouquet-tilt")?;
    bouquet_tilt.set_inner_html(&bouquet_svg());

    let view = GreetingView {
        frame: RevealTarget::new(dom::element_by_id(document, "greeting-frame")?, Entrance::Left),
        frame_card: dom::element_by_id(document, "greeting-frame-card")?,
        bouquet: RevealTarget::new(dom::element_by_id(document, "greeting-bouquet")?, Entrance::Right),
        bouquet_tilt,
        text,
        hearts: ParticleLayer::new(document, &root, "click-heart", HEART_GLYPH),
        state,
    };
    let mut mounted = Mounted::new(view, &root, window)?;

    {
        let view = mounted.view.clone();
        let area = root.clone();
        mounted.listen(Listener::new(&root, "mousemove", move |ev: web::MouseEvent| {
            let offset = dom::rect_of(&area).offset_from_center(dom::client_point(&ev));
            let mut v = view.borrow_mut();
            v.state.pointer_move(offset);
            v.render_tilt();
        })?);
    }
    {
        let view = mounted.view.clone();
        let timers = mounted.timers.clone();
        let area = root.clone();
        mounted.listen(Listener::new(&root, "click", move |ev: web::MouseEvent| {
            let at = dom::rect_of(&area).local(dom::client_point(&ev));
            let mut v = view.borrow_mut();
            if v.state.click(at, &mut *timers.borrow_mut()).is_some() {
                v.render_hearts();
            }
        })?);
    }

    Ok(mounted)
}
