use crate::dom::{self, Listener, RevealTarget};
use crate::layer::ParticleLayer;
use crate::mount::{Mounted, SectionView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::{EnvelopeSection, EnvelopeState, Entrance, Section, HEART_GLYPH};
use web_sys as web;

pub struct EnvelopeView {
    state: EnvelopeSection,
    rng: StdRng,
    header: RevealTarget,
    stage: RevealTarget,
    tilt: web::Element,
    card: web::Element,
    prompt: web::Element,
    burst: ParticleLayer,
}

impl EnvelopeView {
    fn render_tilt(&self) {
        _ = self.tilt.set_attribute("style", &self.state.tilt_style());
    }

    fn toggle(&mut self, timers: &mut crate::timers::BrowserTimers) {
        let state = self.state.toggle(&mut self.rng, timers);
        log::info!("[envelope] {:?}", state);
        self.render();
    }
}

impl SectionView for EnvelopeView {
    type State = EnvelopeSection;

    fn state(&self) -> &EnvelopeSection {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EnvelopeSection {
        &mut self.state
    }

    fn render(&mut self) {
        let visible = self.state.is_visible();
        self.header.apply(visible);
        self.stage.apply(visible);

        let open = self.state.state() == EnvelopeState::Open;
        _ = self
            .card
            .set_attribute("data-state", if open { "open" } else { "closed" });
        self.prompt.set_text_content(Some(self.state.prompt()));
        self.render_tilt();

        let items = self.state.particles().map(|p| (p.id, p.item.style()));
        self.burst.sync(items);
    }
}

pub fn mount(document: &web::Document, window: &web::Window) -> anyhow::Result<Mounted<EnvelopeView>> {
    let root = dom::element_by_id(document, "envelope")?;
    let stage = dom::element_by_id(document, "envelope-stage")?;
    let card = dom::element_by_id(document, "envelope-card")?;
    let close = dom::element_by_id(document, "envelope-close")?;

    let view = EnvelopeView {
        state: EnvelopeSection::new(),
        rng: StdRng::from_entropy(),
        header: RevealTarget::new(dom::element_by_id(document, "envelope-header")?, Entrance::Up),
        burst: ParticleLayer::new(document, &stage, "popout-heart", HEART_GLYPH),
        stage: RevealTarget::new(stage, Entrance::Up),
        tilt: dom::element_by_id(document, "envelope-tilt")?,
        card: card.clone(),
        prompt: dom::element_by_id(document, "envelope-prompt")?,
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
        mounted.listen(Listener::new(&card, "click", move |_ev: web::MouseEvent| {
            view.borrow_mut().toggle(&mut timers.borrow_mut());
        })?);
    }
    {
        let view = mounted.view.clone();
        mounted.listen(Listener::new(&close, "click", move |ev: web::MouseEvent| {
            // the close control sits inside the card; keep the card from toggling
            ev.stop_propagation();
            let mut v = view.borrow_mut();
            v.state.close();
            v.render();
        })?);
    }

    Ok(mounted)
}
