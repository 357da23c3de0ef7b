use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::FloatingHearts;
use web_sys as web;

const HEART_PATH: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";

/// Fixed full-viewport layer of drifting hearts. Built once; the browser
/// loops the animation so there is nothing to update afterwards.
pub struct FloatingHeartsView {
    hearts: FloatingHearts,
    nodes: Vec<web::Element>,
}

impl FloatingHeartsView {
    pub fn hearts(&self) -> &FloatingHearts {
        &self.hearts
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<FloatingHeartsView> {
    let layer = dom::element_by_id(document, "floating-hearts")?;
    let hearts = FloatingHearts::generate(&mut StdRng::from_entropy());

    let mut nodes = Vec::with_capacity(hearts.len());
    for (heart, style) in hearts.hearts().iter().zip(hearts.render()) {
        let el = dom::create_child(document, &layer, "div", "floating-heart")?;
        _ = el.set_attribute("style", &style);
        el.set_inner_html(&format!(
            r#"<svg width="{s}" height="{s}" viewBox="0 0 24 24" fill="currentColor"><path d="{p}"/></svg>"#,
            s = heart.size_px,
            p = HEART_PATH
        ));
        nodes.push(el);
    }
    log::info!("[hearts] mounted {} floating hearts", nodes.len());

    Ok(FloatingHeartsView { hearts, nodes })
}

impl Drop for FloatingHeartsView {
    fn drop(&mut self) {
        for el in self.nodes.drain(..) {
            el.remove();
        }
    }
}
