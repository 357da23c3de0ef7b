use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::ScrollTracker;
use web_sys as web;

/// Page root: mirrors `window.scrollY` into `--scroll-y` on `#page`.
pub struct PageShell {
    tracker: Rc<RefCell<ScrollTracker>>,
    _scroll: Listener,
}

impl PageShell {
    pub fn scroll_position(&self) -> f64 {
        self.tracker.borrow().position()
    }
}

pub fn mount(document: &web::Document, window: &web::Window) -> anyhow::Result<PageShell> {
    let root = dom::html_element_by_id(document, "page")?;
    let tracker = Rc::new(RefCell::new(ScrollTracker::new()));

    let t = tracker.clone();
    let w = window.clone();
    let scroll = Listener::new(window, "scroll", move |_ev: web::Event| {
        let y = w.scroll_y().unwrap_or(0.0);
        let mut t = t.borrow_mut();
        if t.record(y) {
            _ = root.style().set_property("--scroll-y", &t.css_var());
        }
    })?;

    Ok(PageShell {
        tracker,
        _scroll: scroll,
    })
}
