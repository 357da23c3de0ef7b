use crate::dom::Listener;
use crate::observer::RevealObserver;
use crate::timers::BrowserTimers;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::Section;
use web_sys as web;

/// DOM side of a section: owns the core state and knows how to paint it.
pub trait SectionView: 'static {
    type State: Section;

    fn state(&self) -> &Self::State;

    fn state_mut(&mut self) -> &mut Self::State;

    fn render(&mut self);
}

/// A live section plus every browser resource it holds.
///
/// Dropping it removes listeners, disconnects the observer and cancels every
/// pending timer before the view itself goes away.
pub struct Mounted<V: SectionView> {
    pub view: Rc<RefCell<V>>,
    pub timers: Rc<RefCell<BrowserTimers>>,
    observer: Option<RevealObserver>,
    listeners: Vec<Listener>,
}

impl<V: SectionView> Mounted<V> {
    pub fn new(view: V, root: &web::Element, window: &web::Window) -> anyhow::Result<Self> {
        let view = Rc::new(RefCell::new(view));

        let weak = Rc::downgrade(&view);
        let timers = BrowserTimers::new(window.clone(), move |key| {
            if let Some(v) = weak.upgrade() {
                let mut v = v.borrow_mut();
                if v.state_mut().on_timer(key) {
                    v.render();
                }
            }
        });

        let threshold = view.borrow().state().latch().threshold();
        let weak = Rc::downgrade(&view);
        let observer = RevealObserver::new(root, threshold, move |sample| {
            let Some(v) = weak.upgrade() else {
                return true;
            };
            let mut v = v.borrow_mut();
            let flipped = v.state_mut().on_intersection(sample);
            if flipped {
                v.render();
            }
            flipped
        })?;

        view.borrow_mut().render();
        log::info!("[{}] mounted", view.borrow().state().name());

        Ok(Self {
            view,
            timers: Rc::new(RefCell::new(timers)),
            observer: Some(observer),
            listeners: Vec::new(),
        })
    }

    pub fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl<V: SectionView> Drop for Mounted<V> {
    fn drop(&mut self) {
        self.listeners.clear();
        self.observer.take();
        match (self.view.try_borrow_mut(), self.timers.try_borrow_mut()) {
            (Ok(mut v), Ok(mut t)) => {
                v.state_mut().unmount(&mut *t);
                log::info!("[{}] unmounted", v.state().name());
            }
            _ => log::warn!("section busy during unmount; timers cleared on drop"),
        }
    }
}
