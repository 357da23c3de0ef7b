use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use valentine_core::{ExpiryKey, TimerId, Timers};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed [`Timers`]. Dropping it clears every pending timeout.
pub struct BrowserTimers {
    window: web::Window,
    next_id: u64,
    live: FnvHashMap<TimerId, (i32, Closure<dyn FnMut()>)>,
    // Closures cannot be freed while they run, so fired ids are parked here
    // and their closures released on the next `start`.
    fired: Rc<RefCell<Vec<TimerId>>>,
    deliver: Rc<dyn Fn(ExpiryKey)>,
}

impl BrowserTimers {
    pub fn new(window: web::Window, deliver: impl Fn(ExpiryKey) + 'static) -> Self {
        Self {
            window,
            next_id: 0,
            live: FnvHashMap::default(),
            fired: Rc::new(RefCell::new(Vec::new())),
            deliver: Rc::new(deliver),
        }
    }

    fn sweep(&mut self) {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        for id in fired {
            self.live.remove(&id);
        }
    }
}

impl Timers for BrowserTimers {
    fn start(&mut self, delay: Duration, key: ExpiryKey) -> TimerId {
        self.sweep();
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let fired = self.fired.clone();
        let deliver = self.deliver.clone();
        let closure = Closure::wrap(Box::new(move || {
            fired.borrow_mut().push(id);
            deliver(key);
        }) as Box<dyn FnMut()>);

        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)
        {
            Ok(handle) => {
                self.live.insert(id, (handle, closure));
            }
            Err(e) => log::error!("[timers] setTimeout failed: {:?}", e),
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some((handle, _closure)) = self.live.remove(&id) {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for BrowserTimers {
    fn drop(&mut self) {
        for (_, (handle, _closure)) in self.live.drain() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
