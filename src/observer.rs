use anyhow::anyhow;
use valentine_core::IntersectionSample;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// Intersection observer on one element, disconnected when dropped.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<ObserverCallback>,
}

impl RevealObserver {
    /// `on_sample` returns `true` once it no longer needs reports; the
    /// observer disconnects itself at that point.
    pub fn new(
        target: &web::Element,
        threshold: f64,
        mut on_sample: impl FnMut(IntersectionSample) -> bool + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    let sample =
                        IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                    if on_sample(sample) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        ) as Box<ObserverCallback>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
