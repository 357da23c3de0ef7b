#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod dom;
mod envelope;
mod gallery;
mod greeting;
mod hearts;
mod layer;
mod mount;
mod observer;
mod page;
mod timers;

/// Everything the page holds on to. Field order is drop order: sections
/// release their timers and listeners before the background and shell go.
#[allow(dead_code)]
struct App {
    greeting: mount::Mounted<greeting::GreetingView>,
    envelope: mount::Mounted<envelope::EnvelopeView>,
    gallery: mount::Mounted<gallery::GalleryView>,
    hearts: hearts::FloatingHeartsView,
    page: page::PageShell,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn mount_app() -> anyhow::Result<App> {
    let (window, document) = dom::window_document()?;

    let page = page::mount(&document, &window)?;
    let hearts = hearts::mount(&document)?;
    let greeting = greeting::mount(&document, &window)?;
    let envelope = envelope::mount(&document, &window)?;
    let gallery = gallery::mount(&document, &window)?;

    log::info!(
        "[page] ready: {} hearts, scroll at {}",
        hearts.hearts().len(),
        page.scroll_position()
    );
    Ok(App {
        greeting,
        envelope,
        gallery,
        hearts,
        page,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    match mount_app() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear the page down: removes listeners, disconnects observers and cancels
/// every pending particle timer.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if let Some(app) = app {
        drop(app);
        log::info!("valentine-web unmounted");
    }
}
