//! Heart-shaped photo gallery with emoji pops.

use crate::constants::{
    GALLERY_EMOJI_LIFETIME, GALLERY_IDLE_CAPTION, GALLERY_REVEAL_THRESHOLD, GALLERY_SLOT_COUNT,
};
use crate::expiring::{Entry, ExpiringList, ParticleId};
use crate::reveal::RevealLatch;
use crate::section::Section;
use crate::timer::{ExpiryKey, Timers};
use glam::Vec2;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u8);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no photo slot with id {0}")]
    UnknownSlot(SlotId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotPosition {
    TopLeft,
    TopRight,
    Center,
    BottomLeft,
    BottomRight,
    Top,
    Left,
    Right,
    Bottom,
}

/// Slot order is fixed; index + 1 is the slot id.
pub const SLOT_LAYOUT: [SlotPosition; GALLERY_SLOT_COUNT] = [
    SlotPosition::TopLeft,
    SlotPosition::TopRight,
    SlotPosition::Center,
    SlotPosition::BottomLeft,
    SlotPosition::BottomRight,
    SlotPosition::Top,
    SlotPosition::Left,
    SlotPosition::Right,
    SlotPosition::Bottom,
];

impl SlotPosition {
    /// Class suffix used by `.slot-*` rules in style.css.
    pub fn css_name(self) -> &'static str {
        match self {
            SlotPosition::TopLeft => "top-left",
            SlotPosition::TopRight => "top-right",
            SlotPosition::Center => "center",
            SlotPosition::BottomLeft => "bottom-left",
            SlotPosition::BottomRight => "bottom-right",
            SlotPosition::Top => "top",
            SlotPosition::Left => "left",
            SlotPosition::Right => "right",
            SlotPosition::Bottom => "bottom",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            SlotPosition::TopLeft => "linear-gradient(135deg, #5BA3D0 0%, #4A90C9 100%)",
            SlotPosition::TopRight => "linear-gradient(135deg, #4A90C9 0%, #3A7DB5 100%)",
            SlotPosition::Center => "linear-gradient(135deg, #3A7DB5 0%, #4A90C9 100%)",
            SlotPosition::BottomLeft => "linear-gradient(135deg, #5BA3D0 0%, #3A7DB5 100%)",
            SlotPosition::BottomRight => "linear-gradient(135deg, #4A90C9 0%, #5BA3D0 100%)",
            SlotPosition::Top => "linear-gradient(135deg, #4A90C9 0%, #5BA3D0 100%)",
            SlotPosition::Left => "linear-gradient(135deg, #5BA3D0 0%, #3A7DB5 100%)",
            SlotPosition::Right => "linear-gradient(135deg, #3A7DB5 0%, #4A90C9 100%)",
            SlotPosition::Bottom => "linear-gradient(135deg, #5BA3D0 0%, #4A90C9 100%)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SlotPosition::TopLeft => "/img/1.jpg",
            SlotPosition::TopRight => "/img/2.jpg",
            SlotPosition::Center => "/img/9.jpg",
            SlotPosition::BottomLeft => "/img/3.jpg",
            SlotPosition::BottomRight => "/img/4.jpg",
            SlotPosition::Top => "/img/5.jpg",
            SlotPosition::Left => "/img/6.jpg",
            SlotPosition::Right => "/img/7.jpg",
            SlotPosition::Bottom => "/img/8.jpg",
        }
    }

    /// Stagger for the idle bounce animation, in seconds.
    pub fn bounce_delay_s(self) -> f32 {
        match self {
            SlotPosition::TopLeft | SlotPosition::Center => 0.0,
            SlotPosition::Top => 0.15,
            SlotPosition::TopRight => 0.3,
            SlotPosition::Left => 0.45,
            SlotPosition::BottomLeft => 0.6,
            SlotPosition::Right => 0.75,
            SlotPosition::BottomRight => 0.9,
            SlotPosition::Bottom => 1.1,
        }
    }
}

/// Escape `raw` for use inside a single-quoted CSS string, so a host-supplied
/// url can never terminate the `url('...')` token early.
pub fn css_string_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            '\u{c}' => out.push_str("\\c "),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSlot {
    pub id: SlotId,
    pub position: SlotPosition,
    pub image: Option<String>,
}

impl PhotoSlot {
    pub fn has_chosen_image(&self) -> bool {
        self.image.is_some()
    }

    /// Image layered over the slot gradient. If the image fails to load the
    /// gradient shows through.
    pub fn background(&self) -> String {
        let url = self
            .image
            .as_deref()
            .unwrap_or_else(|| self.position.placeholder());
        format!("url('{}'), {}", css_string_escape(url), self.position.gradient())
    }

    pub fn style(&self) -> String {
        format!(
            "background-image: {}; background-size: cover; background-position: center; animation-delay: {}s",
            self.background(),
            self.position.bounce_delay_s()
        )
    }
}

/// Emoji spawned by a slot click, positioned relative to the gallery container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmojiPopup {
    pub at: Vec2,
}

impl EmojiPopup {
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; animation: float-up {}s ease-out forwards; transform: translate(-50%, -50%)",
            self.at.x,
            self.at.y,
            GALLERY_EMOJI_LIFETIME.as_secs_f32()
        )
    }
}

#[derive(Debug)]
pub struct GallerySection {
    slots: Vec<PhotoSlot>,
    latch: RevealLatch,
    popups: ExpiringList<EmojiPopup>,
    mounted: bool,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self::new()
    }
}

impl GallerySection {
    pub fn new() -> Self {
        let slots = SLOT_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, &position)| PhotoSlot {
                id: SlotId(i as u8 + 1),
                position,
                image: None,
            })
            .collect();
        Self {
            slots,
            latch: RevealLatch::new(GALLERY_REVEAL_THRESHOLD),
            popups: ExpiringList::new(),
            mounted: true,
        }
    }

    pub fn slots(&self) -> &[PhotoSlot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&PhotoSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut PhotoSlot, GalleryError> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(GalleryError::UnknownSlot(id))
    }

    /// Put a chosen image into a slot, replacing any previous one.
    pub fn set_photo(&mut self, id: SlotId, url: impl Into<String>) -> Result<(), GalleryError> {
        let slot = self.slot_mut(id)?;
        slot.image = Some(url.into());
        Ok(())
    }

    /// Clear a slot's chosen image. Returns whether anything was cleared.
    pub fn delete_photo(&mut self, id: SlotId) -> Result<bool, GalleryError> {
        let slot = self.slot_mut(id)?;
        let had = slot.image.take().is_some();
        if had {
            log::info!("[gallery] cleared photo in slot {}", id);
        }
        Ok(had)
    }

    pub fn photos_added(&self) -> usize {
        self.slots.iter().filter(|s| s.has_chosen_image()).count()
    }

    pub fn caption(&self) -> String {
        match self.photos_added() {
            0 => GALLERY_IDLE_CAPTION.to_string(),
            1 => "1 photo added".to_string(),
            n => format!("{} photos added", n),
        }
    }

    /// Click on a slot's image region at `at` (gallery-local px).
    pub fn click_slot(&mut self, at: Vec2, timers: &mut dyn Timers) -> Option<ParticleId> {
        if !self.mounted {
            return None;
        }
        let id = self
            .popups
            .push(EmojiPopup { at }, GALLERY_EMOJI_LIFETIME, timers);
        log::debug!("[gallery] emoji {:?} at ({:.0},{:.0})", id, at.x, at.y);
        Some(id)
    }

    pub fn popups(&self) -> impl Iterator<Item = &Entry<EmojiPopup>> {
        self.popups.iter()
    }

    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }
}

impl Section for GallerySection {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn latch(&self) -> &RevealLatch {
        &self.latch
    }

    fn latch_mut(&mut self) -> &mut RevealLatch {
        &mut self.latch
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn on_timer(&mut self, key: ExpiryKey) -> bool {
        if !self.mounted {
            return false;
        }
        self.popups.expire(key) > 0
    }

    fn unmount(&mut self, timers: &mut dyn Timers) {
        self.popups.clear(timers);
        self.mounted = false;
    }
}
