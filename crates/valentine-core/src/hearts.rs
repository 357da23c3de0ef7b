use crate::constants::{
    FLOATING_HEART_COUNT, FLOATING_HEART_DURATION_S, FLOATING_HEART_MAX_DELAY_S,
    FLOATING_HEART_SIZE_PX,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drift {
    /// Enters above the viewport and falls.
    Down,
    /// Enters below the viewport and rises.
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingHeart {
    pub id: usize,
    pub left_pct: f32,
    pub size_px: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub drift: Drift,
}

impl FloatingHeart {
    pub fn style(&self) -> String {
        let (edge, keyframes) = match self.drift {
            Drift::Down => ("top", "drift-down"),
            Drift::Up => ("bottom", "drift"),
        };
        format!(
            "left: {}%; {}: -{}px; animation: {} {}s linear {}s infinite",
            self.left_pct, edge, self.size_px, keyframes, self.duration_s, self.delay_s
        )
    }
}

/// Ambient background hearts, generated once per mount.
#[derive(Clone, Debug)]
pub struct FloatingHearts {
    hearts: Vec<FloatingHeart>,
}

impl FloatingHearts {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hearts = (0..FLOATING_HEART_COUNT)
            .map(|id| FloatingHeart {
                id,
                left_pct: rng.gen_range(0.0..100.0),
                size_px: rng.gen_range(FLOATING_HEART_SIZE_PX.0..FLOATING_HEART_SIZE_PX.1),
                duration_s: rng
                    .gen_range(FLOATING_HEART_DURATION_S.0..FLOATING_HEART_DURATION_S.1),
                delay_s: rng.gen_range(0.0..FLOATING_HEART_MAX_DELAY_S),
                drift: if id % 2 == 0 { Drift::Down } else { Drift::Up },
            })
            .collect();
        Self { hearts }
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }

    /// Style attribute for every heart, in id order. Reads only the stored
    /// descriptors, so repeated renders of one field are identical.
    pub fn render(&self) -> Vec<String> {
        self.hearts.iter().map(FloatingHeart::style).collect()
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}
