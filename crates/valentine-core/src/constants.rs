use std::time::Duration;

// Shared timing and layout tuning constants used by the web frontend.

// Particle lifetimes
pub const GREETING_HEART_LIFETIME: Duration = Duration::from_millis(1200);
pub const ENVELOPE_BURST_LIFETIME: Duration = Duration::from_millis(1800);
pub const GALLERY_EMOJI_LIFETIME: Duration = Duration::from_millis(1500);

// Pop-out keyframe length for a single envelope particle (matches `pop-out` in style.css)
pub const POP_OUT_ANIMATION: Duration = Duration::from_millis(1500);

// Intersection ratios that flip each section's reveal latch
pub const GREETING_REVEAL_THRESHOLD: f64 = 0.1;
pub const ENVELOPE_REVEAL_THRESHOLD: f64 = 0.2;
pub const GALLERY_REVEAL_THRESHOLD: f64 = 0.2;

// Staggered fade-in delays for the greeting text blocks (seconds)
pub const GREETING_TEXT_DELAYS_S: [f32; 3] = [0.1, 0.3, 0.5];

// Pointer tilt: degrees of rotation per pixel of offset from centre
pub const GREETING_TILT_DEG_PER_PX: f32 = 0.01;
pub const GREETING_PERSPECTIVE_PX: f32 = 1000.0;
pub const GREETING_TILT_TRANSITION: &str = "transform 0.1s ease-out";

pub const ENVELOPE_TILT_DEG_PER_PX: f32 = 0.005;
pub const ENVELOPE_PERSPECTIVE_PX: f32 = 1200.0;
pub const ENVELOPE_TILT_TRANSITION: &str = "transform 0.2s ease-out";

// Envelope burst layout
pub const ENVELOPE_BURST_SIZE: usize = 30;
pub const BURST_TOP_PCT: (f32, f32) = (40.0, 60.0);
pub const BURST_LEFT_PCT: (f32, f32) = (35.0, 65.0);
pub const BURST_TRAVEL_PX: f32 = 250.0; // full span, centred on zero
pub const BURST_SPIN_DEG: f32 = 720.0; // full span, centred on zero
pub const BURST_MAX_DELAY_S: f32 = 0.5;

// Ambient floating hearts
pub const FLOATING_HEART_COUNT: usize = 18;
pub const FLOATING_HEART_SIZE_PX: (f32, f32) = (25.0, 50.0);
pub const FLOATING_HEART_DURATION_S: (f32, f32) = (18.0, 32.0);
pub const FLOATING_HEART_MAX_DELAY_S: f32 = 6.0;

// Gallery
pub const GALLERY_SLOT_COUNT: usize = 9;
pub const GALLERY_IDLE_CAPTION: &str = "🦖 Happy Valentines Baby 🦖";
pub const PHOTO_OVERRIDE_PREFIX: &str = "data-photo-";

// Glyphs
pub const HEART_GLYPH: &str = "💙";
pub const GALLERY_EMOJI_GLYPH: &str = "🦖";
