// Shared interaction tuning constants used by every widget.

// Hold-to-confirm gauges (milliseconds)
pub const GATE_CHARGE_MS: f64 = 1500.0; // time to reach full charge
pub const GATE_DECAY_MS: f64 = 1000.0; // time to drain from full back to zero
pub const CURSOR_CHARGE_MS: f64 = 1500.0;
pub const CURSOR_DECAY_MS: f64 = 750.0; // cursor ring drains faster than the gate

// Hold-ring spin, degrees per second: SPIN_BASE + (value * 10)^SPIN_EXP * SPIN_GAIN
pub const SPIN_BASE_DEG_PER_SEC: f32 = 120.0;
pub const SPIN_EXP: f32 = 2.5;
pub const SPIN_GAIN: f32 = 6.0;

// Cursor spring presets (stiffness, damping, mass)
pub const DOT_STIFFNESS: f32 = 1000.0; // snappy, tracks the pointer almost directly
pub const DOT_DAMPING: f32 = 50.0;
pub const DOT_MASS: f32 = 0.2;
pub const RING_STIFFNESS: f32 = 300.0; // heavier, trails behind
pub const RING_DAMPING: f32 = 30.0;
pub const RING_MASS: f32 = 0.1;
pub const SPRING_SETTLE_EPSILON_PX: f32 = 0.05;

// Focus envelope half-widths in scroll-progress units
pub const FOCUS_GRAY_PLATEAU: f32 = 0.05; // fully colored within +/- this of center
pub const FOCUS_GRAY_EDGE: f32 = 0.15; // fully desaturated beyond this
pub const FOCUS_OPACITY_PLATEAU: f32 = 0.05;
pub const FOCUS_OPACITY_EDGE: f32 = 0.20; // opacity ramps over a wider window than grayscale
pub const FOCUS_OPACITY_DIM: f32 = 0.3; // opacity floor far from the focal point

// Horizontal choreography track (viewport-width units)
pub const TRACK_GAP_VW: f32 = 4.0;
pub const TRACK_WIDE_ITEM_VW: f32 = 60.0; // landscape media
pub const TRACK_STD_ITEM_VW: f32 = 45.0;
pub const TRACK_CENTER_VW: f32 = 42.5; // focal column inside the content region
pub const COMPACT_BREAKPOINT_PX: f32 = 768.0;

// Shutter sequencer (milliseconds unless noted)
pub const SHUTTER_DURATION_MS: f64 = 800.0;
pub const SHUTTER_EASE: [f32; 4] = [0.76, 0.0, 0.24, 1.0]; // cubic-bezier control points
pub const ACCENT_COVER_DELAY_MS: f64 = 0.0; // accent leads the cover
pub const IMAGE_COVER_DELAY_MS: f64 = 250.0;
pub const THEME_COVER_DELAY_MS: f64 = 500.0; // theme lands last, screen ends theme-colored
pub const THEME_REVEAL_DELAY_MS: f64 = 0.0; // reverse order on the way out
pub const IMAGE_REVEAL_DELAY_MS: f64 = 150.0;
pub const ACCENT_REVEAL_DELAY_MS: f64 = 300.0; // accent finishes last; it owns cleanup
pub const TRANSITION_COOLDOWN_MS: f64 = 500.0; // requests inside this window are dropped
pub const NAVIGATE_DELAY_MS: f64 = 400.0; // route change near the covering midpoint
pub const REVEAL_FALLBACK_MS: f64 = 1800.0; // reveal anyway if the pathname never changes

// Shutter layer colors
pub const ACCENT_COLOR: &str = "hsl(46, 2%, 35%)";
pub const THEME_DARK_COLOR: &str = "hsl(0, 0%, 5%)";
pub const THEME_LIGHT_COLOR: &str = "hsl(0, 0%, 95%)";

// Uptime / overheat timer
pub const THERMAL_LIMIT_SECS: u32 = 180;
pub const THERMAL_WARN_WINDOW_SECS: u32 = 10; // HUD turns red this close to the limit
pub const REBOOT_COOLDOWN_MS: f64 = 5000.0;

// Scroll-velocity skew
pub const SKEW_VELOCITY_GAIN: f32 = 0.25; // degrees per velocity unit
pub const STRETCH_VELOCITY_GAIN: f32 = 0.002;
pub const STRETCH_MAX: f32 = 0.1;
pub const VELOCITY_DECAY_PER_SEC: f32 = 8.0;

// Text scramble
pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_!@#$%^&*()";
pub const SCRAMBLE_DURATION_MS: f64 = 1000.0;

// Preloader
pub const PRELOAD_GRACE_MS: f64 = 500.0;
