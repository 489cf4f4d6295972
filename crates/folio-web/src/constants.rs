// DOM ids and class names the widgets bind to.

pub const ID_PRELOADER: &str = "preloader";
pub const ID_PRELOAD_PCT: &str = "preload-pct";
pub const ID_PRELOAD_BAR: &str = "preload-bar";

pub const ID_HERO_GATE: &str = "hero-gate";
pub const ID_GATE_PROGRESS: &str = "gate-progress";

pub const ID_CURSOR_DOT: &str = "cursor-dot";
pub const ID_CURSOR_RING: &str = "cursor-ring";
pub const ID_CURSOR_LABEL: &str = "cursor-label";
pub const ID_CURSOR_HOLD: &str = "cursor-hold";
pub const ID_CURSOR_DASH_INNER: &str = "cursor-dash-inner";
pub const ID_CURSOR_DASH_OUTER: &str = "cursor-dash-outer";

pub const ID_SHUTTER_ACCENT: &str = "shutter-accent";
pub const ID_SHUTTER_IMAGE: &str = "shutter-image";
pub const ID_SHUTTER_THEME: &str = "shutter-theme";

pub const ID_DETAIL_TRACK: &str = "detail-track";
pub const ID_TRACK_ITEMS: &str = "track-items";
pub const ID_PROJECT_ARCANA: &str = "project-arcana";
pub const ID_BACK_LINK: &str = "back-link";

pub const ID_THEME_TOGGLE: &str = "theme-toggle";

pub const ID_HUD_UPTIME: &str = "hud-uptime";
pub const ID_REST_OVERLAY: &str = "rest-overlay";
pub const ID_REST_RESUME: &str = "rest-resume";

pub const CLASS_PROJECT_CARD: &str = "project-card";
pub const CLASS_TRACK_ITEM: &str = "track-item";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_WARN: &str = "warn";
pub const CLASS_HOVERED: &str = "hovered";
pub const CLASS_CLICK: &str = "click";

pub const HOME_PATH: &str = "/";
pub const ARCANA_PLACEHOLDER: &str = "ARCANA";
