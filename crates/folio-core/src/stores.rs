use crate::constants::{THEME_DARK_COLOR, THEME_LIGHT_COLOR};

// Small shared view-state singletons. Each is constructed once at boot and
// injected into the widgets that read it; every field has a single logical
// writer. A widget that overrides shared state (hover label) must clear it
// on leave/teardown.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Value mirrored to the document root's `data-theme` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Shutter theme-layer background for this theme.
    pub fn layer_color(self) -> &'static str {
        match self {
            Theme::Dark => THEME_DARK_COLOR,
            Theme::Light => THEME_LIGHT_COLOR,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    /// Filled ring, inverted label; used over clickable targets.
    Click,
}

/// Cursor overlay state: written by whichever element is hovered, read by
/// the cursor widget.
#[derive(Clone, Debug, Default)]
pub struct CursorState {
    pub hovered: bool,
    pub label: String,
    pub variant: CursorVariant,
}

impl CursorState {
    pub fn set_hover(&mut self, label: &str, variant: CursorVariant) {
        self.hovered = true;
        self.label.clear();
        self.label.push_str(label);
        self.variant = variant;
    }

    pub fn clear_hover(&mut self) {
        self.hovered = false;
        self.label.clear();
        self.variant = CursorVariant::Default;
    }

    /// The hold-to-enter affordance is active only while a "HOLD" target is
    /// hovered.
    pub fn hold_armed(&self) -> bool {
        self.hovered && self.label == "HOLD"
    }
}

/// Boot progression: preloader finished, gate passed.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntroState {
    pub loaded: bool,
    pub entered: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ThemeState {
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { theme: Theme::Dark }
    }
}

impl ThemeState {
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
