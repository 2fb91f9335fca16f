pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the exact stored value `"dark"` selects the dark theme; anything
    /// else, including a missing entry, falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-sun",
            Self::Dark => "fa-moon",
        }
    }
}
