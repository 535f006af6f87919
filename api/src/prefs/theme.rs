use serde::Deserialize;
use serde::Serialize;

/// The color scheme requested by the user.
///
/// `Auto` defers to the Pico.css default, which follows the browser/OS
/// preference.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    /// The value for the `data-theme` attribute on the document root, or
    /// `None` to let the framework decide.
    pub fn html_attribute(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
        }
    }
}
