use std::fmt;

use serde::{Deserialize, Serialize};

use color::NamedColor;

pub mod color;

/// Where a [`TitlePayload`] is shown on the client screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySlot {
    Title,
    Subtitle,
    ActionBar,
}

impl fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::ActionBar => "actionbar",
        })
    }
}

/// A single styled message for the title/subtitle/actionbar surface.
///
/// Serializes to the text-component JSON form the game consumes, with unset
/// style fields omitted entirely:
/// `{"text":"go!","bold":true,"color":"red"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitlePayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NamedColor>,
}

fn is_false(flag: &bool) -> bool {
    !flag
}

impl TitlePayload {
    pub fn text<P: Into<String>>(plain: P) -> Self {
        Self {
            text: plain.into(),
            bold: false,
            italic: false,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: NamedColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
