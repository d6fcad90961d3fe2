//! The presentation-ready result of a consultation.

use serde::{Deserialize, Serialize};

use crate::annotation;
use crate::oracle::Selection;

/// The three fields a front-end needs to render an oracle card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleAnswer {
    /// The quotation with any trailing source annotation removed.
    pub main_text: String,
    /// The annotation content, or `"Unknown Source"`.
    pub source_label: String,
    /// The chosen image URL.
    pub image_url: String,
}

impl OracleAnswer {
    /// Split the selected line and pair it with the selected image.
    pub fn from_selection(selection: Selection<'_>) -> Self {
        let (main_text, source_label) = annotation::split(selection.text);
        Self {
            main_text,
            source_label,
            image_url: selection.image.to_string(),
        }
    }

    /// Whether the quotation carried no source annotation.
    pub fn has_unknown_source(&self) -> bool {
        self.source_label == annotation::UNKNOWN_SOURCE
    }
}
