use thiserror::Error;

use shopsight_vision::{CatalogError, VisionError};

use crate::stage::PipelineStage;

/// A resolve that reached its error terminal.
///
/// Only identification and catalog lookup abort a resolve; search failures
/// degrade to an empty result set and distance failures degrade single
/// offers, so neither appears here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("product identification failed: {source}")]
    Identification {
        #[source]
        source: VisionError,
    },

    #[error("barcode catalog lookup failed: {source}")]
    CatalogLookup {
        #[source]
        source: CatalogError,
    },
}

impl PipelineError {
    /// The stage at which the resolve errored.
    #[must_use]
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Identification { .. } => PipelineStage::Identifying,
            PipelineError::CatalogLookup { .. } => PipelineStage::CatalogLookup,
        }
    }

    /// The message shown to the end user. The remedy is always "try again";
    /// no stage is retried automatically.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::Identification { .. } => {
                "Could not detect a product in the image. Please try again with a clearer image."
            }
            PipelineError::CatalogLookup { .. } => {
                "No product information found for this barcode."
            }
        }
    }
}
