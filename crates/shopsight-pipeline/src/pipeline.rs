//! The resolve flow itself.

use futures::future::join_all;

use shopsight_core::{
    sort_by_price, CaptureInput, Distance, Identification, IdentificationMode, Offer,
    ResolvedResultSet, RetailerCatalog,
};
use shopsight_geo::{DistanceEstimator, LocationProvider};
use shopsight_search::{RawOffer, SearchClient};
use shopsight_vision::{CatalogClient, CatalogError, VisionClient};

use crate::error::PipelineError;
use crate::stage::PipelineStage;

/// One configured resolution pipeline.
///
/// Identification mode and distance strategy are fixed at construction;
/// per-capture state lives entirely inside [`ResolutionPipeline::resolve`],
/// so one pipeline instance serves any number of sequential or superseding
/// captures. Callers wanting last-request-wins semantics simply drop the
/// future of a superseded resolve.
pub struct ResolutionPipeline {
    mode: IdentificationMode,
    vision: VisionClient,
    catalog: Option<CatalogClient>,
    search: SearchClient,
    estimator: DistanceEstimator,
    location: Box<dyn LocationProvider>,
    retailers: RetailerCatalog,
    default_city: Option<String>,
}

impl ResolutionPipeline {
    #[must_use]
    pub fn new(
        mode: IdentificationMode,
        vision: VisionClient,
        catalog: Option<CatalogClient>,
        search: SearchClient,
        estimator: DistanceEstimator,
        location: Box<dyn LocationProvider>,
        retailers: RetailerCatalog,
        default_city: Option<String>,
    ) -> Self {
        Self {
            mode,
            vision,
            catalog,
            search,
            estimator,
            location,
            retailers,
            default_city,
        }
    }

    /// Resolves one capture into a price-sorted, distance-annotated offer
    /// list.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Identification`] when the vision model cannot
    ///   extract a UPC or description.
    /// - [`PipelineError::CatalogLookup`] when the barcode flow finds no
    ///   product for the code (or no catalog is configured).
    ///
    /// Search failures are not errors: they degrade to an empty result set.
    pub async fn resolve(
        &self,
        capture: CaptureInput,
    ) -> Result<ResolvedResultSet, PipelineError> {
        // Identifying.
        let identification = self
            .vision
            .identify(&capture.image, self.mode)
            .await
            .map_err(|source| PipelineError::Identification { source })?;

        // CatalogLookup — barcode flow only; the description flow searches
        // on the completion text directly.
        let query = match identification {
            Identification::Upc(upc) => {
                tracing::debug!(stage = %PipelineStage::CatalogLookup, upc = %upc, "barcode identified");
                let catalog = self.catalog.as_ref().ok_or(PipelineError::CatalogLookup {
                    source: CatalogError::NotConfigured,
                })?;
                let product = catalog
                    .lookup(&upc)
                    .await
                    .map_err(|source| PipelineError::CatalogLookup { source })?;
                product.search_query()
            }
            Identification::Description(text) => text,
        };

        // Searching. A failed search degrades to "no results" rather than
        // erroring the resolve.
        let raw = match self.search.search_targets(&query, &self.retailers).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(stage = %PipelineStage::Searching, query = %query, error = %e, "shopping search failed; degrading to empty result set");
                Vec::new()
            }
        };

        // Normalizing.
        let mut offers: Vec<Offer> = raw
            .into_iter()
            .map(|r| self.to_offer(r))
            .collect();
        tracing::debug!(stage = %PipelineStage::Normalizing, count = offers.len(), "offers normalized");

        // DistanceAnnotating — concurrent fan-out, one estimate per offer,
        // each capturing its own failure as `Distance::Unavailable`.
        if let Some(origin) = self.origin_for(&capture) {
            let city = self.city_for(&capture);
            let estimates = join_all(offers.iter().map(|offer| {
                self.estimator
                    .estimate(origin, &offer.canonical_seller, &city)
            }))
            .await;
            for (offer, distance) in offers.iter_mut().zip(estimates) {
                offer.distance = distance;
            }
            tracing::debug!(stage = %PipelineStage::DistanceAnnotating, count = offers.len(), "distances annotated");
        }

        // Sorting.
        sort_by_price(&mut offers);

        tracing::debug!(stage = %PipelineStage::Sorting, count = offers.len(), "resolve complete");
        Ok(ResolvedResultSet { offers })
    }

    /// The capture's city hint, falling back to the configured default.
    /// Geocoding queries still work without one; they just lose the city
    /// bias.
    fn city_for(&self, capture: &CaptureInput) -> String {
        capture
            .city
            .clone()
            .or_else(|| self.default_city.clone())
            .unwrap_or_default()
    }

    /// The capture's own origin when it has one, otherwise a fresh position
    /// from the location provider. A refusal leaves every offer's distance
    /// unavailable instead of failing the resolve.
    fn origin_for(&self, capture: &CaptureInput) -> Option<shopsight_core::GeoPoint> {
        if let Some(origin) = capture.origin {
            return Some(origin);
        }
        match self.location.locate() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!(error = %e, "device location unavailable; skipping distance annotation");
                None
            }
        }
    }

    fn to_offer(&self, raw: RawOffer) -> Offer {
        let price = raw.price.clone().unwrap_or_default();
        let price_value = shopsight_core::parse_price(&price);
        let seller = raw.seller.clone().unwrap_or_default();
        let canonical_seller = self.retailers.canonical_name(&seller);

        Offer {
            title: raw.title.clone(),
            price,
            price_value,
            seller,
            canonical_seller,
            rating: raw.rating_text(),
            review_count: raw.reviews_text(),
            thumbnail_url: raw.thumbnail,
            product_link: raw.product_link,
            distance: Distance::Unavailable,
        }
    }
}
