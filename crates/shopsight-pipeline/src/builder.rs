//! Pipeline construction from application configuration.

use thiserror::Error;

use shopsight_core::{AppConfig, ConfigError, IdentificationMode, RetailerCatalog};
use shopsight_geo::{
    DistanceEstimator, DistanceStrategy, GeoError, LocationProvider, OrsClient, PlacesClient,
    StaticLocation,
};
use shopsight_search::{SearchClient, SearchError};
use shopsight_vision::{CatalogClient, CatalogError, VisionClient, VisionError};

use crate::pipeline::ResolutionPipeline;

/// A client could not be constructed from configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("vision client: {0}")]
    Vision(#[from] VisionError),

    #[error("catalog client: {0}")]
    Catalog(#[from] CatalogError),

    #[error("search client: {0}")]
    Search(#[from] SearchError),

    #[error("geo client: {0}")]
    Geo(#[from] GeoError),

    #[error("retailer catalog: {0}")]
    Retailers(#[from] ConfigError),

    /// Neither the config nor the caller supplied a device position, and
    /// distance annotation has nothing to fall back on.
    #[error("no location provider: set SHOPSIGHT_ORIGIN_LATITUDE/LONGITUDE or pass a provider")]
    NoLocationProvider,
}

/// Builds a production pipeline from [`AppConfig`].
///
/// The retailer catalog is read from `config.retailers_path` when that file
/// exists; otherwise the built-in Canadian default ships. When `location`
/// is `None`, the config's static origin is used.
///
/// # Errors
///
/// Returns [`BuildError`] when any client cannot be constructed, the
/// retailers file is invalid, or no location source is available.
pub fn build_pipeline(
    config: &AppConfig,
    mode: IdentificationMode,
    strategy: DistanceStrategy,
    location: Option<Box<dyn LocationProvider>>,
) -> Result<ResolutionPipeline, BuildError> {
    let timeout = config.request_timeout_secs;

    let vision = VisionClient::new(&config.vision_api_key, &config.vision_model, timeout)?;

    let catalog = config
        .catalog_api_key
        .as_deref()
        .map(|key| CatalogClient::new(key, timeout))
        .transpose()?;

    let search = SearchClient::new(
        &config.search_api_key,
        config.search_locale.clone(),
        config.search_max_results,
        timeout,
    )?;

    let ors = config
        .routing_api_key
        .as_deref()
        .map(|key| OrsClient::new(key, timeout))
        .transpose()?;
    let places = PlacesClient::new(timeout)?;
    let estimator =
        DistanceEstimator::new(strategy, ors, places, config.country_boundary.clone());

    let location = match location {
        Some(provider) => provider,
        None => {
            let origin = config.static_origin.ok_or(BuildError::NoLocationProvider)?;
            Box::new(StaticLocation(origin))
        }
    };

    let retailers = if config.retailers_path.exists() {
        shopsight_core::load_retailers(&config.retailers_path)?
    } else {
        tracing::debug!(
            path = %config.retailers_path.display(),
            "no retailers file; using built-in catalog"
        );
        RetailerCatalog::default()
    };

    Ok(ResolutionPipeline::new(
        mode,
        vision,
        catalog,
        search,
        estimator,
        location,
        retailers,
        config.default_city.clone(),
    ))
}
