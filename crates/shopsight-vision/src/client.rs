//! HTTP client for the vision-language identification API.
//!
//! Sends a base64-encoded capture to a `generateContent`-style endpoint with
//! one of two fixed prompts and turns the completion text into an
//! [`Identification`]. The prompt (and therefore the parse) is selected by
//! [`IdentificationMode`] at call time.

use std::time::Duration;

use base64::Engine;
use reqwest::{Client, Url};
use serde_json::json;

use shopsight_core::{Identification, IdentificationMode};

use crate::error::VisionError;
use crate::types::GenerateContentResponse;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Instructs the model to read the digits printed under the barcode and
/// nothing else.
const BARCODE_PROMPT: &str = "You will receive an image containing a product barcode. \
Read the digits printed under the barcode and return ONLY those digits, \
with no spaces, punctuation, or other text.";

/// Instructs the model to name the product in one sentence.
const DESCRIPTION_PROMPT: &str = "You will receive an image of a product. \
Look at the product and its packaging. Return ONLY a single sentence describing \
the product, including the brand name and product name if visible. \
For example: 'Old Spice Pure Sport Deodorant' or 'Coca-Cola Classic 2L'. \
Do not include any other text or formatting.";

/// Client for the vision identification API.
///
/// Use [`VisionClient::new`] for production or
/// [`VisionClient::with_base_url`] to point at a mock server in tests.
pub struct VisionClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl VisionClient {
    /// Creates a new client pointed at the production vision API.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, VisionError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VisionError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, VisionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("shopsight/0.1 (product-resolution)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| VisionError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Identifies the product in `image` according to `mode`.
    ///
    /// Barcode mode returns [`Identification::Upc`] with whatever digit
    /// string the model produced — no check-digit or length validation is
    /// applied. Description mode returns the trimmed one-sentence
    /// completion.
    ///
    /// # Errors
    ///
    /// - [`VisionError::Http`] on network failure or non-2xx status.
    /// - [`VisionError::Deserialize`] if the body does not match the
    ///   `generateContent` shape.
    /// - [`VisionError::EmptyExtraction`] if the completion is empty or, in
    ///   barcode mode, contains no digits.
    pub async fn identify(
        &self,
        image: &[u8],
        mode: IdentificationMode,
    ) -> Result<Identification, VisionError> {
        let prompt = match mode {
            IdentificationMode::Barcode => BARCODE_PROMPT,
            IdentificationMode::Description => DESCRIPTION_PROMPT,
        };

        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let payload = json!({
            "contents": [{
                "parts": [
                    { "text": prompt },
                    { "inlineData": { "mimeType": "image/png", "data": encoded } }
                ]
            }]
        });

        let url = self.generate_url();
        let response = self.client.post(url).json(&payload).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| VisionError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_owned())
            .unwrap_or_default();

        tracing::debug!(mode = ?mode, completion = %text, "vision completion received");

        match mode {
            IdentificationMode::Barcode => extract_upc(&text)
                .map(Identification::Upc)
                .ok_or(VisionError::EmptyExtraction { expected: "digits" }),
            IdentificationMode::Description => {
                if text.is_empty() {
                    Err(VisionError::EmptyExtraction {
                        expected: "description",
                    })
                } else {
                    Ok(Identification::Description(text))
                }
            }
        }
    }

    /// Builds the `generateContent` URL with the API key appended as a query
    /// parameter.
    fn generate_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("v1beta/models/{}:generateContent", self.model));
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

/// Pulls a UPC digit string out of a model completion.
///
/// The model occasionally wraps its answer in code fences or spaces the
/// digits out; everything except ASCII digits is discarded. Returns `None`
/// when no digits remain.
fn extract_upc(text: &str) -> Option<String> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}
