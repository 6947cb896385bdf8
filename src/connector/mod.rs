//! The connector
//!
//! Owns the three layered configuration records and turns an asset id plus
//! per-call options into ready-to-use delivery URLs, resolving responsive
//! breakpoints against the remote service when needed. Breakpoint-service
//! failure degrades to a synthesized min/mid/max set; it never fails a
//! srcset request on its own.

use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::{BaseOptions, BaseOptionsUpdate, BreakpointConfig, BreakpointConfigUpdate};
use crate::error::ConnectorError;
use crate::info::AssetInfo;
use crate::transform::{self, ParamMap, ParamValue, Transformation};
use crate::transport::{vendor_header_reason, HttpTransport, ReasonExtractor, Transport};
use crate::url::{CdnUrlBuilder, UrlBuilder};

/// One responsive rendition: delivery URL plus target width
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub src: String,
    pub width: u32,
    /// Reserved; the breakpoint service reports widths only
    pub height: Option<u32>,
}

/// Per-call options for [`Connector::get_src_set`]
///
/// When `transformation` is absent, `params` is the transformation — the
/// "options object doubles as the transformation" convention, made
/// explicit.
#[derive(Debug, Clone, Default)]
pub struct SrcSetOptions {
    pub transformation: Option<Transformation>,
    pub params: ParamMap,
    /// Call-time breakpoint config override
    pub breakpoint_config: Option<BreakpointConfigUpdate>,
}

impl SrcSetOptions {
    fn into_parts(self) -> (Vec<ParamMap>, Option<BreakpointConfigUpdate>) {
        let steps = match self.transformation {
            Some(transformation) => transformation.into_steps(),
            None => vec![self.params],
        };
        (steps, self.breakpoint_config)
    }
}

impl From<ParamMap> for SrcSetOptions {
    fn from(params: ParamMap) -> Self {
        SrcSetOptions {
            params,
            ..Default::default()
        }
    }
}

impl From<Transformation> for SrcSetOptions {
    fn from(transformation: Transformation) -> Self {
        SrcSetOptions {
            transformation: Some(transformation),
            ..Default::default()
        }
    }
}

/// Configuration and URL-construction connector for the media CDN
///
/// One instance per resource namespace (cloud name). The three config
/// records live for the instance's lifetime and change only through the
/// update operations.
pub struct Connector {
    base_options: BaseOptions,
    breakpoint_config: BreakpointConfig,
    transformation_defaults: ParamMap,
    url_builder: Arc<dyn UrlBuilder>,
    transport: Arc<dyn Transport>,
    reason_extractor: ReasonExtractor,
}

impl Connector {
    /// Create a connector for one cloud with default options
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self::with_base_options(cloud_name, BaseOptionsUpdate::default())
    }

    /// Create a connector with construction-time base option overrides
    pub fn with_base_options(
        cloud_name: impl Into<String>,
        base_options: BaseOptionsUpdate,
    ) -> Self {
        Self {
            base_options: BaseOptions::default().merged(&base_options),
            breakpoint_config: BreakpointConfig::default(),
            transformation_defaults: transform::default_params(),
            url_builder: Arc::new(CdnUrlBuilder::new(cloud_name)),
            transport: Arc::new(HttpTransport::default()),
            reason_extractor: vendor_header_reason,
        }
    }

    /// Replace the transport (tests inject a fake service here)
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the URL builder collaborator
    pub fn with_url_builder(mut self, url_builder: Arc<dyn UrlBuilder>) -> Self {
        self.url_builder = url_builder;
        self
    }

    /// Replace the failure-reason extraction strategy
    pub fn with_reason_extractor(mut self, extractor: ReasonExtractor) -> Self {
        self.reason_extractor = extractor;
        self
    }

    /// Shallow-merge an update into the stored base options
    pub fn update_base_options(&mut self, update: BaseOptionsUpdate) {
        self.base_options = self.base_options.merged(&update);
    }

    /// Read-only snapshot of the effective base options
    pub fn base_options(&self) -> BaseOptions {
        self.base_options.clone()
    }

    /// Shallow-merge an update into the stored breakpoint config
    pub fn update_breakpoint_config(&mut self, update: BreakpointConfigUpdate) {
        self.breakpoint_config = self.breakpoint_config.merged(&update);
    }

    /// Read-only snapshot of the effective breakpoint config
    pub fn breakpoint_config(&self) -> BreakpointConfig {
        self.breakpoint_config.clone()
    }

    /// Shallow-merge per-key overrides into the transformation defaults
    pub fn update_transformation_defaults(&mut self, defaults: ParamMap) {
        for (key, value) in defaults {
            self.transformation_defaults.insert(key, value);
        }
    }

    /// Read-only snapshot of the effective transformation defaults
    pub fn transformation_defaults(&self) -> ParamMap {
        self.transformation_defaults.clone()
    }

    /// Resolve the responsive widths for one asset.
    ///
    /// An explicit non-empty `list` wins unconditionally and a degenerate
    /// `max_width <= min_width` range short-circuits to `[max_width]`,
    /// both without touching the network. Otherwise a single
    /// breakpoint-computation request is issued against the service.
    ///
    /// # Errors
    ///
    /// [`ConnectorError::BreakpointResolution`] when the request fails or
    /// the response does not carry a usable width list.
    pub async fn resolve_breakpoints(
        &self,
        public_id: &str,
        transformation: &[ParamMap],
        override_config: Option<&BreakpointConfigUpdate>,
    ) -> Result<Vec<u32>, ConnectorError> {
        let config = self.effective_breakpoint_config(override_config);

        if let Some(list) = &config.list {
            if !list.is_empty() {
                return Ok(list.clone());
            }
        }

        // Don't ask the service for a range it would reject
        if config.max_width <= config.min_width {
            return Ok(vec![config.max_width]);
        }

        let mut steps = transformation.to_vec();
        let mut directive = ParamMap::new();
        directive.insert(
            "width".to_string(),
            ParamValue::from(format!(
                "auto:breakpoints_{}_{}_{}_{}:json",
                config.min_width, config.max_width, config.min_size_diff_kb, config.max_breakpoints
            )),
        );
        steps.push(directive);

        let url = self
            .url_builder
            .build(public_id, &self.base_options, &steps);
        debug!(public_id, %url, "requesting breakpoint computation");

        match self.transport.get_json(&url).await {
            Ok(body) => parse_breakpoints(&body)
                .map_err(|reason| ConnectorError::breakpoint_resolution(public_id, &url, reason)),
            Err(err) => {
                let reason = (self.reason_extractor)(&err);
                Err(ConnectorError::breakpoint_resolution(public_id, &url, reason))
            }
        }
    }

    /// Build a responsive srcset for one asset.
    ///
    /// Breakpoint-service failure never surfaces here: the connector logs
    /// it and falls back to the synthesized min/mid/max set from the
    /// effective breakpoint config. Entries come back in the service's
    /// order (ascending widths).
    pub async fn get_src_set(
        &self,
        public_id: &str,
        options: impl Into<SrcSetOptions>,
    ) -> Vec<Breakpoint> {
        let (mut steps, override_config) = options.into().into_parts();

        transform::apply_defaults(&mut steps, &self.transformation_defaults);
        transform::normalize_aspect_ratio(&mut steps);

        let widths = match self
            .resolve_breakpoints(public_id, &steps, override_config.as_ref())
            .await
        {
            Ok(widths) => widths,
            Err(err) => {
                warn!(public_id, error = %err, "breakpoint resolution failed, using synthesized set");
                self.effective_breakpoint_config(override_config.as_ref())
                    .fallback_widths()
                    .to_vec()
            }
        };

        widths
            .into_iter()
            .map(|width| {
                // Width goes onto a per-iteration copy; nothing the caller
                // handed in is aliased or mutated.
                let mut rendered = steps.clone();
                rendered[0].insert("width".to_string(), ParamValue::from(width));
                let src = self
                    .url_builder
                    .build(public_id, &self.base_options, &rendered);
                Breakpoint {
                    src,
                    width,
                    height: None,
                }
            })
            .collect()
    }

    /// Fetch structured metadata for one asset.
    ///
    /// Appends the metadata directive to the transformation chain and
    /// returns the service's payload verbatim.
    ///
    /// # Errors
    ///
    /// [`ConnectorError::InfoResolution`] when the request fails or the
    /// payload is malformed; the reason follows the same extraction policy
    /// as breakpoint resolution.
    pub async fn get_info(
        &self,
        public_id: &str,
        transformation: Option<Transformation>,
    ) -> Result<AssetInfo, ConnectorError> {
        let mut steps = transformation
            .map(Transformation::into_steps)
            .unwrap_or_default();

        transform::apply_defaults(&mut steps, &self.transformation_defaults);
        transform::normalize_aspect_ratio(&mut steps);

        let mut directive = ParamMap::new();
        directive.insert("flags".to_string(), ParamValue::from("getinfo"));
        steps.push(directive);

        let url = self
            .url_builder
            .build(public_id, &self.base_options, &steps);
        debug!(public_id, %url, "requesting asset info");

        let body = self.transport.get_json(&url).await.map_err(|err| {
            let reason = (self.reason_extractor)(&err);
            ConnectorError::info_resolution(public_id, &url, reason)
        })?;

        serde_json::from_value(body).map_err(|e| {
            ConnectorError::info_resolution(public_id, &url, format!("malformed info payload: {}", e))
        })
    }

    fn effective_breakpoint_config(
        &self,
        override_config: Option<&BreakpointConfigUpdate>,
    ) -> BreakpointConfig {
        match override_config {
            Some(update) => self.breakpoint_config.merged(update),
            None => self.breakpoint_config.clone(),
        }
    }
}

/// Pull the width list out of the service's breakpoint response
fn parse_breakpoints(body: &JsonValue) -> Result<Vec<u32>, String> {
    let widths = body
        .get("breakpoints")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| "response carried no breakpoints list".to_string())?;

    widths
        .iter()
        .map(|value| {
            value
                .as_u64()
                .map(|w| w as u32)
                .ok_or_else(|| format!("non-numeric breakpoint value: {}", value))
        })
        .collect()
}
