//! Connector configuration records
//!
//! Three layered records drive every call: base delivery options,
//! breakpoint-computation parameters and transformation defaults. The
//! default templates are immutable constants combined by copy-on-merge;
//! update operations produce a new record, later layers winning key by key.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_BREAKPOINTS, DEFAULT_MAX_WIDTH, DEFAULT_MIN_SIZE_DIFF_KB, DEFAULT_MIN_WIDTH,
};
use crate::transform::ParamMap;

/// How the service should source the asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    /// Deliver a remote URL fetched on the fly by the service (default)
    #[default]
    Fetch,
    /// Deliver an asset previously uploaded to the service
    Upload,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Fetch => "fetch",
            DeliveryType::Upload => "upload",
        }
    }
}

/// Delivery-level options shared by every call on one connector
#[derive(Debug, Clone, PartialEq)]
pub struct BaseOptions {
    pub delivery_type: DeliveryType,
    pub secure: bool,
    /// Pass-through service options the connector does not interpret
    /// (the default URL builder understands `cname`)
    pub extra: ParamMap,
}

impl Default for BaseOptions {
    fn default() -> Self {
        Self {
            delivery_type: DeliveryType::Fetch,
            secure: true,
            extra: ParamMap::new(),
        }
    }
}

impl BaseOptions {
    /// Copy-on-merge: produce a new record with the update's present
    /// fields applied on top of this one
    pub fn merged(&self, update: &BaseOptionsUpdate) -> BaseOptions {
        let mut out = self.clone();
        if let Some(delivery_type) = update.delivery_type {
            out.delivery_type = delivery_type;
        }
        if let Some(secure) = update.secure {
            out.secure = secure;
        }
        for (key, value) in &update.extra {
            out.extra.insert(key.clone(), value.clone());
        }
        out
    }
}

/// Partial update for [`BaseOptions`]; `None` fields leave the stored
/// value alone
#[derive(Debug, Clone, Default)]
pub struct BaseOptionsUpdate {
    pub delivery_type: Option<DeliveryType>,
    pub secure: Option<bool>,
    pub extra: ParamMap,
}

/// Parameters controlling responsive-breakpoint computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointConfig {
    /// Smallest wanted breakpoint width in pixels
    pub min_width: u32,
    /// Largest wanted breakpoint width in pixels
    pub max_width: u32,
    /// Minimum file-size difference between neighbouring breakpoints
    pub min_size_diff_kb: u32,
    /// Maximum number of breakpoints the service may return
    pub max_breakpoints: u32,
    /// Explicit width list; non-empty short-circuits computation entirely
    pub list: Option<Vec<u32>>,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            min_size_diff_kb: DEFAULT_MIN_SIZE_DIFF_KB,
            max_breakpoints: DEFAULT_MAX_BREAKPOINTS,
            list: None,
        }
    }
}

impl BreakpointConfig {
    /// Copy-on-merge with a call-time override; override fields win
    pub fn merged(&self, update: &BreakpointConfigUpdate) -> BreakpointConfig {
        BreakpointConfig {
            min_width: update.min_width.unwrap_or(self.min_width),
            max_width: update.max_width.unwrap_or(self.max_width),
            min_size_diff_kb: update.min_size_diff_kb.unwrap_or(self.min_size_diff_kb),
            max_breakpoints: update.max_breakpoints.unwrap_or(self.max_breakpoints),
            list: update.list.clone().or_else(|| self.list.clone()),
        }
    }

    /// Synthesized min/mid/max set used when remote computation fails
    pub fn fallback_widths(&self) -> [u32; 3] {
        [
            self.min_width,
            (self.min_width + self.max_width) / 2,
            self.max_width,
        ]
    }
}

/// Partial update for [`BreakpointConfig`]
#[derive(Debug, Clone, Default)]
pub struct BreakpointConfigUpdate {
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub min_size_diff_kb: Option<u32>,
    pub max_breakpoints: Option<u32>,
    pub list: Option<Vec<u32>>,
}
