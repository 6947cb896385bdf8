//! Asset metadata response types
//!
//! Shape of the service's metadata (`fl_getinfo`) JSON payload. Fields the
//! service omits deserialize as `None`; the payload is passed to callers
//! verbatim, no interpretation.

use serde::{Deserialize, Serialize};

/// Structured metadata for one delivered asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Source asset as ingested by the service
    pub input: Option<SideInfo>,
    /// Resize operations the service applied, in order
    #[serde(default)]
    pub resize: Vec<ResizeInfo>,
    /// Delivered rendition
    pub output: Option<SideInfo>,
}

/// Dimensions and encoding of the input or output side of a delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideInfo {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bytes: Option<u64>,
    pub format: Option<String>,
}

/// One resize operation applied by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeInfo {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
