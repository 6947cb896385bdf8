// Error types module

use std::fmt;

/// Centralized error type for the connector
///
/// Both variants carry the asset id, the URL that was attempted against the
/// service and the upstream reason so failures are diagnosable from the
/// error alone.
#[derive(Debug, Clone)]
pub enum ConnectorError {
    /// Breakpoint computation against the remote service failed
    BreakpointResolution {
        public_id: String,
        url: String,
        reason: String,
    },

    /// Asset metadata retrieval from the remote service failed
    InfoResolution {
        public_id: String,
        url: String,
        reason: String,
    },
}

impl ConnectorError {
    pub fn breakpoint_resolution(
        public_id: impl Into<String>,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConnectorError::BreakpointResolution {
            public_id: public_id.into(),
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn info_resolution(
        public_id: impl Into<String>,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConnectorError::InfoResolution {
            public_id: public_id.into(),
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::BreakpointResolution {
                public_id,
                url,
                reason,
            } => {
                write!(
                    f,
                    "Error calculating breakpoints for '{}' via {}: {}",
                    public_id, url, reason
                )
            }
            ConnectorError::InfoResolution {
                public_id,
                url,
                reason,
            } => {
                write!(
                    f,
                    "Error retrieving asset info for '{}' via {}: {}",
                    public_id, url, reason
                )
            }
        }
    }
}

impl std::error::Error for ConnectorError {}
