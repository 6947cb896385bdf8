// Constants module - centralized default values for the connector
//
// This module defines all default values used throughout the codebase.
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// Breakpoint defaults
// =============================================================================

/// Default smallest wanted breakpoint width in pixels
pub const DEFAULT_MIN_WIDTH: u32 = 320;

/// Default largest wanted breakpoint width in pixels
pub const DEFAULT_MAX_WIDTH: u32 = 4000;

/// Default minimum file-size difference between breakpoints in KB
pub const DEFAULT_MIN_SIZE_DIFF_KB: u32 = 25;

/// Default maximum number of computed breakpoints
pub const DEFAULT_MAX_BREAKPOINTS: u32 = 6;

// =============================================================================
// Delivery defaults
// =============================================================================

/// Shared hostname of the delivery CDN
pub const DELIVERY_HOST: &str = "res.cloudinary.com";

/// Upper bound on total pixels the service will deliver per asset
pub const MAX_PIXEL: u64 = 25 * 1000 * 1000;

// =============================================================================
// Transport
// =============================================================================

/// Vendor response header carrying the upstream failure reason
pub const VENDOR_ERROR_HEADER: &str = "x-cld-error";
