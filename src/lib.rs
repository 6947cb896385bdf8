// Media Connector Library
// Configuration and delivery-URL construction for a hosted media-transformation CDN

pub mod config;
pub mod connector;
pub mod constants;
pub mod error;
pub mod info;
pub mod logging;
pub mod transform;
pub mod transport;
pub mod url;
