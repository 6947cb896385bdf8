//! Delivery URL construction
//!
//! Renders delivery URLs for the CDN: scheme, shared distribution host (or
//! a custom `cname`), cloud name, delivery type, the serialized
//! transformation chain, then the asset source. Each transformation step
//! becomes one path segment of comma-joined `code_value` pairs.

use crate::config::BaseOptions;
use crate::constants::DELIVERY_HOST;
use crate::transform::{ParamMap, ParamValue};

/// Builds a fully-qualified delivery URL for one asset
///
/// The connector treats URL construction as a collaborator behind this
/// seam so tests can substitute their own rendering.
pub trait UrlBuilder: Send + Sync {
    fn build(&self, public_id: &str, base: &BaseOptions, steps: &[ParamMap]) -> String;
}

/// Default URL builder targeting the shared CDN distribution
#[derive(Debug, Clone)]
pub struct CdnUrlBuilder {
    cloud_name: String,
}

impl CdnUrlBuilder {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }
}

impl UrlBuilder for CdnUrlBuilder {
    fn build(&self, public_id: &str, base: &BaseOptions, steps: &[ParamMap]) -> String {
        let scheme = if base.secure { "https" } else { "http" };
        let host = base
            .extra
            .get("cname")
            .map(|v| v.as_url_value())
            .unwrap_or_else(|| DELIVERY_HOST.to_string());

        let mut url = format!(
            "{}://{}/{}/image/{}",
            scheme,
            host,
            self.cloud_name,
            base.delivery_type.as_str()
        );

        let transformation = render_steps(steps);
        if !transformation.is_empty() {
            url.push('/');
            url.push_str(&transformation);
        }

        url.push('/');
        url.push_str(&escape_source(public_id));
        url
    }
}

/// Short codes used in the URL for known parameter names; unknown names
/// pass through verbatim
fn short_code(name: &str) -> &str {
    match name {
        "angle" => "a",
        "aspect_ratio" => "ar",
        "background" => "b",
        "border" => "bo",
        "color" => "co",
        "crop" => "c",
        "default_image" => "d",
        "density" => "dn",
        "dpr" => "dpr",
        "effect" => "e",
        "fetch_format" => "f",
        "flags" => "fl",
        "gravity" => "g",
        "height" => "h",
        "opacity" => "o",
        "overlay" => "l",
        "page" => "pg",
        "quality" => "q",
        "radius" => "r",
        "underlay" => "u",
        "width" => "w",
        "x" => "x",
        "y" => "y",
        "zoom" => "z",
        other => other,
    }
}

/// Render one step as comma-joined `code_value` pairs, key order
fn render_step(step: &ParamMap) -> String {
    step.iter()
        .map(|(key, value): (&String, &ParamValue)| {
            format!("{}_{}", short_code(key), value.as_url_value())
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a chain as slash-separated steps, skipping empty ones
fn render_steps(steps: &[ParamMap]) -> String {
    steps
        .iter()
        .filter(|step| !step.is_empty())
        .map(render_step)
        .collect::<Vec<_>>()
        .join("/")
}

/// Escape an asset source for embedding in the URL path.
///
/// Keeps `/` and `:` intact so remote fetch URLs survive; encodes only the
/// characters the CDN treats as delimiters.
fn escape_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for ch in source.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '?' => out.push_str("%3F"),
            _ => out.push(ch),
        }
    }
    out
}
