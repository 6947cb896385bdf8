//! Transformation parameter model
//!
//! A transformation is an ordered sequence of parameter maps ("steps").
//! A bare map is the one-step case; multi-step requests use an explicit
//! chain. The first step of any request receives the connector's
//! transformation defaults, and the `aspectRatio` convenience key is
//! rewritten into the service's native `aspect_ratio` parameter on every
//! step before URL rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single transformation parameter value
///
/// Variant order matters for untagged deserialization: booleans and
/// integers must be tried before the string catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Render the value the way it appears inside a delivery URL
    pub fn as_url_value(&self) -> String {
        match self {
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(v) => v.to_string(),
            ParamValue::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_url_value())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Parameter map for one transformation step
///
/// A BTreeMap keeps rendering deterministic: parameters appear in the URL
/// in key order.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// One call's transformation request
///
/// Explicit tagged union replacing the duck-typed "is this a chain or a
/// plain options object" branch: only the chain variant carries the
/// multi-step capability.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    /// A single bare parameter map
    Raw(ParamMap),
    /// An ordered multi-step chain
    Chain(TransformationChain),
}

impl Transformation {
    /// Normalize to an owned step sequence; a bare map wraps as one step
    pub fn into_steps(self) -> Vec<ParamMap> {
        match self {
            Transformation::Raw(map) => vec![map],
            Transformation::Chain(chain) => chain.into_steps(),
        }
    }
}

impl From<ParamMap> for Transformation {
    fn from(map: ParamMap) -> Self {
        Transformation::Raw(map)
    }
}

impl From<TransformationChain> for Transformation {
    fn from(chain: TransformationChain) -> Self {
        Transformation::Chain(chain)
    }
}

/// Ordered sequence of transformation steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformationChain {
    steps: Vec<ParamMap>,
}

impl TransformationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, builder style
    pub fn step(mut self, step: ParamMap) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: ParamMap) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render the chain to an owned step sequence
    pub fn to_steps(&self) -> Vec<ParamMap> {
        self.steps.clone()
    }

    pub fn into_steps(self) -> Vec<ParamMap> {
        self.steps
    }
}

/// Crate-default transformation parameters merged under every first step
pub fn default_params() -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("crop".to_string(), ParamValue::from("fill"));
    map.insert("fetch_format".to_string(), ParamValue::from("auto"));
    map
}

/// Merge `defaults` under the first step; the step's own keys win.
///
/// An empty sequence gains a single step holding only the defaults.
pub fn apply_defaults(steps: &mut Vec<ParamMap>, defaults: &ParamMap) {
    if steps.is_empty() {
        steps.push(ParamMap::new());
    }
    let first = &mut steps[0];
    for (key, value) in defaults {
        first
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
}

/// The convenience key rewritten into the service's native parameter
const ASPECT_RATIO_ALIAS: &str = "aspectRatio";

/// Rewrite `aspectRatio: "16x9"` into `aspect_ratio: "16:9"` on every step,
/// removing the convenience key. Only the first `x` is replaced; non-string
/// values move over unchanged.
pub fn normalize_aspect_ratio(steps: &mut [ParamMap]) {
    for step in steps.iter_mut() {
        if let Some(value) = step.remove(ASPECT_RATIO_ALIAS) {
            let native = match value {
                ParamValue::Str(s) => ParamValue::Str(s.replacen('x', ":", 1)),
                other => other,
            };
            step.insert("aspect_ratio".to_string(), native);
        }
    }
}
