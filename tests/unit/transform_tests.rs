// Transformation model unit tests

use media_connector::transform::*;

fn map(pairs: &[(&str, &str)]) -> ParamMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::from(*v)))
        .collect()
}

#[test]
fn test_aspect_ratio_convenience_key_is_rewritten() {
    let mut steps = vec![map(&[("aspectRatio", "16x9")])];
    normalize_aspect_ratio(&mut steps);
    assert_eq!(steps[0].get("aspect_ratio"), Some(&ParamValue::from("16:9")));
    assert!(!steps[0].contains_key("aspectRatio"));
}

#[test]
fn test_defaults_merge_under_first_chain_step() {
    let chain = TransformationChain::new()
        .step(map(&[("crop", "fit")]))
        .step(map(&[("overlay", "badge")]));
    let mut steps = Transformation::from(chain).into_steps();
    apply_defaults(&mut steps, &default_params());

    // First step: own key wins, missing default fills in
    assert_eq!(steps[0].get("crop"), Some(&ParamValue::from("fit")));
    assert_eq!(steps[0].get("fetch_format"), Some(&ParamValue::from("auto")));
    // Later steps never receive defaults
    assert!(!steps[1].contains_key("fetch_format"));
}

#[test]
fn test_default_params_template() {
    let defaults = default_params();
    assert_eq!(defaults.get("crop"), Some(&ParamValue::from("fill")));
    assert_eq!(defaults.get("fetch_format"), Some(&ParamValue::from("auto")));
    assert_eq!(defaults.len(), 2);
}

#[test]
fn test_raw_and_chain_normalize_to_same_shape() {
    let raw_steps = Transformation::Raw(map(&[("width", "100")])).into_steps();
    let chain_steps =
        Transformation::from(TransformationChain::new().step(map(&[("width", "100")])))
            .into_steps();
    assert_eq!(raw_steps, chain_steps);
}
