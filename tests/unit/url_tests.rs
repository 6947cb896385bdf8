// Delivery URL builder unit tests

use media_connector::config::{BaseOptions, BaseOptionsUpdate, DeliveryType};
use media_connector::transform::{ParamMap, ParamValue};
use media_connector::url::{CdnUrlBuilder, UrlBuilder};

fn step(pairs: &[(&str, &str)]) -> ParamMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::from(*v)))
        .collect()
}

#[test]
fn test_fetch_url_embeds_remote_source_verbatim() {
    let builder = CdnUrlBuilder::new("demo");
    let url = builder.build(
        "https://res.cloudinary.com/idemo/image/upload/sofa_cat.jpg",
        &BaseOptions::default(),
        &[step(&[("width", "320")])],
    );
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/fetch/w_320/https://res.cloudinary.com/idemo/image/upload/sofa_cat.jpg"
    );
}

#[test]
fn test_upload_url_uses_public_id() {
    let builder = CdnUrlBuilder::new("demo");
    let base = BaseOptions::default().merged(&BaseOptionsUpdate {
        delivery_type: Some(DeliveryType::Upload),
        ..Default::default()
    });
    let url = builder.build("folder/sofa_cat.jpg", &base, &[]);
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/upload/folder/sofa_cat.jpg"
    );
}

#[test]
fn test_known_parameters_render_as_short_codes() {
    let builder = CdnUrlBuilder::new("demo");
    let url = builder.build(
        "cat.jpg",
        &BaseOptions::default(),
        &[step(&[
            ("aspect_ratio", "16:9"),
            ("crop", "fill"),
            ("fetch_format", "auto"),
            ("gravity", "auto"),
            ("page", "1"),
            ("quality", "80"),
            ("width", "800"),
        ])],
    );
    assert!(url.contains("/ar_16:9,c_fill,f_auto,g_auto,pg_1,q_80,w_800/"));
}

#[test]
fn test_insecure_base_options_use_http() {
    let builder = CdnUrlBuilder::new("demo");
    let base = BaseOptions::default().merged(&BaseOptionsUpdate {
        secure: Some(false),
        ..Default::default()
    });
    let url = builder.build("cat.jpg", &base, &[]);
    assert!(url.starts_with("http://"));
}
