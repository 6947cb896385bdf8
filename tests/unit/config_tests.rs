// Configuration record unit tests

use media_connector::config::*;
use media_connector::connector::Connector;
use media_connector::transform::ParamValue;
use rstest::rstest;

#[test]
fn test_fresh_connector_has_default_breakpoint_config() {
    let connector = Connector::new("demo");
    let config = connector.breakpoint_config();
    assert_eq!(
        config,
        BreakpointConfig {
            min_width: 320,
            max_width: 4000,
            min_size_diff_kb: 25,
            max_breakpoints: 6,
            list: None,
        }
    );
}

#[test]
fn test_base_options_merge_precedence() {
    // updateBaseOptions({a:1}); updateBaseOptions({a:2, b:3}) yields {a:2, b:3}
    let mut connector = Connector::new("demo");

    let mut first = BaseOptionsUpdate::default();
    first.extra.insert("a".to_string(), ParamValue::from(1i64));
    connector.update_base_options(first);

    let mut second = BaseOptionsUpdate::default();
    second.extra.insert("a".to_string(), ParamValue::from(2i64));
    second.extra.insert("b".to_string(), ParamValue::from(3i64));
    connector.update_base_options(second);

    let options = connector.base_options();
    assert_eq!(options.extra.get("a"), Some(&ParamValue::from(2i64)));
    assert_eq!(options.extra.get("b"), Some(&ParamValue::from(3i64)));
    // Defaults underneath survive the merges
    assert_eq!(options.delivery_type, DeliveryType::Fetch);
    assert!(options.secure);
}

#[rstest]
#[case(320, 4000, [320, 2160, 4000])]
#[case(100, 300, [100, 200, 300])]
#[case(1000, 1000, [1000, 1000, 1000])]
fn test_fallback_widths_formula(
    #[case] min_width: u32,
    #[case] max_width: u32,
    #[case] expected: [u32; 3],
) {
    let config = BreakpointConfig {
        min_width,
        max_width,
        ..Default::default()
    };
    assert_eq!(config.fallback_widths(), expected);
}

#[rstest]
#[case(None, 320)]
#[case(Some(640), 640)]
fn test_breakpoint_min_width_override(#[case] override_value: Option<u32>, #[case] expected: u32) {
    let merged = BreakpointConfig::default().merged(&BreakpointConfigUpdate {
        min_width: override_value,
        ..Default::default()
    });
    assert_eq!(merged.min_width, expected);
}

#[test]
fn test_updates_never_mutate_default_template() {
    let mut connector = Connector::new("demo");
    connector.update_breakpoint_config(BreakpointConfigUpdate {
        max_width: Some(1),
        ..Default::default()
    });

    // A second connector still sees the pristine defaults
    let fresh = Connector::new("demo");
    assert_eq!(fresh.breakpoint_config().max_width, 4000);
}
