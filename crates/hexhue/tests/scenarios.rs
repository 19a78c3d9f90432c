use hexhue::{
    ColorError, DEFAULT_ADJUST_AMOUNT, DEFAULT_BLEND_WEIGHT, Hsl, Rgb, blend, complementary,
    darken, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, lighten, rgb_to_hex, rgb_to_hsl,
};

#[test]
fn red_through_every_representation() {
    let rgb = hex_to_rgb("#ff0000").unwrap();
    assert_eq!(rgb, Rgb { r: 255, g: 0, b: 0 });

    let hsl = rgb_to_hsl(rgb);
    assert_eq!(hsl, Hsl { h: 0.0, s: 100.0, l: 50.0 });
    assert_eq!(hex_to_hsl("#ff0000").unwrap(), hsl);

    assert_eq!(hsl_to_rgb(hsl), rgb);
    assert_eq!(hsl_to_hex(hsl), "#ff0000");
    assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
}

#[test]
fn complementary_of_red_is_cyan() {
    assert_eq!(complementary("#ff0000").unwrap(), "#00ffff");
}

#[test]
fn adjustments_with_default_amount() {
    // 255 * 0.5 = 127.5 floors to 127
    assert_eq!(darken("#ffffff", DEFAULT_ADJUST_AMOUNT).unwrap(), "#7f7f7f");
    assert_eq!(lighten("#000000", DEFAULT_ADJUST_AMOUNT).unwrap(), "#000000");
}

#[test]
fn even_blend_of_black_and_white() {
    assert_eq!(
        blend("#000000", "#ffffff", DEFAULT_BLEND_WEIGHT).unwrap(),
        "#808080"
    );
}

#[test]
fn every_validating_operation_rejects_garbage() {
    let expected = Err(ColorError::InvalidColorFormat {
        input: "not-a-color".to_owned(),
    });
    assert_eq!(hex_to_rgb("not-a-color"), expected);
    assert!(hex_to_hsl("not-a-color").is_err());
    assert!(complementary("not-a-color").is_err());
    assert!(blend("not-a-color", "#fff", 0.5).is_err());
    assert!(blend("#fff", "not-a-color", 0.5).is_err());
    assert!(darken("not-a-color", 0.5).is_err());
    assert!(lighten("not-a-color", 0.5).is_err());
}

#[test]
fn error_message_names_input() {
    let err = hex_to_rgb("#12345").unwrap_err();
    assert_eq!(err.to_string(), "invalid color format: \"#12345\"");
}
