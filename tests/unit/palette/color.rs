use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#4717F6").unwrap(), Rgb8::new(0x47, 0x17, 0xf6));
    assert_eq!(Rgb8::parse_hex("a239ca").unwrap(), Rgb8::new(0xa2, 0x39, 0xca));
    assert_eq!("  #ffFDff ".parse::<Rgb8>().unwrap(), Rgb8::from_u32(0xFFFDFF));
}

#[test]
fn rejects_bad_lengths_and_digits() {
    for bad in ["", "#fff", "#12345", "#1234567", "#GG0000", "#12 456"] {
        assert!(Rgb8::parse_hex(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn serde_uses_uppercase_hex_strings() {
    let c = Rgb8::from_u32(0x0e0b16);
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#0E0B16"));
    let back: Rgb8 = serde_json::from_value(json!("#0e0b16")).unwrap();
    assert_eq!(back, c);
    assert!(serde_json::from_value::<Rgb8>(json!("#0e0b")).is_err());
}

#[test]
fn with_alpha_premultiplies() {
    let p = Rgb8::new(255, 0, 128).with_alpha(0);
    assert_eq!(p, Rgba8Premul::transparent());
    let p = Rgb8::new(255, 0, 128).with_alpha(255);
    assert_eq!((p.r, p.g, p.b, p.a), (255, 0, 128, 255));
}
