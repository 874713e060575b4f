use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GlowError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        GlowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_and_other_preserve_source() {
    let err: GlowError = std::io::Error::other("disk gone").into();
    assert!(err.to_string().contains("disk gone"));

    let base = std::io::Error::other("boom");
    let err = GlowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
