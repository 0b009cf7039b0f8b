use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardError::corrupt_draft("x")
            .to_string()
            .contains("corrupt draft:")
    );
    assert!(CardError::export("x").to_string().contains("export error:"));
    assert!(CardError::payment("x").to_string().contains("payment error:"));
    assert!(
        CardError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: CardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CardError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
