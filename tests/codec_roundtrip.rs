use punchgrid::design::Design;
use punchgrid::error::EditorError;
use punchgrid::stitch::Stitch;
use punchgrid::{share_codec, text_codec};

fn create_sample_design() -> Design {
    let mut design = Design::blank(4, 3).unwrap();
    for index in [0, 5, 7, 10] {
        design = design.with_stitch(index, Stitch::Punched).unwrap();
    }
    design
}

#[test]
fn test_blank_grid_encodes_to_dashes() {
    let design = Design::blank(3, 2).unwrap();
    assert_eq!(text_codec::encode(&design), "---\n---");
}

#[test]
fn test_encode_after_set_stitch() {
    let design = Design::blank(3, 2)
        .unwrap()
        .with_stitch(1, Stitch::Punched)
        .unwrap();
    assert_eq!(text_codec::encode(&design), "-x-\n---");
}

#[test]
fn test_decode_example() {
    let design = text_codec::decode("x-\n-x").unwrap();
    assert_eq!(design.columns(), 2);
    assert_eq!(design.rows(), 2);
    assert_eq!(
        design.stitches(),
        [
            Stitch::Punched,
            Stitch::Unpunched,
            Stitch::Unpunched,
            Stitch::Punched
        ]
    );
}

#[test]
fn test_text_round_trip() {
    let design = create_sample_design();
    let decoded = text_codec::decode(&text_codec::encode(&design)).unwrap();
    assert_eq!(decoded, design);
}

#[test]
fn test_decode_coerces_unknown_characters() {
    let design = text_codec::decode("xX?\no x").unwrap();
    assert_eq!(
        design.stitches(),
        [
            Stitch::Punched,
            Stitch::Unpunched,
            Stitch::Unpunched,
            Stitch::Unpunched,
            Stitch::Unpunched,
            Stitch::Punched
        ]
    );
}

// Ragged input policy (assumed, not inherited): the first line fixes the
// column count, short lines pad with unpunched, long lines truncate.
#[test]
fn test_decode_short_lines_pad_with_unpunched() {
    let design = text_codec::decode("xxx\nx").unwrap();
    assert_eq!(design.columns(), 3);
    assert_eq!(design.rows(), 2);
    assert_eq!(design.stitch_at(1, 0), Some(Stitch::Punched));
    assert_eq!(design.stitch_at(1, 1), Some(Stitch::Unpunched));
    assert_eq!(design.stitch_at(1, 2), Some(Stitch::Unpunched));
}

#[test]
fn test_decode_long_lines_truncate() {
    let design = text_codec::decode("xx\nxxxx").unwrap();
    assert_eq!(design.columns(), 2);
    assert_eq!(design.rows(), 2);
    assert_eq!(design.len(), 4);
}

#[test]
fn test_decode_empty_input() {
    assert_eq!(text_codec::decode(""), Err(EditorError::EmptyInput));
    // A leading blank line gives no usable column count either.
    assert_eq!(text_codec::decode("\nxx"), Err(EditorError::EmptyInput));
}

#[test]
fn test_share_round_trip() {
    let design = create_sample_design();
    let token = share_codec::encode_token(&design).unwrap();
    let decoded = share_codec::decode_token(&token).unwrap();
    assert_eq!(decoded, design);
}

#[test]
fn test_share_token_is_url_safe() {
    let token = share_codec::encode_token(&create_sample_design()).unwrap();
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_decode_token_rejects_garbage() {
    for bad in ["", "%%%", "not base64!", "AAAA"] {
        assert!(matches!(
            share_codec::decode_token(bad),
            Err(EditorError::ShareTokenInvalid(_))
        ));
    }
}

#[test]
fn test_share_url_sets_data_parameter() {
    let url = share_codec::share_url("https://example.com/", "abc123");
    assert_eq!(url, "https://example.com/?data=abc123");
    assert_eq!(share_codec::token_from_url(&url), Some("abc123"));
}

#[test]
fn test_share_url_replaces_existing_token() {
    let url = share_codec::share_url("https://example.com/?data=old&lang=en", "new");
    assert_eq!(share_codec::token_from_url(&url), Some("new"));
    assert!(url.contains("lang=en"));
    assert!(!url.contains("old"));
}

#[test]
fn test_token_from_url_absent() {
    assert_eq!(share_codec::token_from_url("https://example.com/"), None);
    assert_eq!(
        share_codec::token_from_url("https://example.com/?data="),
        None
    );
}
