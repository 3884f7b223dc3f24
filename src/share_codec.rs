//! The URL-shareable design encoding: a JSON record of the full design,
//! deflate-compressed, then URL-safe base64. The token rides in the `data`
//! query parameter of a share link and is opaque to everything but this
//! module's encode/decode pair.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::design::Design;
use crate::error::{EditorError, EditorResult};
use crate::stitch::Stitch;

/// Query parameter carrying the token in a share link.
pub const QUERY_PARAM: &str = "data";

/// The structured record compressed into the token. Stitches are flattened
/// to the text alphabet so the record stays compact and self-describing.
#[derive(Debug, Serialize, Deserialize)]
struct ShareRecord {
    stitches: String,
    columns: usize,
    rows: usize,
}

/// Encode a design into a URL-safe compressed token.
pub fn encode_token(design: &Design) -> EditorResult<String> {
    let record = ShareRecord {
        stitches: design.stitches().iter().map(|s| s.to_char()).collect(),
        columns: design.columns(),
        rows: design.rows(),
    };
    let json = serde_json::to_vec(&record)
        .map_err(|e| EditorError::ShareTokenInvalid(e.to_string()))?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&json)
        .and_then(|_| encoder.finish())
        .map(|compressed| URL_SAFE_NO_PAD.encode(compressed))
        .map_err(|e| EditorError::ShareTokenInvalid(e.to_string()))
}

/// Decode a token back into a design.
///
/// Every failure mode collapses to `ShareTokenInvalid` so startup can fall
/// back to a blank grid without inspecting the cause.
pub fn decode_token(token: &str) -> EditorResult<Design> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| EditorError::ShareTokenInvalid(e.to_string()))?;

    let mut json = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(|e| EditorError::ShareTokenInvalid(e.to_string()))?;

    let record: ShareRecord = serde_json::from_slice(&json)
        .map_err(|e| EditorError::ShareTokenInvalid(e.to_string()))?;

    let stitches: Vec<Stitch> = record.stitches.chars().map(Stitch::from_char).collect();
    Design::from_stitches(stitches, record.columns, record.rows)
        .map_err(|e| EditorError::ShareTokenInvalid(e.to_string()))
}

/// Splice a token into `base` as the `data` query parameter, replacing any
/// existing one in place.
pub fn share_url(base: &str, token: &str) -> String {
    let (path, query) = match base.split_once('?') {
        Some((path, query)) => (path, query),
        None => (base, ""),
    };
    let mut params: Vec<String> = query
        .split('&')
        .filter(|p| !p.is_empty() && p.split('=').next() != Some(QUERY_PARAM))
        .map(|p| p.to_owned())
        .collect();
    params.push(format!("{QUERY_PARAM}={token}"));
    format!("{path}?{}", params.join("&"))
}

/// Extract the `data` query parameter from a share link, if present.
pub fn token_from_url(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == QUERY_PARAM && !value.is_empty()).then_some(value)
    })
}
