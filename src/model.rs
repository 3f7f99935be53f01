use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One unit of tracked work plotted on the hill. Supplied fresh by the
/// caller on every recomputation; `key` uniqueness is the caller's
/// responsibility and placement is undefined when it is violated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub key: String,
    /// Position along the hill in [0, 100]. Out-of-range values are not
    /// clamped; the curve mapper extrapolates.
    pub progress: f32,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MarkerDocument {
    Bare(Vec<Marker>),
    Wrapped { markers: Vec<Marker> },
}

/// Parse a marker set from JSON. Accepts either a bare array or the
/// `{"markers": [...]}` shape that snapshot exports use. Input order is
/// preserved; it breaks ties in the placement pass.
pub fn parse_markers(input: &str) -> Result<Vec<Marker>> {
    let doc: MarkerDocument = serde_json::from_str(input)?;
    Ok(match doc {
        MarkerDocument::Bare(markers) => markers,
        MarkerDocument::Wrapped { markers } => markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let markers =
            parse_markers(r#"[{"key":"a","progress":25,"text":"Design"}]"#).expect("parse");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].key, "a");
        assert_eq!(markers[0].progress, 25.0);
    }

    #[test]
    fn parses_wrapped_document() {
        let markers = parse_markers(
            r#"{"markers":[{"key":"a","progress":10,"text":"x"},{"key":"b","progress":90,"text":"y"}]}"#,
        )
        .expect("parse");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].key, "b");
    }

    #[test]
    fn preserves_input_order() {
        let markers = parse_markers(
            r#"[{"key":"z","progress":50,"text":""},{"key":"a","progress":50,"text":""}]"#,
        )
        .expect("parse");
        assert_eq!(markers[0].key, "z");
        assert_eq!(markers[1].key, "a");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_markers("not json").is_err());
    }
}
