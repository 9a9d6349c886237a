//! Response decoding for the search endpoint.

use crate::api::models::SearchResponseRecord;
use crate::domain::error::{PhotoseekError, Result};
use crate::domain::SearchPage;

/// Decodes a host web-request result into a [`SearchPage`].
///
/// Any non-2xx status is a failure, as is a body that is not a valid search
/// response. Callers collapse every error into a single fetch failure.
///
/// # Errors
///
/// - [`PhotoseekError::Http`] for non-success statuses
/// - [`PhotoseekError::Decode`] for malformed bodies
///
/// # Examples
///
/// ```
/// use photoseek::api::decode_search_page;
///
/// let body = br#"{"total": 0, "total_pages": 0, "results": []}"#;
/// let page = decode_search_page(200, body)?;
/// assert_eq!(page.total, 0);
///
/// assert!(decode_search_page(401, b"").is_err());
/// # Ok::<(), photoseek::PhotoseekError>(())
/// ```
pub fn decode_search_page(status: u16, body: &[u8]) -> Result<SearchPage> {
    if !(200..300).contains(&status) {
        tracing::debug!(status, body_len = body.len(), "search request rejected");
        return Err(PhotoseekError::Http { status });
    }

    let record: SearchResponseRecord = serde_json::from_slice(body)?;

    tracing::debug!(
        total = record.total,
        total_pages = record.total_pages,
        results = record.results.len(),
        "search response decoded"
    );

    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "total": 133,
        "total_pages": 12,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "created_at": "2014-11-18T14:35:36-05:00",
                "likes": 286,
                "description": "A man drinking a coffee.",
                "alt_description": "man holding cup",
                "user": { "id": "Ul0QVz12Goo", "username": "ugmonk", "name": "Jeff Sheldon" },
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f",
                    "regular": "https://images.unsplash.com/regular",
                    "small": "https://images.unsplash.com/small",
                    "thumb": "https://images.unsplash.com/thumb"
                }
            }
        ]
    }"#;

    #[test]
    fn decodes_documented_response() {
        let page = decode_search_page(200, BODY.as_bytes()).unwrap();
        assert_eq!(page.total, 133);
        assert_eq!(page.total_pages, 12);
        assert_eq!(page.results.len(), 1);

        let image = &page.results[0];
        assert_eq!(image.id, "eOLpJytrbsQ");
        assert_eq!(image.author_name, "Jeff Sheldon");
        assert_eq!(image.author_username, "ugmonk");
        assert_eq!(image.likes, 286);
        assert_eq!(image.alt_text, "man holding cup");
        assert_eq!(image.preview_url, "https://images.unsplash.com/small");
    }

    #[test]
    fn non_success_status_is_http_error() {
        let err = decode_search_page(500, BODY.as_bytes()).unwrap_err();
        assert!(matches!(err, PhotoseekError::Http { status: 500 }));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = decode_search_page(200, b"<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, PhotoseekError::Decode(_)));
    }
}
