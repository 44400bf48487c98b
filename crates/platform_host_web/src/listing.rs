//! Listing host-service adapter backed by the browser `fetch` API.

use platform_host::{ListingError, ListingFuture, ListingResponse, ListingService};

use crate::bridge::{self, HttpTextResponse};

#[derive(Debug, Clone, Copy, Default)]
/// Browser listing adapter issuing a single unauthenticated `GET`.
pub struct WebListingService;

impl ListingService for WebListingService {
    fn fetch_listing<'a>(
        &'a self,
        url: &'a str,
    ) -> ListingFuture<'a, Result<ListingResponse, ListingError>> {
        Box::pin(async move {
            let response = bridge::fetch_text(url)
                .await
                .map_err(ListingError::Transport)?;
            decode_listing_response(response)
        })
    }
}

fn decode_listing_response(response: HttpTextResponse) -> Result<ListingResponse, ListingError> {
    if !response.ok {
        return Err(ListingError::HttpStatus(response.status));
    }
    ListingResponse::from_json(&response.body)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn non_success_status_maps_to_http_error() {
        let err = decode_listing_response(HttpTextResponse {
            status: 404,
            ok: false,
            body: String::new(),
        })
        .expect_err("http error");
        assert_eq!(err, ListingError::HttpStatus(404));
    }

    #[test]
    fn success_status_decodes_body() {
        let response = decode_listing_response(HttpTextResponse {
            status: 200,
            ok: true,
            body: r#"{"success":true,"files":["a.txt"]}"#.to_string(),
        })
        .expect("decode");
        assert!(response.success);
        assert_eq!(response.files.map(|files| files.len()), Some(1));
    }

    #[test]
    fn native_builds_report_transport_failure() {
        let err = block_on(WebListingService.fetch_listing("http://localhost/files"))
            .expect_err("native transport");
        assert!(matches!(err, ListingError::Transport(_)));
    }
}
