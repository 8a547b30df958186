//! HTTP route handlers for the medisense server.

pub mod predict;
pub mod skin;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}


#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    use super::testing::{app, send};

    #[tokio::test]
    async fn test_health() {
        let req = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
