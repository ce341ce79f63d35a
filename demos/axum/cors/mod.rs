use std::sync::Arc;
use std::time::Duration;

use libcors::{Cors, CorsOptions, Origins};

pub mod middleware;

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

/// Stands in for an allow-list kept in a database or another service.
async fn lookup_origin(origin: String) -> Result<bool, std::io::Error> {
    tokio::time::sleep(Duration::from_millis(2)).await;
    Ok(origin == "http://app.example.com" || origin.ends_with(".internal.example.com"))
}

pub fn build_state() -> AppState {
    let options = CorsOptions {
        origins: Origins::async_predicate(lookup_origin),
        methods: vec!["GET".into(), "POST".into(), "PUT".into()],
        request_headers: vec![
            "Content-Type".into(),
            "X-Requested-With".into(),
            "X-Example-Trace".into(),
        ],
        response_headers: vec!["X-Example-Trace".into()],
        supports_credentials: true,
        max_age: Some(600),
        ..CorsOptions::default()
    };

    AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Axum CORS demo!",
    }
}
