//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`,
//! and runs the worker threads that serve requests.

use std::io::{Cursor, Read as _};
use std::sync::Arc;
use std::thread;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiError, ErrorResponse};
use crate::config::ServerConfig;
use crate::core::ports::ReceiptStore;

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind `config.address()` and serve requests until the listener closes
///
/// Spawns `config.workers` threads that pull requests off one shared
/// listener and share one store.
pub fn serve(config: &ServerConfig, store: &Arc<dyn ReceiptStore>) -> anyhow::Result<()> {
    let addr = config.address();
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("Receipt points service listening on {addr} with {} worker(s)", config.workers);

    run_workers(&Arc::new(server), store, config.workers)
}

/// Serve requests from `server` on `workers` threads, returning when all exit
fn run_workers(
    server: &Arc<Server>,
    store: &Arc<dyn ReceiptStore>,
    workers: usize,
) -> anyhow::Result<()> {
    let handles: Vec<_> = (0..workers)
        .map(|n| {
            let server = Arc::clone(server);
            let store = Arc::clone(store);
            thread::Builder::new()
                .name(format!("http-worker-{n}"))
                .spawn(move || {
                    for mut request in server.incoming_requests() {
                        let response = handle_api_request(&mut request, store.as_ref());
                        log::debug!(
                            "{} {} -> {}",
                            request.method(),
                            request.url(),
                            response.status_code().0
                        );
                        if let Err(e) = request.respond(response) {
                            log::warn!("Failed to send response: {e}");
                        }
                    }
                })
        })
        .collect::<Result<_, _>>()?;

    for handle in handles {
        if handle.join().is_err() {
            log::warn!("HTTP worker panicked");
        }
    }
    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request(
    request: &mut Request,
    store: &dyn ReceiptStore,
) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();

    // Query strings carry nothing the routes use
    let path = url.split_once('?').map_or(url.as_str(), |(path, _)| path);

    match (&method, path) {
        (&Method::Get, "/status") => success_response(&api::get_status()),

        // POST /receipts/process - submit a receipt
        (&Method::Post, "/receipts/process") => {
            match read_json_body::<serde_json::Value>(request) {
                Ok(input) => handle_result(api::process_receipt(store, input)),
                Err(e) => error_response(&e),
            }
        },

        // GET /receipts/{id}/points
        _ if method == Method::Get && path.starts_with("/receipts/") && path.ends_with("/points") => {
            let id = path
                .strip_prefix("/receipts/")
                .and_then(|s| s.strip_suffix("/points"))
                .unwrap_or("");
            handle_result(api::get_points(store, id))
        },

        // GET /receipts/{id}/breakdown
        _ if method == Method::Get
            && path.starts_with("/receipts/")
            && path.ends_with("/breakdown") =>
        {
            let id = path
                .strip_prefix("/receipts/")
                .and_then(|s| s.strip_suffix("/breakdown"))
                .unwrap_or("");
            handle_result(api::get_breakdown(store, id))
        },

        // 404 for unknown routes
        _ => not_found_response(&format!("Endpoint not found: {method} {path}")),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => success_response(&data),
        Err(e) => error_response(&e),
    }
}

/// Create a successful JSON response
fn success_response<T: Serialize>(data: &T) -> Response<Cursor<Vec<u8>>> {
    json_response(data, 200)
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(&ErrorResponse::from(error), error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    error_response(&ApiError::not_found(message))
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|e| {
        log::error!("Failed to serialize response: {e}");
        String::from("{}")
    });
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
