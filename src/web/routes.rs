use actix_web::{get, web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use log::debug;
use crate::address::Address;
use crate::error::PingError;
use crate::favicon;
use crate::net::PingResult;
use crate::web::AppState;
use crate::web::error::ApiError;
use crate::web::response::ApiResponse;

/// Register all routes that are answered from the [AppState].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(default_icon)
        .service(get_status)
        .service(get_java_status)
        .service(get_icon);
}

#[get("/")]
async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.landing_page.clone())
}

#[get("/icon.png")]
async fn default_icon(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::png())
        .body(state.default_icon.clone())
}

#[get("/api/{address}")]
async fn get_status(request: HttpRequest, address: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    status_response(&request, &address, &state).await
}

#[get("/api/java/{address}")]
async fn get_java_status(request: HttpRequest, address: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    status_response(&request, &address, &state).await
}

async fn status_response(request: &HttpRequest, address: &str, state: &AppState) -> Result<HttpResponse, ApiError> {
    let result = ping(state, address).await?;

    let icon_url = format!("{}/img/{}", icon_base_url(request, state), address);
    let body = serde_json::to_string(&ApiResponse::new(result, icon_url))
        .map_err(ApiError::Internal)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

#[get("/img/{address}")]
async fn get_icon(address: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let result = ping(&state, &address).await?;
    let png = favicon::transcode(&result.status.favicon)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::png())
        .body(png))
}

/// Ping the server named by a path segment.
///
/// The outbound connection lives inside this future, so it is closed as soon
/// as actix drops the request handler.
async fn ping(state: &AppState, address: &str) -> Result<PingResult, ApiError> {
    let address = Address::from_path(address)?;
    state.client.fetch_status(&address).await
        .map_err(|err: PingError| {
            debug!("Failed to ping {}: {}", address, err);
            ApiError::from(err)
        })
}

fn icon_base_url(request: &HttpRequest, state: &AppState) -> String {
    match &state.icon_base_url {
        Some(base) => base.clone(),
        None => format!("https://{}", request.connection_info().host()),
    }
}
