//! HTTP handlers and the response helpers they share.

use actix_web::error::{InternalError, QueryPayloadError, UrlencodedError};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use tera::{Context, Tera};

pub mod backups;
pub mod executions;
pub mod main;

/// HTMX event the layout listens to for error toasts.
pub const TOAST_ERROR_EVENT: &str = "ctm_toast_error";

/// Renders `template` as an HTML response, answering 500 on failure.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Shows `message` as an error toast without swapping any content.
pub fn toast_error(message: &str) -> HttpResponse {
    let trigger = json!({ "ctm_toast_error": message });
    HttpResponse::Ok()
        .insert_header(("HX-Reswap", "none"))
        .insert_header(("HX-Trigger", trigger.to_string()))
        .finish()
}

/// Makes HTMX perform a full client side redirect.
pub fn hx_redirect(location: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("HX-Redirect", location))
        .finish()
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Reports undecodable form bodies as toasts.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let response = toast_error(&err.to_string());
    InternalError::from_response(err, response).into()
}

/// Reports undecodable query strings as toasts.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = toast_error(&err.to_string());
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_value<'a>(response: &'a HttpResponse, name: &str) -> &'a str {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn toast_error_sets_htmx_headers() {
        let response = toast_error("Invalid \"backup\" ID");

        assert_eq!(response.status(), 200);
        assert_eq!(header_value(&response, "HX-Reswap"), "none");
        let trigger: serde_json::Value =
            serde_json::from_str(header_value(&response, "HX-Trigger")).unwrap();
        assert_eq!(trigger[TOAST_ERROR_EVENT], "Invalid \"backup\" ID");
    }

    #[test]
    fn hx_redirect_sets_location() {
        let response = hx_redirect("/dashboard/backups");

        assert_eq!(response.status(), 200);
        assert_eq!(header_value(&response, "HX-Redirect"), "/dashboard/backups");
    }

    #[test]
    fn render_template_reports_missing_templates() {
        let tera = Tera::default();
        let response = render_template(&tera, "missing.html", &Context::new());
        assert_eq!(response.status(), 500);
    }
}
