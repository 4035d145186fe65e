use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::forms::executions::ListExecutionsQuery;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{render_template, toast_error};
use crate::services::{ServiceError, executions as executions_service};

#[get("/dashboard/executions")]
pub async fn show_executions(
    query: web::Query<ListExecutionsQuery>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match executions_service::load_executions_page(&query) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("current_page", "executions");
            context.insert("list_url", &data.list_url);
            render_template(&tera, "executions/index.html", &context)
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to load executions page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/dashboard/executions/list")]
pub async fn list_executions(
    query: web::Query<ListExecutionsQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match executions_service::list_executions(repo.get_ref(), query.into_inner(), &server_config)
    {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("executions", &data.executions);
            render_template(&tera, "executions/list.html", &context)
        }
        Err(err) => toast_error(&err.to_string()),
    }
}
