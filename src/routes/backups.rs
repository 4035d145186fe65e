use actix_web::{HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::dto::backups::BackupFormData;
use crate::forms::backups::CreateBackupForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{hx_redirect, render_template, toast_error};
use crate::services::{ServiceError, backups as backups_service};

fn render_form(tera: &Tera, data: &BackupFormData) -> HttpResponse {
    let mut context = Context::new();
    context.insert("databases", &data.databases);
    context.insert("destinations", &data.destinations);
    context.insert("time_zones", &data.time_zones);
    context.insert("values", &data.values);
    render_template(tera, "backups/form.html", &context)
}

#[get("/dashboard/backups")]
pub async fn show_backups(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match backups_service::list_backups(repo.get_ref()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("current_page", "backups");
            context.insert("backups", &data.backups);
            render_template(&tera, "backups/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list backups: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/dashboard/backups/create-form")]
pub async fn create_backup_form(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match backups_service::load_create_form(repo.get_ref(), &server_config.default_time_zone) {
        Ok(data) => render_form(&tera, &data),
        Err(err) => toast_error(&err.to_string()),
    }
}

#[get("/dashboard/backups/duplicate-form/{backup_id}")]
pub async fn duplicate_backup_form(
    backup_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match backups_service::load_duplicate_form(repo.get_ref(), &backup_id) {
        Ok(data) => render_form(&tera, &data),
        Err(ServiceError::TypeConstraint(_)) => toast_error("Invalid backup ID"),
        Err(ServiceError::NotFound) => {
            toast_error("Failed to fetch original backup: backup not found")
        }
        Err(err) => toast_error(&format!("Failed to fetch original backup: {err}")),
    }
}

#[post("/dashboard/backups")]
pub async fn create_backup(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CreateBackupForm>,
) -> impl Responder {
    match backups_service::create_backup(repo.get_ref(), form) {
        Ok(_) => hx_redirect("/dashboard/backups"),
        Err(ServiceError::Form(message)) => toast_error(&message),
        Err(err) => toast_error(&err.to_string()),
    }
}
