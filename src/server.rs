//! HTTP shell over the class registry.
//!
//! Every endpoint answers 200 with a JSON body carrying a `success` flag;
//! failures are reported in the payload as `{success: false, error}` rather
//! than through status codes.

use crate::registry::ClassRegistry;
use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The registry of class rosters.
    pub registry: ClassRegistry,
}

/// Builds the application router over the given registry.
#[instrument(skip(registry))]
pub fn router(registry: ClassRegistry) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/create_class", post(create_class))
        .route("/delete_class", post(delete_class))
        .route("/edit_class", post(edit_class))
        .route("/get_names", get(get_names))
        .route("/get_counts", get(get_counts))
        .route("/add_name", post(add_name))
        .route("/delete_name", post(delete_name))
        .route("/select_name", post(select_name))
        .route("/reset", post(reset))
        .with_state(AppState { registry })
}

// ─────────────────────────────────────────────────────────────
//  Request forms
// ─────────────────────────────────────────────────────────────

/// Form naming a single class.
#[derive(Debug, Deserialize)]
pub struct ClassForm {
    /// Target class name.
    #[serde(default)]
    pub class_name: String,
}

/// Form for renaming a class.
#[derive(Debug, Deserialize)]
pub struct RenameForm {
    /// Current class name.
    #[serde(default)]
    pub old_name: String,
    /// New class name.
    #[serde(default)]
    pub new_name: String,
}

/// Form naming a class and a roster name.
#[derive(Debug, Deserialize)]
pub struct NameForm {
    /// Target class name.
    #[serde(default)]
    pub class_name: String,
    /// Roster name to operate on.
    #[serde(default)]
    pub name: String,
}

// ─────────────────────────────────────────────────────────────
//  Response envelopes
// ─────────────────────────────────────────────────────────────

/// Envelope for class-list mutations.
#[derive(Debug, Serialize)]
pub struct ClassesResponse {
    /// Always true on this variant.
    pub success: bool,
    /// All class names after the mutation.
    pub class_names: Vec<String>,
}

/// Envelope for roster mutations.
#[derive(Debug, Serialize)]
pub struct NamesResponse {
    /// Always true on this variant.
    pub success: bool,
    /// The class roster after the mutation.
    pub names: Vec<String>,
}

/// Envelope for a selection draw.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    /// Always true on this variant.
    pub success: bool,
    /// The drawn name.
    pub selected_name: String,
    /// Selection counts after the draw.
    pub counts: BTreeMap<String, u32>,
}

/// Envelope for failed operations.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    /// Always false on this variant.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

fn failure(error: impl ToString) -> Response {
    Json(FailureResponse {
        success: false,
        error: error.to_string(),
    })
    .into_response()
}

// ─────────────────────────────────────────────────────────────
//  Handlers
// ─────────────────────────────────────────────────────────────

/// `GET /`: HTML overview of every class, its roster, and counts.
#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Html<String> {
    let classes = state.registry.snapshot();
    debug!(count = classes.len(), "Rendering index page");

    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Cold Call</title></head>\n<body>\n<h1>Cold Call</h1>\n",
    );
    if classes.is_empty() {
        page.push_str("<p>No classes yet.</p>\n");
    }
    for (class_name, roster) in &classes {
        page.push_str(&format!("<h2>{}</h2>\n<ul>\n", class_name));
        for name in roster.names() {
            let count = roster.counts().get(name).copied().unwrap_or(0);
            page.push_str(&format!("<li>{}: {} times</li>\n", name, count));
        }
        page.push_str("</ul>\n");
    }
    page.push_str("</body>\n</html>\n");
    Html(page)
}

/// `POST /create_class`: creates an empty class.
#[instrument(skip(state), fields(class = %form.class_name))]
async fn create_class(State(state): State<AppState>, Form(form): Form<ClassForm>) -> Response {
    match state.registry.create_class(&form.class_name) {
        Ok(()) => Json(ClassesResponse {
            success: true,
            class_names: state.registry.list_classes(),
        })
        .into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /delete_class`: deletes a class and its roster.
#[instrument(skip(state), fields(class = %form.class_name))]
async fn delete_class(State(state): State<AppState>, Form(form): Form<ClassForm>) -> Response {
    match state.registry.delete_class(&form.class_name) {
        Ok(()) => Json(ClassesResponse {
            success: true,
            class_names: state.registry.list_classes(),
        })
        .into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /edit_class`: renames a class, keeping its roster intact.
#[instrument(skip(state), fields(from = %form.old_name, to = %form.new_name))]
async fn edit_class(State(state): State<AppState>, Form(form): Form<RenameForm>) -> Response {
    match state.registry.rename_class(&form.old_name, &form.new_name) {
        Ok(()) => Json(ClassesResponse {
            success: true,
            class_names: state.registry.list_classes(),
        })
        .into_response(),
        Err(e) => failure(e),
    }
}

/// `GET /get_names?class_name=`: bare list of names; empty for unknown class.
#[instrument(skip(state), fields(class = %query.class_name))]
async fn get_names(
    State(state): State<AppState>,
    Query(query): Query<ClassForm>,
) -> Json<Vec<String>> {
    let names = state
        .registry
        .with_roster(&query.class_name, |roster| roster.names().to_vec())
        .unwrap_or_default();
    Json(names)
}

/// `GET /get_counts?class_name=`: bare name-to-count map; empty for unknown class.
#[instrument(skip(state), fields(class = %query.class_name))]
async fn get_counts(
    State(state): State<AppState>,
    Query(query): Query<ClassForm>,
) -> Json<BTreeMap<String, u32>> {
    let counts = state
        .registry
        .with_roster(&query.class_name, |roster| roster.counts().clone())
        .unwrap_or_default();
    Json(counts)
}

/// `POST /add_name`: adds a name to a class roster.
///
/// Empty or duplicate names are silently ignored and still report success,
/// mirroring the silent no-op semantics of the roster itself.
#[instrument(skip(state), fields(class = %form.class_name, name = %form.name))]
async fn add_name(State(state): State<AppState>, Form(form): Form<NameForm>) -> Response {
    match state.registry.with_roster(&form.class_name, |roster| {
        roster.add_name(&form.name);
        roster.names().to_vec()
    }) {
        Ok(names) => Json(NamesResponse { success: true, names }).into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /delete_name`: removes a name from a class roster.
///
/// Absent names are silently ignored.
#[instrument(skip(state), fields(class = %form.class_name, name = %form.name))]
async fn delete_name(State(state): State<AppState>, Form(form): Form<NameForm>) -> Response {
    match state.registry.with_roster(&form.class_name, |roster| {
        roster.delete_name(&form.name);
        roster.names().to_vec()
    }) {
        Ok(names) => Json(NamesResponse { success: true, names }).into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /select_name`: draws one name from a class roster.
#[instrument(skip(state), fields(class = %form.class_name))]
async fn select_name(State(state): State<AppState>, Form(form): Form<ClassForm>) -> Response {
    let drawn = state.registry.with_roster(&form.class_name, |roster| {
        roster
            .select_name()
            .map(|name| (name, roster.counts().clone()))
    });
    match drawn {
        Ok(Ok((selected_name, counts))) => {
            info!(class = %form.class_name, name = %selected_name, "Selection served");
            Json(SelectionResponse {
                success: true,
                selected_name,
                counts,
            })
            .into_response()
        }
        Ok(Err(e)) => failure(e),
        Err(e) => failure(e),
    }
}

/// `POST /reset`: wipes a class roster entirely.
#[instrument(skip(state), fields(class = %form.class_name))]
async fn reset(State(state): State<AppState>, Form(form): Form<ClassForm>) -> Response {
    match state
        .registry
        .with_roster(&form.class_name, |roster| roster.reset())
    {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => failure(e),
    }
}
