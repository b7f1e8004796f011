//! Axum route handlers for the Render API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use maud::Markup;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::ProfileDocument;
use crate::render::{render_page, LayoutPlan, OutlineSection};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Return only the résumé markup, without the surrounding HTML page.
    #[serde(default)]
    pub fragment: bool,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub template: &'static str,
    pub sections: Vec<OutlineSection>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render
///
/// Renders a ProfileDocument to HTML with the configured template.
/// `?fragment=true` skips the page wrapper for embedding in a host page.
pub async fn handle_render(
    State(state): State<AppState>,
    query: Result<Query<RenderQuery>, QueryRejection>,
    payload: Result<Json<ProfileDocument>, JsonRejection>,
) -> Result<Markup, AppError> {
    let Query(query) = query?;
    let Json(doc) = payload?;
    let template = state.template.as_ref();

    let markup = if query.fragment {
        template.render(&doc)
    } else {
        render_page(template, &doc)
    };

    info!(
        "Rendered resume with '{}' template (fragment={}, {} bytes)",
        template.name(),
        query.fragment,
        markup.0.len()
    );
    Ok(markup)
}

/// POST /api/v1/render/outline
///
/// Lists the sections a render would show, in display order, without producing markup.
/// Lets editors and export steps preview the effect of visibility flags.
pub async fn handle_outline(
    State(state): State<AppState>,
    payload: Result<Json<ProfileDocument>, JsonRejection>,
) -> Result<Json<OutlineResponse>, AppError> {
    let Json(doc) = payload?;
    let sections = LayoutPlan::for_document(&doc).outline();

    Ok(Json(OutlineResponse {
        template: state.template.name(),
        sections,
    }))
}
