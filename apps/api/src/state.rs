use std::sync::Arc;

use crate::config::Config;
use crate::render::ResumeTemplate;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable résumé layout. Default: SidebarTemplate.
    pub template: Arc<dyn ResumeTemplate>,
}
