// Résumé rendering: section gating, display helpers, templates, HTTP handlers.
// Everything below handlers is synchronous and side-effect free.

pub mod dates;
pub mod handlers;
pub mod plan;
pub mod template;
pub mod text;

pub use plan::{LayoutPlan, OutlineSection};
pub use template::{render_page, ResumeTemplate, SidebarTemplate};
