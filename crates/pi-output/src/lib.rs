pub mod common;
pub mod csharp;
pub mod css;
pub mod html;
pub mod json;

pub use common::{LegacyProjection, ProjectedLayer, pascal_case, project_legacy};
pub use csharp::{CsharpOptions, render_csharp, write_csharp};
pub use css::{render_css, write_css};
pub use html::{render_html, write_html};
pub use json::write_merged_json;
