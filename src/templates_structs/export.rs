use askama::Template;

use crate::models::outline::Outline;

/// Standalone print page for the outline. Opens the print dialog on load.
#[derive(Template)]
#[template(path = "export/outline_print.html")]
pub struct OutlinePrintTemplate {
    pub outline: Outline,
    pub generated: String,
}
