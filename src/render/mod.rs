//! Render module - HTML della bacheca
//!
//! - `escape`: escaping dei caratteri speciali HTML e wrapper per maud
//! - `page`: pagina principale e pagina di errore (template maud)

pub mod escape;
pub mod page;

pub use escape::{Escaped, escape_for_display};
pub use page::{render_error_page, render_page};
