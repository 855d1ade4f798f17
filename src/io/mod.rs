//! I/O modules for exporting bundled files.

pub mod resume_export;

pub use resume_export::{file_url, save_resume};
