//! Reusable HTML components for page generation
//!
//! Maud component functions shared by page generators: the document wrapper
//! with the embedded stylesheet, and the page footer.

pub mod footer;
pub mod layout;
