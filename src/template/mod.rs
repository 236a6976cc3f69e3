//! Template discovery and installation
//!
//! - `catalog`: finds templates under a templates root
//! - `init`: a single template and its `install` operation
//! - `classify` / `placeholder`: how entries are treated and names expanded
//! - `operation` / `processor`: the recursive copy/expand walk

pub mod catalog;
pub mod classify;
pub mod init;
pub mod metadata;
pub mod operation;
pub mod placeholder;
pub mod processor;

pub use catalog::TemplateCatalog;
pub use init::InitTemplate;
