//! Fixed HTML fragments for the ENT login page header, and the writer that
//! lays them out on disk.
//!
//! Nothing here is parameterized: the page is two constant fragments written
//! back to back into a single file.

pub mod assembler;
pub mod fragments;
pub mod page;

pub use assembler::{AssembleConfig, AssembleError, AssembleReport, PageAssembler};
pub use fragments::{HEAD, TOP_HEADER};
pub use page::Page;
