//! Source adapters for the two inventory exports.
//!
//! Each adapter turns one raw export table into the common intermediate
//! schema {ProductCode, ArticleCode, Name, Category, Quantity}:
//! - [`erp`] - 1C export: header stripping, positional column renaming,
//!   mandatory-column validation
//! - [`wms`] - СОЛВО export: header/footer stripping, positional labels,
//!   duplicate-location aggregation
//!
//! Both adapters normalize every textual cell and coerce the join-key
//! columns to strings before returning records, so the reconciler never
//! sees mixed cell typing.

pub mod erp;
pub mod wms;

#[cfg(test)]
pub mod tests;

pub use erp::adapt_erp_table;
pub use wms::adapt_wms_table;
