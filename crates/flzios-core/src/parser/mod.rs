//! HTML parsers for the flzios site
//!
//! Contains modules for parsing different page types.

pub mod detail;
pub mod listing;

pub use detail::extract_details;
pub use listing::extract_listing;
