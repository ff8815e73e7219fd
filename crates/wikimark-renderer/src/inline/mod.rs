//! Inline text transformations applied during dispatch.

pub mod highlight;
pub mod links;
