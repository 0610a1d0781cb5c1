//! Tree traversals
//!
//! [`traverse_in_order`] is the point of this crate: an in-order walk in
//! O(1) auxiliary space that threads transient parent back-references
//! through the tree instead of keeping a stack. [`in_order_reference`]
//! and [`breadth_first`] are plain walks used as validation oracles.

mod reference;
mod threaded;

pub use reference::{breadth_first, in_order_reference};
pub use threaded::traverse_in_order;
