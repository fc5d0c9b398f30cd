//! Static teaching datasets: everything the pages display is defined here,
//! separate from the widgets that render it.

pub mod binding;
pub mod cardinality;
pub mod terminology;
