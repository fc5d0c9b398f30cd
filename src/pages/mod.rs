pub mod binding;
pub mod cardinality;
pub mod flow;
