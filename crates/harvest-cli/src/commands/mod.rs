pub mod catalog;
pub mod predict;
