pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod sort;
pub mod stats;
pub mod toggle;
