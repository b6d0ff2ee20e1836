pub mod selection_test;
pub mod types_test;
