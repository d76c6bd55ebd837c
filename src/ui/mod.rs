pub mod details;
pub mod panels;
