pub mod details;
pub mod explore;
pub mod help;
pub mod predict;
