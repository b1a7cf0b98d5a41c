pub mod charts;
pub mod grid;
pub mod hints;
pub mod popup;
pub mod spinner;
