//! Widgets for the lookup window

pub mod name_input;
pub mod results_view;
pub mod theme;
