pub mod logging;
pub mod progress_bar_builder;
