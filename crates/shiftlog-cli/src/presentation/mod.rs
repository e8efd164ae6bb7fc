pub mod chart;
pub mod console;
