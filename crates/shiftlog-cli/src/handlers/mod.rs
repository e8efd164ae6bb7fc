pub mod add;
pub mod export;
pub mod guidance;
pub mod list;
pub mod stats;
pub mod values;
