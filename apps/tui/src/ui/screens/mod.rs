pub mod browse;
pub mod help;
pub mod main;
pub mod picker;
pub mod report;
