pub mod dashboard;
pub mod export;
pub mod list;
pub mod mutate;
pub mod report;
pub mod show;
pub mod stats;
