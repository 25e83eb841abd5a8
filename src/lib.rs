pub mod config;
pub mod dataset;
pub mod output;
pub mod reference;
pub mod scoring;
