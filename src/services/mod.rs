//! Services that orchestrate domain contracts

mod account_pipeline;

pub use account_pipeline::AccountPipeline;
