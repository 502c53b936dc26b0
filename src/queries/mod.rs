pub mod contact_queries;
pub mod stats_queries;

pub use stats_queries::ContactStats;
