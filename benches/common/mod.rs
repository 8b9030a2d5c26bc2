pub mod pipeline;
pub mod samples;
