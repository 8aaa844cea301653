pub mod samples;
pub mod scene;
