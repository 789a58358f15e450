pub mod distance;
pub mod loop_route;
pub mod matrix;
pub mod report;
