// Domain layer: records, run state and the seams (ports) the flow is built on.

pub mod model;
pub mod ports;
pub mod run;
