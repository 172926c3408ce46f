// Domain layer: match models, ports (interfaces) and the pure league services.
// Nothing in here performs I/O.

pub mod model;
pub mod ports;

pub mod services;
