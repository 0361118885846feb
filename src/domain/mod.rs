// Domain layer: ISSN model, registry entry views and the registry port.

pub mod model;
pub mod ports;
