// Domain layer: comic models and ports (interfaces). No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
