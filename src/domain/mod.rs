// Domain layer: part models and the ports the catalogue depends on.

pub mod model;
pub mod ports;
