// Domain layer: the destination record and the repository port. No framework types here.

pub mod model;
pub mod ports;
