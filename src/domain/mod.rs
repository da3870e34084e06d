// Domain layer: ticket model and the ports for the external payment and reservation services.

pub mod model;
pub mod ports;
