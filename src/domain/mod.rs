// Domain layer: plain models and ports (interfaces). Nothing here touches
// the network or the entropy source directly.

pub mod model;
pub mod ports;
