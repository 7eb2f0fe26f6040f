// Per-tick resolution systems run by the world step, in a fixed order.

pub mod bounds;
pub mod collision;
