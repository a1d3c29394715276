mod arena;

pub use arena::*;
