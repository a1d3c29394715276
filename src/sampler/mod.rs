mod sampler;

pub use sampler::*;
