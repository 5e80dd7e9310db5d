mod trial;

pub use trial::*;
