pub(crate) mod combiner;
pub(crate) mod convolver;
pub mod norm;
pub(crate) mod normalizer;
pub mod polynomial;
pub mod promotion;
pub mod traits;
pub mod variable;
