pub mod analysis;
pub mod matrix;
pub mod methods;
pub mod normalize;
pub mod ranking;
pub mod weights;
