//! Key material API: the container and its construction paths

mod key_material;
pub mod key_generator;

pub use key_material::KeyMaterial;
pub use key_generator::derive::{KdfParams, Pbkdf2Params, ScryptParams};
