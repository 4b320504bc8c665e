//! Text generation for Sparky.

pub mod generator;
pub mod persona;

pub use generator::ContentGenerator;
pub use persona::Persona;
