pub mod game;
pub mod stats;
pub mod validation;
