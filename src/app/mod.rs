pub mod audio;
pub mod game;
