pub mod camera;
pub mod draw;
pub mod hud;
pub mod palette;
