use bevy::prelude::*;

use crate::rendering::palette::palette::background_row;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        // Clear to the top colour of the gradient so gaps never flash black.
        app.insert_resource(ClearColor(background_row(0.0).to_color()))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn(Camera2d);
}
