use crate::core::config::GameConfig;
use crate::gameplay::simulation::SimulationState;
use bevy::prelude::*;

/// Ends the session after `window.autoClose` seconds; used for unattended smoke runs.
#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    state: Option<Res<SimulationState>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else { return };
    if !t.tick(time.delta()).just_finished() {
        return;
    }
    match state {
        Some(s) => info!(
            ticks = s.tick_count(),
            bubbles = s.bubbles().len(),
            "AutoClose: timer finished, requesting app exit"
        ),
        None => info!("AutoClose: timer finished, requesting app exit"),
    }
    ev_exit.write(AppExit::Success);
}
