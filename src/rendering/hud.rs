//! Timed on-screen messages stacked at the top centre of the window.
//!
//! Each line keeps the vertical slot it was given when it arrived (`count * spacing`), so a
//! newer line never jumps when an older one expires. Lines fade out during their final
//! `messages.fade_ms`.

use bevy::prelude::*;

use crate::core::config::{GameConfig, MessagesConfig};
use crate::core::system::system_order::PresentSet;
use crate::gameplay::sim_plugin::SimEffectEvent;
use crate::gameplay::simulation::{Announcement, SimEffect};
use crate::rendering::palette::palette::fade_alpha;

pub const WOOSH_DURATION_MS: u64 = 1000;
pub const NOTICE_DURATION_MS: u64 = 3000;

/// Request to show a line of text; `duration_ms: None` uses `messages.duration_ms`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct HudMessage {
    pub text: String,
    pub duration_ms: Option<u64>,
}

impl HudMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration_ms: None,
        }
    }
    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}

#[derive(Debug, Clone)]
pub struct HudLine {
    pub text: String,
    pub created_ms: u64,
    pub duration_ms: u64,
    pub y_offset: f32,
    entity: Option<Entity>,
}

impl HudLine {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_ms) > self.duration_ms
    }

    pub fn alpha(&self, now_ms: u64, fade_ms: u64) -> u8 {
        let elapsed = now_ms.saturating_sub(self.created_ms);
        let left = self.duration_ms.saturating_sub(elapsed);
        if fade_ms == 0 || left >= fade_ms {
            return 255;
        }
        fade_alpha(left as i32, fade_ms as i32)
    }

    /// Text as rendered: the bundled UI font has no emoji glyphs.
    pub fn plain_text(&self) -> String {
        plain_text(&self.text)
    }
}

pub fn plain_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '🌬' | '✨' | '🌟' | '🎵' | '👋' => '*',
            '❌' => 'X',
            '🌀' => '@',
            '🌊' => '~',
            other => other,
        })
        .collect()
}

#[derive(Resource, Debug, Default)]
pub struct MessageBoard {
    lines: Vec<HudLine>,
}

impl MessageBoard {
    pub fn lines(&self) -> &[HudLine] {
        &self.lines
    }

    pub fn push(&mut self, msg: HudMessage, now_ms: u64, cfg: &MessagesConfig) {
        let y_offset = self.lines.len() as f32 * cfg.line_spacing;
        self.lines.push(HudLine {
            text: msg.text,
            created_ms: now_ms,
            duration_ms: msg.duration_ms.unwrap_or(cfg.duration_ms),
            y_offset,
            entity: None,
        });
    }

    /// Drop expired lines, returning the UI entities that displayed them.
    pub fn expire(&mut self, now_ms: u64) -> Vec<Entity> {
        let mut gone = Vec::new();
        self.lines.retain(|line| {
            if line.is_expired(now_ms) {
                gone.extend(line.entity);
                false
            } else {
                true
            }
        });
        gone
    }
}

/// HUD text for a simulation announcement, if it has one.
pub fn announcement_message(a: &Announcement) -> Option<HudMessage> {
    match a {
        Announcement::AllBurst => Some(HudMessage::new("✨ All bubbles burst! ✨")),
        Announcement::Woosh => {
            Some(HudMessage::new("🌬 Woosh!").with_duration(WOOSH_DURATION_MS))
        }
        Announcement::StreamSpawned { .. } => None,
    }
}

#[derive(Component)]
pub struct HudText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HudMessage>()
            .add_event::<SimEffectEvent>()
            .init_resource::<MessageBoard>()
            .add_systems(Startup, announce_controls)
            .add_systems(
                Update,
                (collect_hud_messages, sync_hud_text).chain().in_set(PresentSet),
            );
    }
}

fn now_ms(time: &Time) -> u64 {
    time.elapsed().as_millis() as u64
}

fn announce_controls(cfg: Res<GameConfig>, mut hud: EventWriter<HudMessage>) {
    hud.write(HudMessage::new("✨ Bubble Blast ready! ✨"));
    if cfg.blow.enabled {
        hud.write(HudMessage::new("🌬 Press B to blow bubbles!").with_duration(NOTICE_DURATION_MS));
    }
    if cfg.hand.enabled {
        hud.write(
            HudMessage::new("👋 Move the pointer to pop bubbles!")
                .with_duration(NOTICE_DURATION_MS),
        );
    }
    hud.write(
        HudMessage::new("Space: burst all  F/S/W/Tab: pattern  Esc: quit")
            .with_duration(NOTICE_DURATION_MS),
    );
}

fn collect_hud_messages(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut board: ResMut<MessageBoard>,
    mut hud: EventReader<HudMessage>,
    mut effects: EventReader<SimEffectEvent>,
) {
    let now = now_ms(&time);
    for msg in hud.read() {
        board.push(msg.clone(), now, &cfg.messages);
    }
    for SimEffectEvent(effect) in effects.read() {
        if let SimEffect::Announce(a) = effect {
            if let Some(msg) = announcement_message(a) {
                board.push(msg, now, &cfg.messages);
            }
        }
    }
}

fn sync_hud_text(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut board: ResMut<MessageBoard>,
    mut q_color: Query<&mut TextColor, With<HudText>>,
) {
    let now = now_ms(&time);
    for entity in board.expire(now) {
        commands.entity(entity).despawn();
    }
    let messages = &cfg.messages;
    for line in board.lines.iter_mut() {
        let color = Color::srgba_u8(255, 255, 255, line.alpha(now, messages.fade_ms));
        match line.entity {
            Some(entity) => {
                if let Ok(mut tc) = q_color.get_mut(entity) {
                    tc.0 = color;
                }
            }
            None => {
                let id = commands
                    .spawn((
                        Text::new(line.plain_text()),
                        TextFont {
                            font_size: messages.font_size,
                            ..Default::default()
                        },
                        TextColor(color),
                        TextLayout::new_with_justify(JustifyText::Center),
                        Node {
                            position_type: PositionType::Absolute,
                            top: Val::Px(messages.top_margin + line.y_offset),
                            width: Val::Percent(100.0),
                            justify_content: JustifyContent::Center,
                            ..Default::default()
                        },
                        HudText,
                    ))
                    .id();
                line.entity = Some(id);
            }
        }
    }
}
