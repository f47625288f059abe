pub mod config;

pub use config::{
    AudioConfig, BlowConfig, ConfigDiagnostics, ConfigRange, DrawConfig, GameConfig, HandConfig, MessagesConfig,
    PatternConfig, SimulationConfig, WindowConfig,
};
