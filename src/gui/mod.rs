mod app;
mod cadence;
mod config;
mod draw;
mod grid;

pub use app::App;
use cadence::StepCadence;
pub use config::Config;
use grid::GridTexture;
