#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod phase;
pub mod report;
pub mod script;
pub mod timing;
pub mod transition;

pub use animation::PlayableAnimation;
pub use config::ScrubConfig;
pub use controller::{ControllerState, PlaybackController};
pub use driver::{DriverStatus, LinearDriver, ProgressDriver, Tick};
pub use error::{ScrubError, ScrubResult};
pub use phase::Phase;
pub use report::{ProgressReport, reportable_progress};
pub use script::{ScrubCommand, parse_script};
pub use transition::Transition;
