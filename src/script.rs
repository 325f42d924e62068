//! Commands a headless collaborator issues against a controller.
//!
//! A script is a list of tokens separated by commas or whitespace:
//! `next`, `prev`, `speed=<f64>`, `wait=<frames>`, `settle`.

use std::{str::FromStr, time::Duration};

use crate::{
    controller::PlaybackController,
    driver::ProgressDriver,
    error::{ScrubError, ScrubResult},
    timing,
};

/// Hard cap on frames pumped by a single `settle`, so unbounded runs stop.
pub const SETTLE_FRAME_CAP: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrubCommand {
    Next,
    Prev,
    /// Already clamped to the speed range.
    Speed(f64),
    Wait(u32),
    Settle,
}

impl FromStr for ScrubCommand {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        if token.is_empty() {
            return Err(ScrubError::script("command must be non-empty"));
        }

        let (name, arg) = match token.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (token.as_str(), None),
        };

        match (name, arg) {
            ("next" | "forward" | "f", None) => Ok(Self::Next),
            ("prev" | "reverse" | "r", None) => Ok(Self::Prev),
            ("settle", None) => Ok(Self::Settle),
            ("speed", Some(v)) => {
                let speed: f64 = v
                    .parse()
                    .map_err(|_| ScrubError::script(format!("invalid speed '{v}'")))?;
                if !speed.is_finite() {
                    return Err(ScrubError::script("speed must be finite"));
                }
                Ok(Self::Speed(timing::clamp_speed(speed)))
            }
            ("wait", Some(v)) => v
                .parse()
                .map(Self::Wait)
                .map_err(|_| ScrubError::script(format!("invalid frame count '{v}'"))),
            (other, _) => Err(ScrubError::script(format!("unknown command '{other}'"))),
        }
    }
}

pub fn parse_script(s: &str) -> ScrubResult<Vec<ScrubCommand>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Apply one command. `on_frame` runs after every pumped frame.
///
/// Returns the number of frames pumped.
pub fn apply<D, F>(
    controller: &mut PlaybackController<D>,
    command: ScrubCommand,
    frame: Duration,
    mut on_frame: F,
) -> u32
where
    D: ProgressDriver,
    F: FnMut(&PlaybackController<D>),
{
    match command {
        ScrubCommand::Next => {
            controller.play_forward();
            0
        }
        ScrubCommand::Prev => {
            controller.play_previous_in_reverse();
            0
        }
        ScrubCommand::Speed(speed) => {
            controller.set_speed(speed);
            0
        }
        ScrubCommand::Wait(frames) => {
            for _ in 0..frames {
                controller.tick(frame);
                on_frame(controller);
            }
            frames
        }
        ScrubCommand::Settle => {
            let mut pumped = 0;
            while controller.is_running() && pumped < SETTLE_FRAME_CAP {
                controller.tick(frame);
                on_frame(controller);
                pumped += 1;
            }
            if controller.is_running() {
                tracing::warn!(pumped, "settle gave up on a run that never completes");
            }
            pumped
        }
    }
}
