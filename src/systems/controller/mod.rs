mod autopilot;
mod pid;
mod shaping;

pub use autopilot::{AutopilotContext, AutopilotController, AutopilotStrategy, PidAutopilot};
pub use pid::PidController;
pub use shaping::ControlShaper;
