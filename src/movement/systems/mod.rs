//! Movement domain: system modules for the controller update cycle.

pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use ground::{detect_ground, ensure_ground_probe};
pub(crate) use input::read_input;
pub(crate) use motion::{apply_horizontal_movement, apply_jump};
