//! Per-frame HUD text for the local player
//!
//! Each frame prints the player's name, colour, position and heading into
//! the debug readout, then the caller flushes it.

use hudkit_domain::{
    azimuth_from_quaternion, colour_hex_to_string, colour_hex_to_triplet, generate_name_with,
    random_colour_hex_with, rgb_to_hex, vector_to_string, Quat, Rgb, Vec3,
};
use rand::Rng;

use crate::infrastructure::readout::DebugReadout;
use crate::readout_print;

/// Yaw added per frame, in radians
const TURN_PER_FRAME: f64 = 0.25;

/// Distance moved along +X per frame
const STEP_PER_FRAME: f64 = 0.5;

/// What the HUD knows about the local player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHud {
    pub name: String,
    pub colour: u32,
    pub position: Vec3,
    pub rotation: Quat,
}

impl PlayerHud {
    /// A freshly joined player with a random name and colour, like the login form picks.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            name: generate_name_with(rng),
            colour: random_colour_hex_with(rng),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Moves the player to where it is at `frame`.
    pub fn advance_to(&mut self, frame: u32) {
        let t = f64::from(frame);
        self.position = Vec3::new(t * STEP_PER_FRAME, 0.0, 0.0);
        self.rotation = Quat::from_yaw(t * TURN_PER_FRAME);
    }

    /// Heading in degrees
    pub fn heading_degrees(&self) -> f64 {
        azimuth_from_quaternion(&self.rotation).to_degrees()
    }
}

/// Prints one frame's worth of HUD lines.
pub fn render_frame(readout: &mut DebugReadout, frame: u32, hud: &PlayerHud) {
    let swatch = rgb_to_hex(Rgb::from_packed(hud.colour).channels());
    let triplet = colour_hex_to_triplet(hud.colour)
        .iter()
        .map(|c| format!("{c:.2}"))
        .collect::<Vec<_>>()
        .join(", ");

    readout_print!(readout, "frame", frame);
    readout_print!(readout, "name:", hud.name);
    readout_print!(
        readout,
        "colour:",
        swatch,
        format!("0x{}", colour_hex_to_string(hud.colour)),
        format!("[{triplet}]")
    );
    readout_print!(readout, "position:", vector_to_string(&hud.position));
    readout_print!(readout, "heading:", format!("{:.1}", hud.heading_degrees()));
}
