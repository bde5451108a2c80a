//! Automap overlay control state machine.
//!
//! A deliberately small component compared to the two pipelines: discrete
//! input commands toggle the overlay and adjust its view state. The
//! renderer reads the resulting fields each frame; nothing here draws.
//!
//! While the overlay decides whether it consumes a key, a cheat-sequence
//! detector watches every keydown in parallel, whether or not the overlay
//! used the key.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::msg::MessageId;
use crate::player::Player;

/// Fixed cap on numbered marks; placement past it recycles slot 0.
pub const MAX_MARKS: usize = 10;

/// Pan velocity in map units per tic at normal zoom.
const PAN_SPEED: f32 = 140.0;

/// Multiplicative zoom per tic while a zoom key is held.
const ZOOM_IN_MULT: f32 = 1.02;
const ZOOM_OUT_MULT: f32 = 1.0 / 1.02;

/// Scale jumped to by the max-zoom toggle; far enough out to frame any
/// real map.
const MAX_SCALE: f32 = 1.0e6;

/// A directional pan command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDir {
    /// Pan north.
    Up,
    /// Pan south.
    Down,
    /// Pan west.
    Left,
    /// Pan east.
    Right,
}

/// Zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDir {
    /// Magnify.
    In,
    /// Shrink.
    Out,
}

/// Discrete commands the input layer feeds the overlay.
///
/// Key-to-command mapping (keyboard or a configured controller button)
/// belongs to the input layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomapCommand {
    /// Open or close the overlay.
    Toggle,
    /// Pan key pressed or released.
    Pan {
        /// Which way.
        dir: PanDir,
        /// True on keydown, false on release.
        pressed: bool,
    },
    /// Zoom key pressed or released.
    Zoom {
        /// Which way.
        dir: ZoomDir,
        /// True on keydown, false on release.
        pressed: bool,
    },
    /// Jump to maximum zoom-out and back.
    MaxZoomToggle,
    /// Toggle follow mode.
    FollowToggle,
    /// Toggle the grid overlay.
    GridToggle,
    /// Place the next numbered mark at the view centre.
    PlaceMark,
    /// Clear all marks.
    ClearMarks,
}

/// Single-sequence cheat detector.
///
/// Fed every keydown; reports completion when the whole sequence has been
/// typed, then rearms. A wrong key resets progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheatSequence {
    sequence: Vec<u8>,
    pos: usize,
}

impl CheatSequence {
    /// Creates a detector for `sequence`.
    #[must_use]
    pub fn new(sequence: &[u8]) -> Self {
        Self {
            sequence: sequence.to_vec(),
            pos: 0,
        }
    }

    /// Feeds one keydown; true when the sequence just completed.
    pub fn feed(&mut self, key: u8) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        if key == self.sequence[self.pos] {
            self.pos += 1;
            if self.pos == self.sequence.len() {
                self.pos = 0;
                return true;
            }
        } else {
            self.pos = usize::from(key == self.sequence[0]);
        }
        false
    }
}

/// The automap overlay state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Automap {
    active: bool,
    follow: bool,
    grid: bool,
    /// View centre in map units; tracks the player while following.
    offset: Vec2,
    /// Map units per screen unit.
    scale: f32,
    /// Current per-tic zoom multiplier; 1.0 when no zoom key is held.
    zoom_mult: f32,
    /// Current pan velocity; zero when no pan key is held or following.
    pan_vel: Vec2,
    max_zoomed: bool,
    saved_scale: f32,
    saved_offset: Vec2,
    marks: Vec<Vec2>,
    next_mark: usize,
    /// Map-reveal cheat level cycled by the cheat sequence (0..=2).
    reveal: u8,
    cheat: CheatSequence,
}

impl Default for Automap {
    fn default() -> Self {
        Self::new()
    }
}

impl Automap {
    /// Reveal-cheat key sequence.
    const REVEAL_CHEAT: &'static [u8] = b"iddt";

    /// Creates a closed overlay with default view state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: false,
            follow: true,
            grid: false,
            offset: Vec2::ZERO,
            scale: 1.0,
            zoom_mult: 1.0,
            pan_vel: Vec2::ZERO,
            max_zoomed: false,
            saved_scale: 1.0,
            saved_offset: Vec2::ZERO,
            marks: Vec::new(),
            next_mark: 0,
            reveal: 0,
            cheat: CheatSequence::new(Self::REVEAL_CHEAT),
        }
    }

    /// Whether the overlay is open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether follow mode is on.
    #[must_use]
    pub const fn follow(&self) -> bool {
        self.follow
    }

    /// Whether the grid is on.
    #[must_use]
    pub const fn grid(&self) -> bool {
        self.grid
    }

    /// Current pan velocity.
    #[must_use]
    pub const fn pan_vel(&self) -> Vec2 {
        self.pan_vel
    }

    /// Current per-tic zoom multiplier.
    #[must_use]
    pub const fn zoom_mult(&self) -> f32 {
        self.zoom_mult
    }

    /// Current view scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Placed marks, oldest slot first.
    #[must_use]
    pub fn marks(&self) -> &[Vec2] {
        &self.marks
    }

    /// Current reveal-cheat level (0 off, 1 walls, 2 things).
    #[must_use]
    pub const fn reveal(&self) -> u8 {
        self.reveal
    }

    /// Forces the overlay closed (player death with the map open).
    pub fn stop(&mut self) {
        self.active = false;
        self.pan_vel = Vec2::ZERO;
        self.zoom_mult = 1.0;
    }

    /// Feeds one raw keydown to the parallel cheat detector.
    ///
    /// Runs regardless of whether the overlay consumed the key, and only
    /// while the overlay is open. Cycles the reveal level on completion.
    pub fn key_down(&mut self, key: u8) {
        if self.active && self.cheat.feed(key) {
            self.reveal = (self.reveal + 1) % 3;
        }
    }

    /// Handles one discrete command.
    ///
    /// Returns true when the command was consumed. While inactive, only
    /// [`AutomapCommand::Toggle`] does anything; everything else falls
    /// through to the rest of the input chain.
    pub fn handle_command(
        &mut self,
        cmd: AutomapCommand,
        player_pos: Vec2,
        player: &mut Player,
    ) -> bool {
        if !self.active {
            if cmd == AutomapCommand::Toggle {
                self.active = true;
                // Follow mode starts tracking from the player.
                self.offset = player_pos;
                return true;
            }
            return false;
        }

        match cmd {
            AutomapCommand::Toggle => {
                self.stop();
            }
            AutomapCommand::Pan { dir, pressed } => {
                if self.follow {
                    // Pan is ignored while following; still consumed.
                    return true;
                }
                let axis = match dir {
                    PanDir::Up => Vec2::new(0.0, PAN_SPEED),
                    PanDir::Down => Vec2::new(0.0, -PAN_SPEED),
                    PanDir::Left => Vec2::new(-PAN_SPEED, 0.0),
                    PanDir::Right => Vec2::new(PAN_SPEED, 0.0),
                };
                if pressed {
                    self.pan_vel += axis;
                } else {
                    self.pan_vel -= axis;
                }
            }
            AutomapCommand::Zoom { dir, pressed } => {
                self.zoom_mult = if pressed {
                    match dir {
                        ZoomDir::In => ZOOM_IN_MULT,
                        ZoomDir::Out => ZOOM_OUT_MULT,
                    }
                } else {
                    1.0
                };
            }
            AutomapCommand::MaxZoomToggle => {
                if self.max_zoomed {
                    self.scale = self.saved_scale;
                    self.offset = self.saved_offset;
                } else {
                    self.saved_scale = self.scale;
                    self.saved_offset = self.offset;
                    self.scale = MAX_SCALE;
                }
                self.max_zoomed = !self.max_zoomed;
            }
            AutomapCommand::FollowToggle => {
                self.follow = !self.follow;
                if self.follow {
                    self.pan_vel = Vec2::ZERO;
                }
                player.message = Some(if self.follow {
                    MessageId::AutomapFollowOn
                } else {
                    MessageId::AutomapFollowOff
                });
            }
            AutomapCommand::GridToggle => {
                self.grid = !self.grid;
                player.message = Some(if self.grid {
                    MessageId::AutomapGridOn
                } else {
                    MessageId::AutomapGridOff
                });
            }
            AutomapCommand::PlaceMark => {
                let spot = if self.follow { player_pos } else { self.offset };
                if self.marks.len() < MAX_MARKS {
                    self.marks.push(spot);
                } else {
                    self.marks[self.next_mark] = spot;
                }
                #[allow(clippy::cast_possible_truncation)]
                let index = self.next_mark as u8;
                player.message = Some(MessageId::AutomapMarkedSpot(index));
                self.next_mark = (self.next_mark + 1) % MAX_MARKS;
            }
            AutomapCommand::ClearMarks => {
                self.marks.clear();
                self.next_mark = 0;
                player.message = Some(MessageId::AutomapMarksCleared);
            }
        }
        true
    }
}
