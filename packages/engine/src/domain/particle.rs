//! Particle entities
//!
//! A `Particle` is instantiated from a catalog entry whenever a cell is (re)filled
//! and lives exactly as long as nothing overwrites its cell. The grid owns every
//! particle and keeps `position`/`index` in step with the cell it occupies.

use rand::Rng;

use crate::core::utils::random::SimRng;
use crate::domain::catalog::{ElementKind, KindParams};
use crate::domain::color::Color;
use crate::domain::elements::{Category, ElementId, EL_EMPTY};
use crate::domain::repose::DirectionTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Per-category runtime state.
#[derive(Clone, Debug)]
pub enum ParticleState {
    None,
    Liquid { concentration: u8, max_concentration: u8 },
    Sand { repose_angle: f32, directions: DirectionTable },
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub element: ElementId,
    pub category: Category,
    /// Instance colour, fixed at creation.
    pub color: Color,
    pub position: Position,
    pub index: usize,
    pub density: f32,
    pub movable: bool,
    pub state: ParticleState,
}

impl Particle {
    /// Instantiate `kind` at a cell. The tint is drawn once from `rng`.
    pub fn spawn(kind: &ElementKind, position: Position, index: usize, rng: &mut SimRng) -> Self {
        let color = if kind.base_color == kind.variant_color {
            kind.base_color
        } else {
            Color::lerp(kind.base_color, kind.variant_color, rng.gen::<f32>())
        };

        let state = match &kind.params {
            KindParams::None => ParticleState::None,
            KindParams::Liquid { max_concentration } => ParticleState::Liquid {
                concentration: 1,
                max_concentration: *max_concentration,
            },
            KindParams::Sand { repose_angle, directions } => ParticleState::Sand {
                repose_angle: *repose_angle,
                directions: directions.clone(),
            },
        };

        Self {
            element: kind.id,
            category: kind.category,
            color,
            position,
            index,
            density: kind.density,
            movable: kind.movable,
            state,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.element == EL_EMPTY
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.position.y
    }

    pub fn concentration(&self) -> Option<u8> {
        match self.state {
            ParticleState::Liquid { concentration, .. } => Some(concentration),
            _ => None,
        }
    }

    /// Only liquids store a concentration. Values `<= 0` become 1 and the result is
    /// clamped to the type's maximum. Returns whether anything was stored.
    pub fn set_concentration(&mut self, value: i32) -> bool {
        match &mut self.state {
            ParticleState::Liquid { concentration, max_concentration } => {
                let max = (*max_concentration).max(1) as i32;
                *concentration = value.clamp(1, max) as u8;
                true
            }
            _ => false,
        }
    }

    pub fn directions(&self) -> Option<&DirectionTable> {
        match &self.state {
            ParticleState::Sand { directions, .. } => Some(directions),
            _ => None,
        }
    }

    /// Colour as drawn: liquids get darker the more concentrated they are.
    pub fn display_color(&self) -> Color {
        match self.state {
            ParticleState::Liquid { concentration, max_concentration } => {
                let span = max_concentration.saturating_sub(1).max(1) as f32;
                let factor = concentration as f32 / span * 0.5;
                self.color.darken(factor)
            }
            _ => self.color,
        }
    }
}
