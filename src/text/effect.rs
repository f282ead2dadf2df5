use std::f32::consts::TAU;

use crate::color::Color;
use crate::geometry::Point;

/// A per-glyph animation: cycling colors and a vertical wave.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceEffect {
    colors: Vec<Color>,
    time: f32,
    decrease_coefficient: f32,
    wave_length: usize,
    wave_height: f32,
    wave_speed: f32,
}

impl SequenceEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// The number of glyphs in one period of the wave. Zero disables it.
    pub fn set_wave_length(&mut self, length: usize) {
        self.wave_length = length;
    }

    pub fn set_wave_height(&mut self, height: f32) {
        self.wave_height = height;
    }

    /// Periods per time unit.
    pub fn set_wave_speed(&mut self, speed: f32) {
        self.wave_speed = speed;
    }

    /// How fast the wave height decreases over time.
    pub fn set_decrease_coefficient(&mut self, coefficient: f32) {
        self.decrease_coefficient = coefficient;
    }

    pub fn wave_height(&self) -> f32 {
        self.wave_height
    }

    pub fn color(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            Color::WHITE
        } else {
            self.colors[i % self.colors.len()]
        }
    }

    pub fn delta(&self, i: usize) -> Point {
        if self.wave_length == 0 {
            return Point::ZERO;
        }

        let phase = (i % self.wave_length) as f32 / self.wave_length as f32;
        let y = self.wave_height / 2.0 * ((self.time * self.wave_speed + phase) * TAU).sin();
        Point::new(0.0, y)
    }

    pub fn update(&mut self, elapsed: f32) {
        self.time += elapsed;
        self.wave_height = (self.wave_height - self.decrease_coefficient * elapsed).max(0.0);
    }
}
