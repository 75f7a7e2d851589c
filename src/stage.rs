//! Particle stage records.
//!
//! The fully worked record type of this crate: one stage of a
//! particle system declaration, with the field set and defaults of
//! the Doom 3 particle format.

use once_cell::sync::Lazy;

use crate::cursor::TokenCursor;
use crate::record::{
    FieldKind, FieldSpec, FieldValue, FieldWarning, Record, RecordError, RecordSchema,
    parse_record,
};

/// One stage of a particle system.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStage {
    /// Number of particles emitted per cycle.
    pub count: i32,
    /// Material (shader) name rendered for each particle.
    pub material: String,
    /// Duration of one cycle, in seconds (`time` in the declaration).
    pub duration: f32,
    /// Number of cycles; zero means infinite.
    pub cycles: f32,
    pub bunching: f32,
    pub time_offset: f32,
    pub dead_time: f32,
    /// Base colour (RGBA).
    pub colour: [f32; 4],
    /// Colour faded towards over the fade fractions (RGBA).
    pub fade_colour: [f32; 4],
    pub fade_in_fraction: f32,
    pub fade_out_fraction: f32,
    pub fade_index_fraction: f32,
    pub animation_frames: i32,
    pub animation_rate: f32,
    pub initial_angle: f32,
    pub bounds_expansion: f32,
    pub random_distribution: bool,
    pub use_entity_colour: bool,
    /// Gravity strength applied to particles.
    pub gravity: f32,
    /// True when gravity is applied in world space (`gravity world`).
    pub apply_world_gravity: bool,
    pub offset: [f32; 3],
}

impl Default for ParticleStage {
    fn default() -> Self {
        Self {
            count: 1,
            material: String::new(),
            duration: 1.0,
            cycles: 0.0,
            bunching: 0.0,
            time_offset: 0.0,
            dead_time: 0.0,
            colour: [1.0, 1.0, 1.0, 1.0],
            fade_colour: [1.0, 1.0, 1.0, 0.0],
            fade_in_fraction: 0.0,
            fade_out_fraction: 0.0,
            fade_index_fraction: 0.0,
            animation_frames: 0,
            animation_rate: 0.0,
            initial_angle: 0.0,
            bounds_expansion: 0.0,
            random_distribution: true,
            use_entity_colour: false,
            gravity: -1.0,
            apply_world_gravity: true,
            offset: [0.0, 0.0, 0.0],
        }
    }
}

/// Dispatch table for stage fields, keyed by their declaration text.
static SCHEMA: Lazy<RecordSchema> = Lazy::new(|| {
    RecordSchema::new(vec![
        FieldSpec::new("count", FieldKind::Integer, FieldValue::Integer(1)),
        FieldSpec::new("material", FieldKind::Text, FieldValue::Text(String::new())),
        FieldSpec::new("time", FieldKind::Float, FieldValue::Float(1.0)),
        FieldSpec::new("cycles", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("timeOffset", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("deadTime", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("bunching", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new(
            "color",
            FieldKind::Vector4,
            FieldValue::Vector4([1.0, 1.0, 1.0, 1.0]),
        ),
        FieldSpec::new(
            "fadeColor",
            FieldKind::Vector4,
            FieldValue::Vector4([1.0, 1.0, 1.0, 0.0]),
        ),
        FieldSpec::new("fadeIn", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("fadeOut", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("fadeIndex", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("animationFrames", FieldKind::Integer, FieldValue::Integer(0)),
        // Lower-case "rate" in the original format.
        FieldSpec::new("animationrate", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("angle", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("boundsExpansion", FieldKind::Float, FieldValue::Float(0.0)),
        FieldSpec::new("randomDistribution", FieldKind::Flag, FieldValue::Flag(true)),
        FieldSpec::new("entityColor", FieldKind::Flag, FieldValue::Flag(false)),
        FieldSpec::new(
            "gravity",
            FieldKind::ModifiedFloat { keyword: "world" },
            FieldValue::ModifiedFloat {
                modifier: true,
                value: -1.0,
            },
        ),
        FieldSpec::new(
            "offset",
            FieldKind::Vector3,
            FieldValue::Vector3([0.0, 0.0, 0.0]),
        ),
    ])
});

impl ParticleStage {
    /// Parse one stage from the cursor, positioned just inside the
    /// opening brace (the brace itself already consumed).
    ///
    /// Per-field conversion failures accumulate in `warnings` and the
    /// affected fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnterminatedRecord`] when the stream
    /// runs out before the closing brace; the partial stage must be
    /// discarded.
    pub fn parse(
        cursor: &mut TokenCursor<'_>,
        warnings: &mut Vec<FieldWarning>,
    ) -> Result<Self, RecordError> {
        let record = parse_record(&SCHEMA, cursor, warnings)?;
        Ok(Self::from_record(&record))
    }

    /// Milliseconds of one full cycle including dead time.
    #[must_use]
    pub fn cycle_msec(&self) -> f32 {
        (self.duration + self.dead_time) * 1000.0
    }

    fn from_record(record: &Record) -> Self {
        let fallback = Self::default();
        let (apply_world_gravity, gravity) = record
            .modified_float("gravity")
            .unwrap_or((fallback.apply_world_gravity, fallback.gravity));
        Self {
            count: record.integer("count").unwrap_or(fallback.count),
            material: record
                .text("material")
                .map_or(fallback.material, ToString::to_string),
            duration: record.float("time").unwrap_or(fallback.duration),
            cycles: record.float("cycles").unwrap_or(fallback.cycles),
            bunching: record.float("bunching").unwrap_or(fallback.bunching),
            time_offset: record.float("timeOffset").unwrap_or(fallback.time_offset),
            dead_time: record.float("deadTime").unwrap_or(fallback.dead_time),
            colour: record.vector4("color").unwrap_or(fallback.colour),
            fade_colour: record.vector4("fadeColor").unwrap_or(fallback.fade_colour),
            fade_in_fraction: record.float("fadeIn").unwrap_or(fallback.fade_in_fraction),
            fade_out_fraction: record
                .float("fadeOut")
                .unwrap_or(fallback.fade_out_fraction),
            fade_index_fraction: record
                .float("fadeIndex")
                .unwrap_or(fallback.fade_index_fraction),
            animation_frames: record
                .integer("animationFrames")
                .unwrap_or(fallback.animation_frames),
            animation_rate: record
                .float("animationrate")
                .unwrap_or(fallback.animation_rate),
            initial_angle: record.float("angle").unwrap_or(fallback.initial_angle),
            bounds_expansion: record
                .float("boundsExpansion")
                .unwrap_or(fallback.bounds_expansion),
            random_distribution: record
                .flag("randomDistribution")
                .unwrap_or(fallback.random_distribution),
            use_entity_colour: record
                .flag("entityColor")
                .unwrap_or(fallback.use_entity_colour),
            gravity,
            apply_world_gravity,
            offset: record.vector3("offset").unwrap_or(fallback.offset),
        }
    }
}
