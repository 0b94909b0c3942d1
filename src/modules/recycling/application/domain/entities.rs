use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::num::IntErrorKind;
use utoipa::ToSchema;

/// Points awarded per recycled item, whatever the material.
pub const POINTS_PER_ITEM: i64 = 10;

/// Upper bound for a single event; keeps the 64-bit counters far from overflow.
pub const MAX_QUANTITY_PER_EVENT: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecyclingInputError {
    #[error("Item type and quantity are required")]
    MissingFields,

    #[error("Invalid item type. Must be: plastic, glass, paper, or metal")]
    UnknownMaterial(String),

    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    #[error("Quantity must not exceed {}", MAX_QUANTITY_PER_EVENT)]
    QuantityTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Plastic,
    Glass,
    Paper,
    Metal,
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Plastic,
        MaterialType::Glass,
        MaterialType::Paper,
        MaterialType::Metal,
    ];

    /// Kilograms of CO2 saved per recycled unit.
    pub fn co2_per_unit(&self) -> f64 {
        match self {
            MaterialType::Plastic => 0.5,
            MaterialType::Glass => 0.3,
            MaterialType::Paper => 0.2,
            MaterialType::Metal => 0.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Plastic => "plastic",
            MaterialType::Glass => "glass",
            MaterialType::Paper => "paper",
            MaterialType::Metal => "metal",
        }
    }

    /// Case-sensitive: `"Plastic"` is not a material.
    pub fn parse(raw: &str) -> Result<Self, RecyclingInputError> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == trimmed)
            .ok_or_else(|| RecyclingInputError::UnknownMaterial(trimmed.to_string()))
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, strictly positive item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, RecyclingInputError> {
        if value <= 0 {
            return Err(RecyclingInputError::InvalidQuantity);
        }
        if value > MAX_QUANTITY_PER_EVENT {
            return Err(RecyclingInputError::QuantityTooLarge);
        }
        Ok(Self(value))
    }

    /// Accepts JSON integers, whole-valued floats (`5.0`) and base-10 integer
    /// strings (`"5"`). Everything else is rejected.
    pub fn from_json(value: &Value) -> Result<Self, RecyclingInputError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Self::new(i);
                }
                if n.as_u64().is_some() {
                    return Err(RecyclingInputError::QuantityTooLarge);
                }
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => {
                        if f > MAX_QUANTITY_PER_EVENT as f64 {
                            Err(RecyclingInputError::QuantityTooLarge)
                        } else {
                            Self::new(f as i64)
                        }
                    }
                    _ => Err(RecyclingInputError::InvalidQuantity),
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(RecyclingInputError::InvalidQuantity);
                }
                match trimmed.parse::<i64>() {
                    Ok(i) => Self::new(i),
                    Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                        Err(RecyclingInputError::QuantityTooLarge)
                    }
                    Err(_) => Err(RecyclingInputError::InvalidQuantity),
                }
            }
            _ => Err(RecyclingInputError::InvalidQuantity),
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Amounts added to a user's running totals for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsDelta {
    pub items: i64,
    pub co2_saved: f64,
    pub points: i64,
}

impl StatsDelta {
    pub fn for_event(material: MaterialType, quantity: Quantity) -> Self {
        let q = quantity.value();
        Self {
            items: q,
            co2_saved: material.co2_per_unit() * q as f64,
            points: POINTS_PER_ITEM * q,
        }
    }
}

/// Summary of an accepted event. Returned to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecyclingLog {
    pub item_type: MaterialType,
    #[schema(example = 5)]
    pub quantity: i64,
    #[serde(rename = "co2Saved")]
    #[schema(example = 2.5)]
    pub co2_saved: f64,
    #[serde(rename = "pointsEarned")]
    #[schema(example = 50)]
    pub points_earned: i64,
    pub timestamp: DateTime<Utc>,
}

impl RecyclingLog {
    pub fn new(material: MaterialType, delta: StatsDelta, timestamp: DateTime<Utc>) -> Self {
        Self {
            item_type: material,
            quantity: delta.items,
            co2_saved: delta.co2_saved,
            points_earned: delta.points,
            timestamp,
        }
    }
}
