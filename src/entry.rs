use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum EntryField {
    #[strum(to_string = "distance")]
    Distance,
    #[strum(to_string = "duration")]
    Duration,
    #[strum(to_string = "body weight")]
    BodyWeight,
    #[strum(to_string = "daily target")]
    Target,
}

/// One manual entry, already validated: every value is finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunEntry {
    pub distance_km: f64,
    pub duration_min: f64,
    pub body_weight_kg: f64,
    pub target_km: Option<f64>,
}

impl RunEntry {
    pub fn new(
        distance_km: f64,
        duration_min: f64,
        body_weight_kg: f64,
        target_km: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let entry = Self {
            distance_km: positive(EntryField::Distance, distance_km)?,
            duration_min: positive(EntryField::Duration, duration_min)?,
            body_weight_kg: positive(EntryField::BodyWeight, body_weight_kg)?,
            target_km: target_km
                .map(|t| positive(EntryField::Target, t))
                .transpose()?,
        };
        Ok(entry)
    }

    /// Parse the raw form strings. A blank target means "no explicit target".
    pub fn parse(
        distance: &str,
        duration: &str,
        body_weight: &str,
        target: &str,
    ) -> Result<Self, ValidationError> {
        let target_km = if target.trim().is_empty() {
            None
        } else {
            Some(number(EntryField::Target, target)?)
        };
        Self::new(
            number(EntryField::Distance, distance)?,
            number(EntryField::Duration, duration)?,
            number(EntryField::BodyWeight, body_weight)?,
            target_km,
        )
    }
}

fn number(field: EntryField, input: &str) -> Result<f64, ValidationError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field,
            input: input.to_string(),
        }),
    }
}

fn positive(field: EntryField, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            input: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}
