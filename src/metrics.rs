/// Calories burned per kilogram of body weight per kilometre run.
pub const CALORIES_PER_KG_KM: f64 = 0.653;

/// Minutes needed to cover one kilometre.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Kilometres covered per hour.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    (distance_km / duration_min) * 60.0
}

pub fn calories_burned(distance_km: f64, body_weight_kg: f64) -> f64 {
    distance_km * body_weight_kg * CALORIES_PER_KG_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_and_speed_for_even_run() {
        assert_eq!(pace_min_per_km(5.0, 30.0), 6.0);
        assert_eq!(speed_km_per_h(5.0, 30.0), 10.0);
    }

    #[test]
    fn test_pace_times_distance_is_duration() {
        for (distance, duration) in [(3.7, 21.4), (42.195, 245.0), (0.4, 1.75), (12.0, 59.9)] {
            let pace = pace_min_per_km(distance, duration);
            assert!((pace * distance - duration).abs() < 1e-9);
            let speed = speed_km_per_h(distance, duration);
            assert!((speed - 60.0 / pace).abs() < 1e-9);
        }
    }

    #[test]
    fn test_calories_formula_is_exact() {
        assert_eq!(calories_burned(5.0, 70.0), 5.0 * 70.0 * 0.653);
        assert!((calories_burned(5.0, 70.0) - 228.55).abs() < 1e-9);
    }
}
