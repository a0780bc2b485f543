use crate::{
    day::Session,
    guide::Workout,
    progress::{DailyProgress, TargetStatus},
    store::HistorySummary,
};

pub fn pace(v: f64) -> String {
    format!("{v:.2} min/km")
}

pub fn speed(v: f64) -> String {
    format!("{v:.1} km/h")
}

pub fn calories(v: f64) -> String {
    format!("{v:.0} kcal")
}

pub fn km(v: f64) -> String {
    format!("{v:.1} km")
}

pub fn target(v: Option<f64>) -> String {
    match v {
        Some(t) => km(t),
        None => "no target".to_string(),
    }
}

/// Label/value rows for the daily progress panel.
pub fn progress_rows(p: &DailyProgress) -> [(&'static str, String); 4] {
    [
        ("Daily target", km(p.target_km)),
        ("Distance today", km(p.distance_km)),
        ("Remaining", format!("{:.2} km", p.remaining_km.abs())),
        ("Progress", format!("{:.1}%", p.percent)),
    ]
}

/// Headline plus detail lines describing where the day stands.
pub fn progress_status(p: &DailyProgress) -> (&'static str, Vec<String>) {
    match p.status {
        TargetStatus::Achieved { excess_km } => {
            let mut lines = vec![format!(
                "Total today: {:.1} km (target: {:.1} km)",
                p.distance_km, p.target_km
            )];
            if excess_km > 0.0 {
                lines.push(format!(
                    "You passed your daily target by {excess_km:.1} km!"
                ));
            }
            ("DAILY TARGET REACHED!", lines)
        }
        TargetStatus::Pending { remaining_km } => (
            "NOT REACHED YET",
            vec![
                format!("{remaining_km:.2} km to go to reach today's target"),
                format!("Progress: {:.1}% of {:.1} km", p.percent, p.target_km),
            ],
        ),
    }
}

pub fn history_header(summary: &HistorySummary) -> String {
    if summary.days == 0 {
        "no runs recorded yet".to_string()
    } else {
        format!("{} days, {} runs", summary.days, summary.sessions)
    }
}

pub fn session_line(index: usize, s: &Session) -> String {
    format!(
        "#{index} {}  {} km in {} min  {}  {}  {}  day total {}",
        s.time_of_day,
        s.distance_km,
        s.duration_min,
        pace(s.pace_min_per_km),
        speed(s.speed_km_per_h),
        calories(s.calories_burned),
        km(s.cumulative_distance_at_entry_km),
    )
}

pub fn workout_line(w: &Workout) -> String {
    let minutes = w
        .minutes
        .map(|m| format!("{m} min"))
        .unwrap_or_else(|| "-".to_string());
    format!("{minutes} | {}", w.focus.label())
}
