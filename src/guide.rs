//! Fixed training and recovery advice shown alongside the log.

use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    WarmUp,
    Speed,
    Recovery,
    Endurance,
    Variety,
    Consistency,
    Rest,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Focus::WarmUp => "Warm-up",
            Focus::Speed => "Speed",
            Focus::Recovery => "Recovery",
            Focus::Endurance => "Endurance",
            Focus::Variety => "Variety",
            Focus::Consistency => "Consistency",
            Focus::Rest => "Full recovery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workout {
    pub day: Weekday,
    pub name: &'static str,
    /// `None` on rest days.
    pub minutes: Option<u32>,
    pub focus: Focus,
}

pub const WEEKLY_SCHEDULE: [Workout; 7] = [
    Workout {
        day: Weekday::Mon,
        name: "Easy Run",
        minutes: Some(30),
        focus: Focus::WarmUp,
    },
    Workout {
        day: Weekday::Tue,
        name: "Interval Run",
        minutes: Some(45),
        focus: Focus::Speed,
    },
    Workout {
        day: Weekday::Wed,
        name: "Recovery",
        minutes: Some(20),
        focus: Focus::Recovery,
    },
    Workout {
        day: Weekday::Thu,
        name: "Long Run",
        minutes: Some(60),
        focus: Focus::Endurance,
    },
    Workout {
        day: Weekday::Fri,
        name: "Cross Training",
        minutes: Some(40),
        focus: Focus::Variety,
    },
    Workout {
        day: Weekday::Sat,
        name: "Tempo Run",
        minutes: Some(50),
        focus: Focus::Consistency,
    },
    Workout {
        day: Weekday::Sun,
        name: "Rest Day",
        minutes: None,
        focus: Focus::Rest,
    },
];

pub fn workout_for(day: Weekday) -> &'static Workout {
    &WEEKLY_SCHEDULE[day.num_days_from_monday() as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub name: &'static str,
    pub nutrient: &'static str,
    pub note: &'static str,
}

pub const RECOVERY_FOODS: [Food; 8] = [
    Food {
        name: "Chicken breast (100g)",
        nutrient: "31g protein",
        note: "High protein, low fat",
    },
    Food {
        name: "Eggs (2)",
        nutrient: "13g protein",
        note: "Complete protein, easy to digest",
    },
    Food {
        name: "Salmon (100g)",
        nutrient: "25g protein",
        note: "Protein plus omega-3",
    },
    Food {
        name: "Tofu (100g)",
        nutrient: "8g protein",
        note: "Plant protein",
    },
    Food {
        name: "Brown rice (100g)",
        nutrient: "23g carbs",
        note: "Complex carbohydrate",
    },
    Food {
        name: "Oatmeal (50g)",
        nutrient: "30g carbs",
        note: "High fibre, lasting energy",
    },
    Food {
        name: "Sweet potato (100g)",
        nutrient: "20g carbs",
        note: "Vitamin A, healthy carbs",
    },
    Food {
        name: "Banana (1)",
        nutrient: "27g carbs",
        note: "Potassium, quick energy",
    },
];

pub const QUICK_TIPS: [&str; 4] = [
    "Protein within 30 minutes after running",
    "Drink 500ml of water for every 30 minutes of running",
    "Complex carbohydrates before running",
    "Avoid heavy meals in the 2 hours before running",
];
