use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::timefmt;

/// Erreurs de validation et de manipulation du modèle.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("class name cannot be empty")]
    EmptyName,
    #[error("class must recur on at least one day")]
    NoDays,
    #[error("invalid time (expected HH:MM): {0}")]
    InvalidTimeFormat(String),
    #[error("invalid time range: end must be after start")]
    InvalidTimeRange,
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("unknown class: {0}")]
    UnknownClass(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Jour de la semaine — ensemble fixe et ordonné, noms anglais complets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position dans la semaine, 0 = lundi.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            "saturday" | "sat" => Ok(Day::Saturday),
            "sunday" | "sun" => Ok(Day::Sunday),
            _ => Err(TimetableError::UnknownDay(s.to_string())),
        }
    }
}

/// Identifiant fort pour ClassItem
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(String);

impl ClassId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Cours planifié : récurrence hebdomadaire sur `days`, horaires muraux "HH:MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassItem {
    pub id: ClassId,
    pub name: String,
    pub days: Vec<Day>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ClassItem {
    /// Crée un cours en validant nom, jours et horaires (`end > start`).
    pub fn new<N: Into<String>>(
        name: N,
        days: Vec<Day>,
        start_time: &str,
        end_time: &str,
        location: Option<String>,
    ) -> Result<Self, TimetableError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TimetableError::EmptyName);
        }
        if days.is_empty() {
            return Err(TimetableError::NoDays);
        }
        let start = timefmt::parse_hhmm(start_time)?;
        let end = timefmt::parse_hhmm(end_time)?;
        if end <= start {
            return Err(TimetableError::InvalidTimeRange);
        }
        Ok(Self {
            id: ClassId::random(),
            name,
            days,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            location,
            color: None,
        })
    }

    pub fn start_minutes(&self) -> i32 {
        timefmt::time_to_minutes(&self.start_time)
    }

    pub fn end_minutes(&self) -> i32 {
        timefmt::time_to_minutes(&self.end_time)
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i32 {
        self.end_minutes() - self.start_minutes()
    }

    pub fn recurs_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    /// Copie avec de nouveaux horaires (en minutes depuis minuit) ;
    /// identité, jours et tout le reste sont conservés.
    pub fn with_times(&self, start_min: i32, end_min: i32) -> ClassItem {
        ClassItem {
            start_time: timefmt::minutes_to_time(start_min),
            end_time: timefmt::minutes_to_time(end_min),
            ..self.clone()
        }
    }
}

/// Emploi du temps complet — le blob persisté.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    #[serde(default)]
    pub classes: Vec<ClassItem>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Timetable {
    pub fn find_class<'a>(&'a self, id: &ClassId) -> Option<&'a ClassItem> {
        self.classes.iter().find(|c| &c.id == id)
    }

    /// Supprime un cours par id ; retourne `false` s'il est inconnu.
    pub fn remove_class(&mut self, id: &ClassId) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| &c.id != id);
        self.classes.len() != before
    }
}

/// Palette cyclique attribuée par l'appelant (jamais par le moteur).
pub const CLASS_COLORS: [&str; 8] = [
    "hsl(217, 91%, 60%)",
    "hsl(142, 76%, 36%)",
    "hsl(280, 65%, 55%)",
    "hsl(43, 96%, 56%)",
    "hsl(340, 82%, 52%)",
    "hsl(190, 90%, 40%)",
    "hsl(25, 95%, 53%)",
    "hsl(260, 60%, 50%)",
];

pub fn class_color(index: usize) -> &'static str {
    CLASS_COLORS[index % CLASS_COLORS.len()]
}
