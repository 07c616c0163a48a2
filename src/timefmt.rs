//! Arithmétique horaire : conversions "HH:MM" ↔ minutes depuis minuit,
//! affichage 12 heures, lignes de la grille hebdomadaire.

use chrono::{DateTime, Utc};

use crate::model::TimetableError;

/// Convertit "HH:MM" en minutes depuis minuit.
///
/// L'entrée est supposée déjà validée (voir [`parse_hhmm`]) ; un composant
/// illisible compte pour 0, sans panique.
pub fn time_to_minutes(time: &str) -> i32 {
    let (hours, minutes) = time.split_once(':').unwrap_or((time, "0"));
    hours.trim().parse::<i32>().unwrap_or(0) * 60 + minutes.trim().parse::<i32>().unwrap_or(0)
}

/// Conversion inverse, champs complétés à deux chiffres.
///
/// Suppose `0 <= minutes < 1440` ; au-delà, l'heure dépasse 24 sans repli.
pub fn minutes_to_time(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Affichage 12 heures avec AM/PM ("13:30" → "1:30 PM", "00:00" → "12:00 AM").
pub fn format_time(time: &str) -> String {
    let total = time_to_minutes(time);
    let hours = total / 60;
    let minutes = total % 60;
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:{minutes:02} {period}")
}

/// Chevauchement semi-ouvert de deux plages "HH:MM" : des bornes qui se
/// touchent ne se chevauchent pas.
pub fn times_overlap(start1: &str, end1: &str, start2: &str, end2: &str) -> bool {
    let s1 = time_to_minutes(start1);
    let e1 = time_to_minutes(end1);
    let s2 = time_to_minutes(start2);
    let e2 = time_to_minutes(end2);
    s1 < e2 && s2 < e1
}

/// Analyse stricte "HH:MM" (00:00–23:59), utilisée par la validation en
/// amont du moteur.
pub fn parse_hhmm(time: &str) -> Result<i32, TimetableError> {
    let invalid = || TimetableError::InvalidTimeFormat(time.to_string());
    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let h: i32 = hours.parse().map_err(|_| invalid())?;
    let m: i32 = minutes.parse().map_err(|_| invalid())?;
    if h > 23 || m > 59 {
        return Err(invalid());
    }
    Ok(h * 60 + m)
}

/// Ligne de la grille d'affichage ; dérivée, jamais persistée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour: u32,
    pub minute: u32,
    pub label: String,
}

/// Lignes horaires de la grille, de 6 AM à 10 PM inclus.
pub fn grid_time_slots() -> Vec<TimeSlot> {
    (6..=22u32)
        .map(|hour| {
            let period = if hour >= 12 { "PM" } else { "AM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            TimeSlot {
                hour,
                minute: 0,
                label: format!("{display}:00 {period}"),
            }
        })
        .collect()
}

/// Horodatage relatif pour l'affichage ("Just now", "5 mins ago", ...).
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_mins = (now - then).num_minutes();
    if diff_mins < 1 {
        return "Just now".to_string();
    }
    if diff_mins < 60 {
        return format!("{} min{} ago", diff_mins, plural(diff_mins));
    }
    let diff_hours = diff_mins / 60;
    if diff_hours < 24 {
        return format!("{} hour{} ago", diff_hours, plural(diff_hours));
    }
    let diff_days = diff_hours / 24;
    if diff_days < 7 {
        return format!("{} day{} ago", diff_days, plural(diff_days));
    }
    then.format("%Y-%m-%d").to_string()
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
