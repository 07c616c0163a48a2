#![forbid(unsafe_code)]
//! Timetable — bibliothèque d'emploi du temps hebdomadaire personnel (sans BD).
//!
//! - Stockage fichier (JSON/CSV).
//! - Détection de conflits jour + horaire.
//! - Auto-arrangement glouton dans la fenêtre 06:00–22:00.
//! - Heures murales "HH:MM" ; affichage 12 heures en dehors du cœur.

pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;
pub mod timefmt;

pub use model::{class_color, ClassId, ClassItem, Day, Timetable, TimetableError, CLASS_COLORS};
pub use scheduler::{
    auto_arrange_classes, auto_arrange_classes_with, classes_for_day, find_conflicts,
    sort_by_start, ArrangeOptions, Arrangement, Occupancy, TimeConflict,
};
pub use storage::{JsonStorage, Storage};
pub use timefmt::{
    format_relative_time, format_time, grid_time_slots, minutes_to_time, parse_hhmm,
    time_to_minutes, times_overlap, TimeSlot,
};
