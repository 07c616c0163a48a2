//! Moteur de planification : détection de conflits jour + horaire et
//! auto-arrangement glouton. Fonctions pures sur la collection fournie par
//! l'appelant ; aucun état conservé entre deux appels.

mod arrange;
mod conflicts;
mod occupancy;
mod types;

pub use arrange::{auto_arrange_classes, auto_arrange_classes_with};
pub use conflicts::{classes_for_day, find_conflicts, sort_by_start};
pub use occupancy::Occupancy;
pub use types::{ArrangeOptions, Arrangement, TimeConflict};
