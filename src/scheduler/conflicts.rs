use super::types::TimeConflict;
use crate::model::{ClassItem, Day};
use crate::timefmt::{time_to_minutes, times_overlap};

/// Détecte tous les conflits d'une collection de cours.
///
/// Pour chaque paire (i, j) avec i < j dans l'ordre d'entrée, un conflit
/// est émis par jour commun dont les plages se chevauchent (règle
/// semi-ouverte : des bornes qui se touchent ne comptent pas). Quadratique
/// sur le nombre de cours, acceptable pour une semaine.
pub fn find_conflicts(classes: &[ClassItem]) -> Vec<TimeConflict> {
    let mut out = Vec::new();

    for (i, class1) in classes.iter().enumerate() {
        for class2 in classes.iter().skip(i + 1) {
            for day in &class1.days {
                if !class2.days.contains(day) {
                    continue;
                }
                if times_overlap(
                    &class1.start_time,
                    &class1.end_time,
                    &class2.start_time,
                    &class2.end_time,
                ) {
                    out.push(TimeConflict {
                        class1: class1.clone(),
                        class2: class2.clone(),
                        day: *day,
                    });
                }
            }
        }
    }

    out
}

/// Cours récurrents un jour donné, dans l'ordre d'entrée.
pub fn classes_for_day(classes: &[ClassItem], day: Day) -> Vec<ClassItem> {
    classes
        .iter()
        .filter(|c| c.recurs_on(day))
        .cloned()
        .collect()
}

/// Copie triée par heure de début croissante.
pub fn sort_by_start(classes: &[ClassItem]) -> Vec<ClassItem> {
    let mut sorted = classes.to_vec();
    sorted.sort_by_key(|c| time_to_minutes(&c.start_time));
    sorted
}
