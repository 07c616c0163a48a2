use std::cmp::Reverse;

use super::conflicts::find_conflicts;
use super::occupancy::Occupancy;
use super::types::{ArrangeOptions, Arrangement};
use crate::model::ClassItem;

/// Auto-arrangement avec la fenêtre par défaut 06:00–22:00, pas de 30 min.
pub fn auto_arrange_classes(classes: &[ClassItem]) -> Arrangement {
    auto_arrange_classes_with(classes, ArrangeOptions::default())
}

/// Réarrange les cours pour éliminer les chevauchements.
///
/// Glouton, passe unique, sensible à l'ordre et non optimal : les cours
/// les plus longs sont placés d'abord (à durée égale, départ le plus tôt
/// d'abord). Chaque cours garde ses horaires d'origine si le créneau est
/// libre, sinon il est décalé vers le premier candidat libre de la
/// fenêtre ; s'il n'en existe aucun, il part inchangé dans `conflicts`.
///
/// Les entrées sont traitées comme immuables : les cours déplacés sont
/// des copies avec les seuls horaires remplacés, même id et mêmes jours.
pub fn auto_arrange_classes_with(classes: &[ClassItem], opts: ArrangeOptions) -> Arrangement {
    if classes.is_empty() {
        return Arrangement::default();
    }

    // Le tri stable préserve l'ordre d'entrée en cas d'égalité complète.
    let mut sorted = classes.to_vec();
    sorted.sort_by_key(|c| (Reverse(c.duration_minutes()), c.start_minutes()));

    let mut arranged: Vec<ClassItem> = Vec::new();
    let mut unplaced: Vec<ClassItem> = Vec::new();
    let mut occupancy = Occupancy::new();

    for class in &sorted {
        let start = class.start_minutes();
        let end = class.end_minutes();
        let duration = end - start;

        // D'abord le créneau d'origine : un emploi du temps déjà valide
        // ressort inchangé.
        if occupancy.is_slot_available(start, end, &class.days, None) {
            occupancy.mark_occupied(start, end, &class.days, &class.id);
            arranged.push(class.clone());
            continue;
        }

        let mut placed = false;
        let mut candidate = opts.window_start;
        while candidate + duration <= opts.window_end {
            if occupancy.is_slot_available(candidate, candidate + duration, &class.days, None) {
                occupancy.mark_occupied(candidate, candidate + duration, &class.days, &class.id);
                arranged.push(class.with_times(candidate, candidate + duration));
                placed = true;
                break;
            }
            candidate += opts.step;
        }

        if !placed {
            unplaced.push(class.clone());
        }
    }

    // Vérification finale : le placement ci-dessus garantit l'absence de
    // conflit ; si elle échoue, on rend l'entrée telle quelle et
    // l'appelant journalise l'anomalie.
    if !find_conflicts(&arranged).is_empty() {
        return Arrangement {
            arranged: classes.to_vec(),
            conflicts: Vec::new(),
        };
    }

    Arrangement {
        arranged,
        conflicts: unplaced,
    }
}
