use crate::model::{ClassId, Day};

#[derive(Debug, Clone)]
struct OccupiedSlot {
    start: i32,
    end: i32,
    id: ClassId,
}

/// Intervalles occupés par jour, éphémère le temps d'un arrangement.
///
/// Listes en ajout seul, balayées linéairement ; suffisant pour une
/// semaine de cours.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    days: [Vec<OccupiedSlot>; 7],
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vrai si `[start, end)` est libre sur tous les jours listés.
    /// Les intervalles portant `exclude` sont ignorés, ce qui permet de
    /// retester un cours contre tous les autres.
    pub fn is_slot_available(
        &self,
        start: i32,
        end: i32,
        days: &[Day],
        exclude: Option<&ClassId>,
    ) -> bool {
        for day in days {
            for slot in &self.days[day.index()] {
                if exclude == Some(&slot.id) {
                    continue;
                }
                if start < slot.end && end > slot.start {
                    return false;
                }
            }
        }
        true
    }

    /// Ajoute `[start, end)` à chaque jour listé ; une entrée par jour,
    /// sans fusion ni déduplication.
    pub fn mark_occupied(&mut self, start: i32, end: i32, days: &[Day], id: &ClassId) {
        for day in days {
            self.days[day.index()].push(OccupiedSlot {
                start,
                end,
                id: id.clone(),
            });
        }
    }
}
