use crate::model::{ClassItem, Day};

/// Options de placement pour l'auto-arrangement.
#[derive(Debug, Clone, Copy)]
pub struct ArrangeOptions {
    /// Borne basse des créneaux candidats, en minutes depuis minuit.
    pub window_start: i32,
    /// Borne haute : un cours doit se terminer au plus tard ici.
    pub window_end: i32,
    /// Pas de balayage des candidats, en minutes.
    pub step: i32,
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        // 06:00–22:00, pas de 30 minutes
        Self {
            window_start: 6 * 60,
            window_end: 22 * 60,
            step: 30,
        }
    }
}

/// Paire de cours en conflit sur un jour donné ; un conflit est émis par
/// jour partagé qui se chevauche.
#[derive(Debug, Clone)]
pub struct TimeConflict {
    pub class1: ClassItem,
    pub class2: ClassItem,
    pub day: Day,
}

/// Résultat d'un auto-arrangement : `conflicts` liste les cours
/// impossibles à placer dans la fenêtre, inchangés.
#[derive(Debug, Clone, Default)]
pub struct Arrangement {
    pub arranged: Vec<ClassItem>,
    pub conflicts: Vec<ClassItem>,
}
