#![forbid(unsafe_code)]
use timetable::{auto_arrange_classes, find_conflicts, ClassItem, Day};

fn class(name: &str, days: &[Day], start: &str, end: &str) -> ClassItem {
    ClassItem::new(name, days.to_vec(), start, end, None).unwrap()
}

#[test]
fn empty_input_returns_empty() {
    let result = auto_arrange_classes(&[]);
    assert!(result.arranged.is_empty());
    assert!(result.conflicts.is_empty());
}

#[test]
fn conflict_free_schedule_is_returned_unchanged() {
    let a = class("Math", &[Day::Monday], "09:00", "10:30");
    let b = class("Bio", &[Day::Tuesday], "09:00", "10:00");

    let result = auto_arrange_classes(&[a.clone(), b.clone()]);
    assert!(result.conflicts.is_empty());
    assert_eq!(result.arranged.len(), 2);

    let placed_a = result.arranged.iter().find(|c| c.id == a.id).unwrap();
    assert_eq!(placed_a.start_time, "09:00");
    assert_eq!(placed_a.end_time, "10:30");
    let placed_b = result.arranged.iter().find(|c| c.id == b.id).unwrap();
    assert_eq!(placed_b.start_time, "09:00");
    assert_eq!(placed_b.end_time, "10:00");
}

#[test]
fn overlapping_pair_is_resolved() {
    // Le plus long garde son créneau, le plus court est décalé vers le
    // premier candidat libre de la fenêtre.
    let a = class("Math", &[Day::Monday], "09:00", "10:30");
    let b = class("Bio", &[Day::Monday], "10:00", "11:00");

    let result = auto_arrange_classes(&[a.clone(), b.clone()]);
    assert!(result.conflicts.is_empty());
    assert_eq!(result.arranged.len(), 2);
    assert!(find_conflicts(&result.arranged).is_empty());

    let placed_a = result.arranged.iter().find(|c| c.id == a.id).unwrap();
    assert_eq!(placed_a.start_time, "09:00");
    assert_eq!(placed_a.end_time, "10:30");
    let placed_b = result.arranged.iter().find(|c| c.id == b.id).unwrap();
    assert_eq!(placed_b.start_time, "06:00");
    assert_eq!(placed_b.end_time, "07:00");
}

#[test]
fn identical_duplicates_both_fit_in_window() {
    let a = class("Math", &[Day::Monday], "09:00", "10:00");
    let b = class("Bio", &[Day::Monday], "09:00", "10:00");

    let result = auto_arrange_classes(&[a.clone(), b.clone()]);
    assert!(result.conflicts.is_empty());
    assert_eq!(result.arranged.len(), 2);
    assert!(find_conflicts(&result.arranged).is_empty());

    // Le tri stable laisse le premier en entrée sur son créneau d'origine.
    let placed_a = result.arranged.iter().find(|c| c.id == a.id).unwrap();
    assert_eq!(placed_a.start_time, "09:00");
    let placed_b = result.arranged.iter().find(|c| c.id == b.id).unwrap();
    assert_eq!(placed_b.start_time, "06:00");
    assert_eq!(placed_b.end_time, "07:00");

    for c in &result.arranged {
        assert!(c.start_minutes() >= 6 * 60);
        assert!(c.end_minutes() <= 22 * 60);
    }
}

#[test]
fn saturated_day_reports_unplaceable() {
    // Lundi plein de 06:00 à 22:00 : la fenêtre ne laisse aucun candidat.
    let mut classes: Vec<ClassItem> = (6..22)
        .map(|h| {
            class(
                &format!("Block {h}"),
                &[Day::Monday],
                &format!("{h:02}:00"),
                &format!("{:02}:00", h + 1),
            )
        })
        .collect();
    let extra = class("Extra", &[Day::Monday], "09:00", "10:00");
    classes.push(extra.clone());

    let result = auto_arrange_classes(&classes);
    assert_eq!(result.arranged.len(), 16);
    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].id, extra.id);
    // le cours non plaçable ressort inchangé
    assert_eq!(result.conflicts[0].start_time, "09:00");
    assert_eq!(result.conflicts[0].end_time, "10:00");
    assert!(find_conflicts(&result.arranged).is_empty());
}

#[test]
fn moved_class_keeps_identity_and_fields() {
    let long = class("Lecture", &[Day::Monday], "09:00", "11:00");
    let mut short = class("Lab", &[Day::Monday], "09:00", "10:00");
    short.location = Some("Room 4".to_string());
    short.color = Some("hsl(217, 91%, 60%)".to_string());

    let result = auto_arrange_classes(&[long.clone(), short.clone()]);
    assert!(result.conflicts.is_empty());

    let moved = result.arranged.iter().find(|c| c.id == short.id).unwrap();
    assert_ne!(moved.start_time, "09:00");
    assert_eq!(moved.name, "Lab");
    assert_eq!(moved.days, vec![Day::Monday]);
    assert_eq!(moved.location.as_deref(), Some("Room 4"));
    assert_eq!(moved.color.as_deref(), Some("hsl(217, 91%, 60%)"));
    assert_eq!(moved.duration_minutes(), 60);
}

#[test]
fn arranged_schedule_never_conflicts() {
    let classes = vec![
        class("A", &[Day::Monday, Day::Wednesday], "09:00", "10:30"),
        class("B", &[Day::Monday], "09:00", "10:00"),
        class("C", &[Day::Wednesday, Day::Friday], "10:00", "11:00"),
        class("D", &[Day::Monday], "09:30", "11:30"),
        class("E", &[Day::Friday], "10:30", "12:00"),
    ];

    let result = auto_arrange_classes(&classes);
    assert!(find_conflicts(&result.arranged).is_empty());
    assert_eq!(
        result.arranged.len() + result.conflicts.len(),
        classes.len()
    );
}

#[test]
fn arrangement_is_deterministic() {
    let classes = vec![
        class("A", &[Day::Monday], "09:00", "10:30"),
        class("B", &[Day::Monday], "09:00", "10:30"),
        class("C", &[Day::Monday], "10:00", "11:00"),
    ];

    let first = auto_arrange_classes(&classes);
    let second = auto_arrange_classes(&classes);
    assert_eq!(first.arranged, second.arranged);
    assert_eq!(first.conflicts, second.conflicts);
}
