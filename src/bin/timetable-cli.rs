#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use timetable::{
    io,
    model::{class_color, ClassId, ClassItem, Day, TimetableError},
    scheduler::{auto_arrange_classes, classes_for_day, find_conflicts, sort_by_start},
    storage::{JsonStorage, Storage},
    timefmt::{format_relative_time, format_time, grid_time_slots},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'emploi du temps hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'emploi du temps
    #[arg(long, global = true, default_value = "timetable.json")]
    file: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un cours
    Add {
        #[arg(long)]
        name: String,
        /// liste "Monday,Wednesday,..."
        #[arg(long)]
        days: String,
        /// "HH:MM" 24h
        #[arg(long)]
        start: String,
        /// "HH:MM" 24h, après `start`
        #[arg(long)]
        end: String,
        #[arg(long)]
        location: Option<String>,
    },

    /// Supprimer un cours par id
    Remove {
        #[arg(long)]
        id: String,
    },

    /// Importer des cours depuis un CSV
    ImportClasses {
        #[arg(long)]
        csv: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher la grille hebdomadaire 6 AM – 10 PM
    Grid,

    /// Vérifier les conflits
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Réarranger automatiquement les cours pour éliminer les conflits
    Arrange,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.file)?;
    let mut timetable = storage.load()?;

    let code = match cli.cmd {
        Commands::Add {
            name,
            days,
            start,
            end,
            location,
        } => {
            let days = parse_day_list(&days)?;
            let mut class = ClassItem::new(name, days, &start, &end, location)?;
            class.color = Some(class_color(timetable.classes.len()).to_string());
            println!("Added \"{}\" ({})", class.name, class.id.as_str());
            timetable.classes.push(class);
            storage.save(&timetable.classes)?;
            0
        }
        Commands::Remove { id } => {
            let id = ClassId::new(&id);
            if !timetable.remove_class(&id) {
                return Err(TimetableError::UnknownClass(id.as_str().to_string()).into());
            }
            storage.save(&timetable.classes)?;
            0
        }
        Commands::ImportClasses { csv } => {
            let imported = io::import_classes_csv(csv)?;
            let offset = timetable.classes.len();
            for (i, mut class) in imported.into_iter().enumerate() {
                class.color = Some(class_color(offset + i).to_string());
                timetable.classes.push(class);
            }
            storage.save(&timetable.classes)?;
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_timetable_json(path, &timetable)?;
            }
            if let Some(path) = out_csv {
                io::export_classes_csv(path, &timetable.classes)?;
            }
            // impression compacte
            for c in &timetable.classes {
                let days = c
                    .days
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                println!(
                    "{} | {} | {} | {} → {} | {}",
                    c.id.as_str(),
                    c.name,
                    days,
                    c.start_time,
                    c.end_time,
                    c.location.as_deref().unwrap_or("-")
                );
            }
            if let Some(ts) = timetable.last_updated {
                println!("last saved {}", format_relative_time(ts, Utc::now()));
            }
            0
        }
        Commands::Grid => {
            print_grid(&timetable.classes);
            0
        }
        Commands::Check { report } => {
            let conflicts = find_conflicts(&timetable.classes);
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                for c in &conflicts {
                    eprintln!(
                        "  {} × {} on {} ({}–{} / {}–{})",
                        c.class1.name,
                        c.class2.name,
                        c.day,
                        c.class1.start_time,
                        c.class1.end_time,
                        c.class2.start_time,
                        c.class2.end_time
                    );
                }
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record([
                        "class1", "class2", "day", "start1", "end1", "start2", "end2",
                    ])?;
                    for c in &conflicts {
                        w.write_record([
                            c.class1.name.as_str(),
                            c.class2.name.as_str(),
                            c.day.as_str(),
                            c.class1.start_time.as_str(),
                            c.class1.end_time.as_str(),
                            c.class2.start_time.as_str(),
                            c.class2.end_time.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Arrange => {
            let arrangement = auto_arrange_classes(&timetable.classes);

            if !find_conflicts(&arrangement.arranged).is_empty() {
                // Repli défensif du moteur : rien n'a changé.
                eprintln!("auto-arrange could not produce a conflict-free schedule; keeping the original");
                return Ok(());
            }

            let mut arranged = arrangement.arranged;
            for (i, class) in arranged.iter_mut().enumerate() {
                class.color = Some(class_color(i).to_string());
            }
            for class in &arranged {
                if let Some(original) = timetable.find_class(&class.id) {
                    if original.start_time != class.start_time {
                        println!(
                            "moved \"{}\": {}–{} → {}–{}",
                            class.name,
                            original.start_time,
                            original.end_time,
                            class.start_time,
                            class.end_time
                        );
                    }
                }
            }
            storage.save(&arranged)?;

            if arrangement.conflicts.is_empty() {
                println!("Schedule optimized: {} class(es), no conflicts", arranged.len());
                0
            } else {
                eprintln!(
                    "{} class(es) could not fit in the 06:00–22:00 window and were dropped:",
                    arrangement.conflicts.len()
                );
                for class in &arrangement.conflicts {
                    eprintln!("  {} ({}–{})", class.name, class.start_time, class.end_time);
                }
                2
            }
        }
    };

    std::process::exit(code);
}

fn parse_day_list(raw: &str) -> Result<Vec<Day>> {
    let days = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Day>, _>>()?;
    Ok(days)
}

/// Grille texte : une colonne par jour, une ligne par heure de 6 AM à 10 PM.
fn print_grid(classes: &[ClassItem]) {
    print!("{:>8} ", "");
    for day in Day::ALL {
        print!("| {:<10.10} ", day.as_str());
    }
    println!();

    for slot in grid_time_slots() {
        let slot_start = (slot.hour * 60) as i32;
        let slot_end = slot_start + 60;
        print!("{:>8} ", slot.label);
        for day in Day::ALL {
            let cell = classes
                .iter()
                .find(|c| {
                    c.recurs_on(day) && c.start_minutes() < slot_end && c.end_minutes() > slot_start
                })
                .map(|c| c.name.as_str())
                .unwrap_or("");
            print!("| {:<10.10} ", cell);
        }
        println!();
    }

    for day in Day::ALL {
        let today = sort_by_start(&classes_for_day(classes, day));
        if today.is_empty() {
            continue;
        }
        println!("{day}:");
        for c in &today {
            println!(
                "  {} – {}  {}{}",
                format_time(&c.start_time),
                format_time(&c.end_time),
                c.name,
                c.location
                    .as_deref()
                    .map(|l| format!(" ({l})"))
                    .unwrap_or_default()
            );
        }
    }
}
