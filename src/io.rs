use crate::model::{ClassItem, Day, Timetable};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de cours depuis CSV : header `name,days,start,end[,location]`,
/// `days` en liste de noms séparés par `;`.
pub fn import_classes_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ClassItem>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let days_raw = rec.get(1).context("missing days")?.trim();
        let start = rec.get(2).context("missing start")?.trim();
        let end = rec.get(3).context("missing end")?.trim();
        if name.is_empty() {
            bail!("invalid class row (empty name)");
        }
        let days = parse_days(days_raw)
            .with_context(|| format!("invalid days value for class {name}"))?;
        let location = rec
            .get(4)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let class = ClassItem::new(name, days, start, end, location)
            .with_context(|| format!("invalid class row for {name}"))?;
        out.push(class);
    }
    Ok(out)
}

fn parse_days(raw: &str) -> anyhow::Result<Vec<Day>> {
    let days = raw
        .split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Day>, _>>()?;
    Ok(days)
}

/// Export JSON de l'emploi du temps (jolie mise en forme)
pub fn export_timetable_json<P: AsRef<Path>>(path: P, timetable: &Timetable) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(timetable)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des cours : header `id,name,days,start,end,location`
pub fn export_classes_csv<P: AsRef<Path>>(path: P, classes: &[ClassItem]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "name", "days", "start", "end", "location"])?;
    for c in classes {
        let days = c
            .days
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(";");
        w.write_record([
            c.id.as_str(),
            c.name.as_str(),
            days.as_str(),
            c.start_time.as_str(),
            c.end_time.as_str(),
            c.location.as_deref().unwrap_or(""),
        ])?;
    }
    w.flush()?;
    Ok(())
}
