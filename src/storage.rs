use crate::model::{ClassItem, Timetable};
use anyhow::Context;
use chrono::Utc;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge l'emploi du temps depuis un support. Un blob absent ou
    /// illisible vaut "pas de données" : emploi du temps vide, sans
    /// horodatage.
    fn load(&self) -> anyhow::Result<Timetable>;
    /// Sauvegarde les cours de manière atomique, en horodatant le blob.
    fn save(&self, classes: &[ClassItem]) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Timetable> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Timetable::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        Ok(serde_json::from_slice(&data).unwrap_or_default())
    }

    fn save(&self, classes: &[ClassItem]) -> anyhow::Result<()> {
        let timetable = Timetable {
            classes: classes.to_vec(),
            last_updated: Some(Utc::now()),
        };
        let json = serde_json::to_vec_pretty(&timetable)?;
        let mut tmp =
            NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
                .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
