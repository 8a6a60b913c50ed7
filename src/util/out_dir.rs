use errors::{Result, ResultExt};
use json::JsonValue;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

/// Directory that output JSON files go in. It is created the first time a
/// file is written, so a run that produces nothing leaves nothing behind.
///
/// Files already in the directory are never overwritten.
pub struct OutDir {
    path: PathBuf,
    created: bool,
}

impl OutDir {
    pub fn new<P: AsRef<Path>>(path: P) -> OutDir {
        OutDir { path: path.as_ref().to_path_buf(), created: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stems of the `.json` files already in the directory. Empty if the
    /// directory doesn't exist yet.
    pub fn existing_stems(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(ref e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => Err(e)?,
        };
        let mut stems = vec![];
        for entry in entries {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    stems.push(stem.to_string());
                }
            }
        }
        Ok(stems)
    }

    fn ensure_created(&mut self) -> Result<()> {
        if !self.created {
            match fs::create_dir_all(&self.path) {
                Ok(()) => (),
                Err(ref e) if e.kind() == ErrorKind::AlreadyExists => (),
                Err(e) => Err(e)?,
            }
            self.created = true;
        }
        Ok(())
    }

    /// Writes `value`, pretty-printed, to `<stem>.json`. Returns the path
    /// written.
    ///
    /// Fails if `stem` isn't a plain file name or the file already exists.
    pub fn write_json(&mut self, stem: &str, value: &JsonValue) -> Result<PathBuf> {
        check_stem(stem)?;
        self.ensure_created()?;
        let path = self.path.join(format!("{}.json", stem));
        let mut f = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .chain_err(|| format!("couldn't create {}", path.display()))?;
        f.write_all(value.pretty(2).as_bytes())?;
        f.write_all(b"\n")?;
        Ok(path)
    }
}

/// A stem must name a file directly inside the directory.
fn check_stem(stem: &str) -> Result<()> {
    if stem.contains('/') || stem.contains('\\') {
        bail!("can't use {:?} as a file name: contains a path separator", stem);
    }
    let mut components = Path::new(stem).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("can't use {:?} as a file name", stem),
    }
}
