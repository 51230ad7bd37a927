use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trajcheck::workflows::import::TrajectoryStore;

/// Saves trajectories as files in one directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    directory: PathBuf,
    overwrite: bool,
}

impl DirectoryStore {
    pub fn new(directory: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            directory: directory.into(),
            overwrite,
        }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }
}

impl TrajectoryStore for DirectoryStore {
    type Error = io::Error;

    fn save(&mut self, file_name: &str, content: &str) -> io::Result<()> {
        fs::create_dir_all(&self.directory)?;
        let path = self.path_for(file_name);
        if !self.overwrite && path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists (use --force to overwrite)", path.display()),
            ));
        }

        let partial = self.directory.join(format!(".{file_name}.part"));
        debug!("Writing {} bytes to {:?}", content.len(), &partial);
        if let Err(e) = write_partial(&partial, content) {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
        fs::rename(&partial, &path).inspect_err(|_| {
            let _ = fs::remove_file(&partial);
        })?;

        info!("Saved trajectory to {:?}", &path);
        Ok(())
    }
}

/// The final name only appears once the whole content is on disk.
fn write_partial(partial: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(partial)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
