use std::error::Error;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use crate::route::Route;
use crate::task::Task;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub(crate) fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path)?;
    file.write_all(text.as_ref())?;
    Ok(())
}

/// Writes the route in matrix format to `<dir>/<first state>2<last state>.txt`.
///
/// Failing to write doesn't matter to anybody, it's logged and `None` is returned.
pub fn save_route<P: AsRef<Path>>(dir: P, route: &Route) -> Option<PathBuf> {
    let task = Task::new(route.first().clone(), route.last().clone());
    let path = dir.as_ref().join(task.file_name());

    let res = fs::create_dir_all(dir.as_ref())
        .map_err(Into::into)
        .and_then(|_| write_file(&path, &route.matrix().to_string()));
    match res {
        Ok(()) => {
            info!("Saved route to {}", path.display());
            Some(path)
        }
        Err(err) => {
            warn!("Can't save route to {}: {}", path.display(), err);
            None
        }
    }
}
