use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~` component are returned unchanged.
pub fn expand_home<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| Error::HomeDirError {
                path: path.display().to_string(),
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Reads a recipe file to a string, mapping a missing file to a
/// recipe-not-found error.
pub fn read_file<P: AsRef<Path>>(source_path: P) -> Result<String> {
    let source_path = source_path.as_ref();
    std::fs::read_to_string(source_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::RecipeNotFoundError { path: source_path.display().to_string() }
        } else {
            Error::IoError(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_tilde_prefix_to_home() {
        let home = dirs::home_dir().expect("home dir available in test env");
        assert_eq!(expand_home("~/recipes").unwrap(), home.join("recipes"));
        assert_eq!(expand_home("~").unwrap(), home);
    }

    #[test]
    fn leaves_plain_paths_untouched() {
        assert_eq!(expand_home("/tmp/recipes").unwrap(), PathBuf::from("/tmp/recipes"));
        assert_eq!(expand_home("relative/dir").unwrap(), PathBuf::from("relative/dir"));
        // A tilde that is not its own component is not an expansion request.
        assert_eq!(expand_home("~user/recipes").unwrap(), PathBuf::from("~user/recipes"));
    }

    #[test]
    fn write_file_creates_parent_directories() {
        let root = tempfile::tempdir().unwrap();
        let dest = root.path().join("nested/dir/out.json");
        write_file("{}", &dest).unwrap();
        assert_eq!(std::fs::read_to_string(dest).unwrap(), "{}");
    }

    #[test]
    fn read_file_maps_missing_file_to_not_found() {
        let root = tempfile::tempdir().unwrap();
        let err = read_file(root.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::RecipeNotFoundError { .. }));
    }
}
