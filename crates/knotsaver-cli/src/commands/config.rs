use std::path::Path;

use anyhow::Result;

use knotsaver_core::AppConfig;

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default config to `path` unless a file is already there.
/// Returns whether a file was written.
pub fn write_default(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    AppConfig::default().save_to(path)?;
    Ok(true)
}

pub fn init(path: &Path) -> Result<()> {
    if write_default(path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_to_given_path_once() {
        let dir = std::env::temp_dir().join(format!("knotsaver-init-{}", std::process::id()));
        let path = dir.join("my.toml");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(write_default(&path).unwrap());
        assert_eq!(AppConfig::load_from(&path).unwrap().animation.steps, 35);

        std::fs::write(&path, "[animation]\nsteps = 7\n").unwrap();
        assert!(!write_default(&path).unwrap());
        assert_eq!(AppConfig::load_from(&path).unwrap().animation.steps, 7);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
