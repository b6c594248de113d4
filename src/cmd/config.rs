use std::path::Path;

use anyhow::Result;

use tablescrape::config::{config_path, Config};

pub fn cmd_config(path: Option<&Path>, only_path: bool) -> Result<()> {
    if only_path {
        match path {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", config_path().display()),
        }
        return Ok(());
    }

    let config = Config::load(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
