use std::{io::ErrorKind, path::PathBuf};

use crate::{prelude::*, prices::Prices};

/// Single-slot persistent store for the most recently scraped [`Prices`].
pub struct Cache {
    path: PathBuf,
}

impl Cache {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the cached prices, if any.
    ///
    /// A missing file is not an error, but an unreadable or unparseable one is.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<Prices>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("failed to read the cache from `{}`", self.path.display())
                });
            }
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse the cache at `{}`", self.path.display()))
            .map(Some)
    }

    /// Write the prices, overwriting any previously cached record.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn save(&self, prices: &Prices) -> Result {
        let contents = serde_json::to_string_pretty(prices)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write the cache to `{}`", self.path.display()))
    }
}
