use std::collections::HashSet;

/// Existence check for hotel keys, injected into the engine.
///
/// Consulted by Create before the store lock is taken, so a slow
/// implementation can never extend the exclusive section.
pub trait HotelDirectory: Send + Sync {
    fn hotel_exists(&self, key: &str) -> bool;
}

/// Accepts every hotel key. The default when no directory is wired up.
pub struct OpenDirectory;

impl HotelDirectory for OpenDirectory {
    fn hotel_exists(&self, _key: &str) -> bool {
        true
    }
}

/// Accepts only an explicit set of hotel keys.
pub struct FixedDirectory {
    hotels: HashSet<String>,
}

impl FixedDirectory {
    pub fn new<I, S>(hotels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hotels: hotels.into_iter().map(Into::into).collect(),
        }
    }
}

impl HotelDirectory for FixedDirectory {
    fn hotel_exists(&self, key: &str) -> bool {
        self.hotels.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_directory_accepts_anything() {
        let dir = OpenDirectory;
        assert!(dir.hotel_exists("h1"));
        assert!(dir.hotel_exists(""));
    }

    #[test]
    fn fixed_directory_rejects_unknown() {
        let dir = FixedDirectory::new(["h1", "h2"]);
        assert!(dir.hotel_exists("h1"));
        assert!(dir.hotel_exists("h2"));
        assert!(!dir.hotel_exists("h3"));
    }
}
