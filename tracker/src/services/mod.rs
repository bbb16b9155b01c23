//! Service implementations
//!
//! Real implementations of the storage and configuration traits.

pub mod file_config;
pub mod file_store;
pub mod http_config;
pub mod memory_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use file_config::FileConfigSource;
pub use file_store::FileKeyValueStore;
pub use http_config::HttpConfigSource;
pub use memory_store::MemoryKeyValueStore;

use url::Url;

use crate::traits::ConfigSource;

/// Pick a config source for `location`: `http://` and `https://` URLs are
/// fetched over the network, anything else is read as a file path.
pub fn config_source_for(location: &str) -> Box<dyn ConfigSource> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            Box::new(HttpConfigSource::new(url))
        }
        Ok(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => Box::new(FileConfigSource::new(path)),
            Err(()) => Box::new(FileConfigSource::new(location)),
        },
        _ => Box::new(FileConfigSource::new(location)),
    }
}
