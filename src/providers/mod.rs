pub mod ytmusic;

pub use ytmusic::{CatalogProvider, ProviderError, YtMusicClient};
