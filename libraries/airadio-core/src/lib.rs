//! AI-Radio Core
//!
//! Platform-agnostic domain types, the song catalog and the playlist store.
//!
//! This crate provides the building blocks consumed by `airadio-playback` and by
//! whatever UI or driver sits on top of it.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `SongId`, `PlaylistId`, `ShareInfo`
//! - **Catalog**: the immutable, ordered song list loaded once at startup
//! - **Playlist Store**: user collections plus the undeletable Favorites playlist
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use airadio_core::{Catalog, PlaylistStore, Song};
//!
//! let catalog = Catalog::new(vec![
//!     Song::new("1", "Let It Foam", "DJ FoamBot", "Parody/Pop", 200, "/music/let-it-foam.mp3"),
//! ])
//! .unwrap();
//!
//! let mut store = PlaylistStore::new();
//! let song = catalog.get(&"1".into()).unwrap().clone();
//! store.add_to_favorites(song);
//! assert!(store.is_favorite(&"1".into()));
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod playlists;
pub mod types;

// Re-export commonly used types
pub use catalog::{format_duration, Catalog, ALL_GENRES};
pub use error::{CoreError, Result};
pub use playlists::PlaylistStore;
pub use types::{Playlist, PlaylistId, ShareInfo, Song, SongId, FAVORITES_ID};
