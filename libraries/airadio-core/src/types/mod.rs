mod ids;
mod playlist;
mod song;

pub use ids::{PlaylistId, SongId, FAVORITES_ID};
pub use playlist::Playlist;
pub use song::{ShareInfo, Song};
