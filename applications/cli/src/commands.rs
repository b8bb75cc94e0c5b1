//! Command implementations
//!
//! Each command writes its report to `out` so it can be captured in tests.
use crate::bridge::SimulatedBridge;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use airadio_core::{format_duration, Catalog, PlaylistStore, Song, SongId};
use airadio_playback::{BridgeEvent, PlaybackSession, RadioConfig, RadioScheduler, SessionConfig};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Sample catalog shipped with the binary
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Upper bound on simulated tracks when a playlist run has no natural end
const MAX_PLAYLIST_TRACKS: usize = 1_000;

/// Load the configured catalog, or the bundled one
pub fn load_catalog(config: &AppConfig) -> Result<Arc<Catalog>> {
    let catalog = match config.catalog_path {
        Some(ref path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_json_file(path)?
        }
        None => Catalog::from_json_str(BUNDLED_CATALOG)?,
    };
    info!("Catalog loaded: {} songs", catalog.len());
    Ok(Arc::new(catalog))
}

fn song_line(song: &Song) -> String {
    format!(
        "{:>4}  {} - {} [{}] {} ({} plays)",
        song.id,
        song.artist,
        song.title,
        song.genre,
        format_duration(u64::from(song.duration_secs)),
        song.plays
    )
}

/// Print the catalog, optionally filtered by genre or ranked by plays
pub fn list_catalog(
    out: &mut impl Write,
    catalog: &Catalog,
    genre: Option<&str>,
    trending: Option<usize>,
) -> Result<()> {
    let songs: Vec<&Song> = match (trending, genre) {
        (Some(limit), _) => catalog.trending(limit),
        (None, Some(genre)) => catalog.by_genre(genre),
        (None, None) => catalog.iter().collect(),
    };

    for song in &songs {
        writeln!(out, "{}", song_line(song))?;
    }
    writeln!(out, "{} songs", songs.len())?;
    Ok(())
}

/// Print the distinct genres in catalog order
pub fn list_genres(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    for genre in catalog.genres() {
        writeln!(out, "{}", genre)?;
    }
    Ok(())
}

/// Print one song with its share payload
pub fn show_song(out: &mut impl Write, catalog: &Catalog, id: &str) -> Result<()> {
    let song = catalog
        .get(&SongId::from(id))
        .ok_or_else(|| CliError::SongNotFound(id.to_string()))?;

    writeln!(out, "{}", song_line(song))?;
    writeln!(out, "source: {}", song.src)?;
    writeln!(out, "share:  {}", serde_json::to_string(&song.share_info())?)?;
    Ok(())
}

/// Build one radio pass and print it, marking ad slots
pub fn print_schedule(
    out: &mut impl Write,
    catalog: Arc<Catalog>,
    config: &RadioConfig,
) -> Result<Vec<SongId>> {
    let mut radio = RadioScheduler::new(catalog, config);
    radio.build();

    for (position, song) in radio.sequence().iter().enumerate() {
        let marker = if radio.is_ad_slot(&song.id) { "AD" } else { "  " };
        writeln!(out, "{:>3} {} {}", position + 1, marker, song_line(song))?;
    }

    Ok(radio.sequence().iter().map(|s| s.id.clone()).collect())
}

/// Let the current song play to its end through simulated bridge events
fn play_through(session: &mut PlaybackSession) {
    if let Some(duration) = session.current_song().map(Song::duration) {
        session.handle_bridge_event(BridgeEvent::TimeAdvanced(duration / 2));
        session.handle_bridge_event(BridgeEvent::TimeAdvanced(duration));
    }
    session.handle_bridge_event(BridgeEvent::Ended);

    for event in session.drain_events() {
        debug!("Session event: {:?}", event);
    }
}

fn report_current(out: &mut impl Write, session: &PlaybackSession, index: usize) -> Result<()> {
    if let Some(song) = session.current_song() {
        let marker = if session.radio().is_ad_slot(&song.id) { "AD" } else { "  " };
        writeln!(out, "{:>3} {} {}", index, marker, song_line(song))?;
    }
    Ok(())
}

/// Run a radio session over simulated audio for `tracks` songs
///
/// Returns the ids of the songs played, in order.
pub fn run_radio(
    out: &mut impl Write,
    catalog: Arc<Catalog>,
    config: SessionConfig,
    tracks: usize,
) -> Result<Vec<SongId>> {
    let mut session = PlaybackSession::new(catalog, Box::new(SimulatedBridge::new()), config)?;
    session.start();
    session.start_radio();

    let mut played = Vec::with_capacity(tracks);
    for index in 1..=tracks {
        let Some(song) = session.current_song() else {
            break;
        };
        played.push(song.id.clone());
        report_current(out, &session, index)?;
        play_through(&mut session);
    }

    info!("Radio session finished after {} tracks", played.len());
    Ok(played)
}

/// Build a playlist from song ids, play it to the end, and optionally like every song
pub fn run_playlist(
    out: &mut impl Write,
    catalog: Arc<Catalog>,
    config: SessionConfig,
    name: &str,
    song_ids: &[String],
    favorite: bool,
) -> Result<Vec<SongId>> {
    let mut store = PlaylistStore::new();
    let playlist_id = store.create(name);

    for id in song_ids {
        let song = catalog
            .get(&SongId::from(id.as_str()))
            .ok_or_else(|| CliError::SongNotFound(id.clone()))?
            .clone();
        if favorite {
            store.add_to_favorites(song.clone());
        }
        store.add_song(&playlist_id, song);
    }

    let playlist = store
        .get(&playlist_id)
        .ok_or_else(|| CliError::Config(format!("playlist {} vanished", playlist_id)))?;
    writeln!(
        out,
        "{} ({} songs, {})",
        playlist.name,
        playlist.len(),
        format_duration(playlist.total_duration_secs())
    )?;

    let mut session = PlaybackSession::new(catalog, Box::new(SimulatedBridge::new()), config)?;
    session.play_playlist(playlist);

    let mut played = Vec::new();
    while session.is_playing() && played.len() < MAX_PLAYLIST_TRACKS {
        let Some(song) = session.current_song() else {
            break;
        };
        played.push(song.id.clone());
        report_current(out, &session, played.len())?;
        play_through(&mut session);
    }

    if favorite {
        writeln!(out, "Favorites: {} songs", store.favorites().len())?;
    }
    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> Arc<Catalog> {
        load_catalog(&AppConfig::default()).unwrap()
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = bundled();
        assert_eq!(catalog.len(), 28);
        assert_eq!(catalog.trending(1)[0].id.as_str(), "8");
    }

    #[test]
    fn show_song_prints_share_payload() {
        let mut out = Vec::new();
        show_song(&mut out, &bundled(), "24").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Seal It Up"));
        assert!(text.contains(r#""id":"24""#));
    }

    #[test]
    fn show_unknown_song_fails() {
        let mut out = Vec::new();
        let err = show_song(&mut out, &bundled(), "404").unwrap_err();
        assert!(matches!(err, CliError::SongNotFound(_)));
    }

    #[test]
    fn genre_filter_lists_matching_songs() {
        let mut out = Vec::new();
        list_catalog(&mut out, &bundled(), Some("Country"), None).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Spray Foam Cowboy v1"));
        assert!(text.ends_with("2 songs\n"));
    }
}
