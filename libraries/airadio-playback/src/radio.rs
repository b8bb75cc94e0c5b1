//! Radio scheduling
//!
//! Builds an endless radio stream over the catalog: each pass is a fresh
//! Fisher-Yates shuffle of the regular songs with one promotional (ad-slot)
//! song placed after every `ad_interval` regular songs. When a pass runs out
//! the scheduler reshuffles, so radio mode never runs dry on a non-empty
//! catalog.
//!
//! ```text
//! regular: R1 R2 R3 R4 R5 R6 R7     ads: A1 A2 A3
//! pass:    R1 R2 R3 A1 R4 R5 R6 A2 R7 A3
//!                                        ^ unplaced ads trail the pass
//! ```

use crate::types::RadioConfig;
use airadio_core::{Catalog, Song, SongId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Interleave ad-slot songs into a regular sequence
///
/// After every `interval` regular songs the next unused ad is placed; ads left
/// over once the regular songs run out are appended at the end. Each song of
/// both inputs appears exactly once in the output.
pub fn interleave(regular: Vec<Song>, ads: Vec<Song>, interval: usize) -> Vec<Song> {
    let interval = interval.max(1);
    let mut result = Vec::with_capacity(regular.len() + ads.len());
    let mut ads = ads.into_iter();

    for (i, song) in regular.into_iter().enumerate() {
        result.push(song);
        if (i + 1) % interval == 0 {
            if let Some(ad) = ads.next() {
                result.push(ad);
            }
        }
    }

    result.extend(ads);
    result
}

/// Shuffled, self-replenishing radio sequence
#[derive(Debug, Clone)]
pub struct RadioScheduler {
    catalog: Arc<Catalog>,
    ad_slot_ids: HashSet<SongId>,
    ad_interval: usize,

    /// Current pass over the catalog
    sequence: Vec<Song>,

    /// Next position to serve; never exceeds `sequence.len()`
    cursor: usize,

    /// Whether at least one pass has been built
    built: bool,

    rng: StdRng,
}

impl RadioScheduler {
    /// Create a scheduler over the catalog
    ///
    /// Nothing is shuffled until the first `build`, `ensure_built` or `next`.
    pub fn new(catalog: Arc<Catalog>, config: &RadioConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            ad_slot_ids: config.ad_slot_ids.iter().cloned().collect(),
            ad_interval: config.ad_interval.max(1),
            sequence: Vec::new(),
            cursor: 0,
            built: false,
            rng,
        }
    }

    /// Rebuild the pass with a fresh shuffle and rewind the cursor
    ///
    /// Returns the pass length, which always equals the catalog length.
    pub fn build(&mut self) -> usize {
        let (mut regular, mut ads): (Vec<Song>, Vec<Song>) = self
            .catalog
            .iter()
            .cloned()
            .partition(|song| !self.ad_slot_ids.contains(&song.id));

        regular.shuffle(&mut self.rng);
        ads.shuffle(&mut self.rng);

        debug!(
            "Radio pass rebuilt: {} regular songs, {} ad slots",
            regular.len(),
            ads.len()
        );

        self.sequence = interleave(regular, ads, self.ad_interval);
        self.cursor = 0;
        self.built = true;
        self.sequence.len()
    }

    /// Build the first pass if none exists yet
    pub fn ensure_built(&mut self) {
        if !self.built {
            self.build();
        }
    }

    /// Serve the next song, reshuffling first if the pass is exhausted
    ///
    /// Returns `None` only for an empty catalog.
    pub fn next(&mut self) -> Option<Song> {
        if self.cursor >= self.sequence.len() {
            self.build();
        }

        let song = self.sequence.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(song)
    }

    /// Step back to the song before the most recently served one
    ///
    /// Leaves the cursor just past the returned song so `next` continues
    /// forward from there. Returns `None` when fewer than two songs have been
    /// served since the last build; the caller then only restarts the
    /// current song.
    pub fn previous(&mut self) -> Option<Song> {
        if self.cursor < 2 {
            return None;
        }

        self.cursor -= 2;
        let song = self.sequence[self.cursor].clone();
        self.cursor += 1;
        Some(song)
    }

    /// Current pass in play order
    pub fn sequence(&self) -> &[Song] {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Songs left in the current pass
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Whether the song is one of the ad slots
    pub fn is_ad_slot(&self, song_id: &SongId) -> bool {
        self.ad_slot_ids.contains(song_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> Song {
        Song::new(id, format!("Song {}", id), "DJ FoamBot", "Hip-Hop", 120, format!("/{}.mp3", id))
    }

    fn catalog(ids: &[&str]) -> Arc<Catalog> {
        Arc::new(Catalog::new(ids.iter().map(|id| song(id)).collect()).unwrap())
    }

    fn config(ads: &[&str], seed: u64) -> RadioConfig {
        RadioConfig {
            ad_slot_ids: ads.iter().map(|id| SongId::new(*id)).collect(),
            ad_interval: 3,
            seed: Some(seed),
        }
    }

    fn ids(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn interleave_places_ad_after_every_third() {
        let regular: Vec<Song> = ["r1", "r2", "r3", "r4", "r5", "r6", "r7"].iter().map(|id| song(id)).collect();
        let ads: Vec<Song> = ["a1", "a2", "a3"].iter().map(|id| song(id)).collect();

        let result = interleave(regular, ads, 3);
        assert_eq!(
            ids(&result),
            vec!["r1", "r2", "r3", "a1", "r4", "r5", "r6", "a2", "r7", "a3"]
        );
    }

    #[test]
    fn interleave_with_no_ads() {
        let regular: Vec<Song> = ["r1", "r2", "r3", "r4"].iter().map(|id| song(id)).collect();
        let result = interleave(regular, Vec::new(), 3);
        assert_eq!(ids(&result), vec!["r1", "r2", "r3", "r4"]);
    }

    #[test]
    fn interleave_only_ads() {
        let ads: Vec<Song> = ["a1", "a2"].iter().map(|id| song(id)).collect();
        let result = interleave(Vec::new(), ads, 3);
        assert_eq!(ids(&result), vec!["a1", "a2"]);
    }

    #[test]
    fn ad_waits_for_three_regular_songs() {
        // [A,B,C,D] with ad slot {D}: D is always fourth
        for seed in 0..20 {
            let mut radio = RadioScheduler::new(catalog(&["A", "B", "C", "D"]), &config(&["D"], seed));
            radio.build();
            assert_eq!(radio.sequence()[3].id.as_str(), "D");
        }
    }

    #[test]
    fn build_covers_catalog_once() {
        let mut radio = RadioScheduler::new(
            catalog(&["1", "2", "3", "4", "5", "6", "7", "8"]),
            &config(&["7", "8"], 42),
        );

        assert_eq!(radio.build(), 8);
        let unique: HashSet<&str> = ids(radio.sequence()).into_iter().collect();
        assert_eq!(unique.len(), 8);
        assert_eq!(radio.cursor(), 0);
    }

    #[test]
    fn next_reshuffles_at_end_of_pass() {
        let mut radio = RadioScheduler::new(catalog(&["1", "2", "3"]), &config(&[], 1));

        for _ in 0..3 {
            assert!(radio.next().is_some());
        }
        assert_eq!(radio.remaining(), 0);

        // Fourth read starts a new pass
        assert!(radio.next().is_some());
        assert_eq!(radio.cursor(), 1);
        assert_eq!(radio.remaining(), 2);
    }

    #[test]
    fn previous_needs_two_advances() {
        let mut radio = RadioScheduler::new(catalog(&["1", "2", "3", "4"]), &config(&[], 9));

        assert!(radio.previous().is_none());
        let first = radio.next().unwrap();
        assert!(radio.previous().is_none());
        assert_eq!(radio.cursor(), 1);

        let second = radio.next().unwrap();
        let back = radio.previous().unwrap();
        assert_eq!(back, first);
        assert_eq!(radio.cursor(), 1);

        // Forward again replays the song we stepped back from
        assert_eq!(radio.next().unwrap(), second);
    }

    #[test]
    fn previous_after_reshuffle_is_noop() {
        let mut radio = RadioScheduler::new(catalog(&["1", "2"]), &config(&[], 3));
        radio.next();
        radio.next();
        radio.next(); // new pass, cursor = 1

        assert!(radio.previous().is_none());
        assert_eq!(radio.cursor(), 1);
    }

    #[test]
    fn empty_catalog_serves_nothing() {
        let mut radio = RadioScheduler::new(catalog(&[]), &config(&[], 0));
        assert_eq!(radio.build(), 0);
        assert!(radio.next().is_none());
        assert!(radio.previous().is_none());
        assert_eq!(radio.cursor(), 0);
    }

    #[test]
    fn ensure_built_only_builds_once() {
        let mut radio = RadioScheduler::new(catalog(&["1", "2", "3"]), &config(&[], 5));
        assert!(!radio.is_built());

        radio.ensure_built();
        radio.next();
        radio.ensure_built();

        assert!(radio.is_built());
        assert_eq!(radio.cursor(), 1);
    }

    #[test]
    fn unknown_ad_ids_are_ignored() {
        let mut radio = RadioScheduler::new(catalog(&["1", "2", "3"]), &config(&["99"], 5));
        assert_eq!(radio.build(), 3);
    }

    #[test]
    fn same_seed_same_schedule() {
        let songs = catalog(&["1", "2", "3", "4", "5", "6"]);
        let mut a = RadioScheduler::new(songs.clone(), &config(&["6"], 77));
        let mut b = RadioScheduler::new(songs, &config(&["6"], 77));
        a.build();
        b.build();
        assert_eq!(a.sequence(), b.sequence());
    }
}
