//! Manual play queue
//!
//! User-populated FIFO consumed ahead of radio scheduling:
//!
//! ```text
//! Currently Playing: Song A
//! ─────────────────────────────
//! Manual Queue (plays next, in order):
//!   - Song B (user added)
//!   - Song C (user added)
//! ─────────────────────────────
//! Radio (only when the queue is empty and radio mode is on)
//! ```

use airadio_core::{Song, SongId};

/// FIFO of songs queued by the user
#[derive(Debug, Clone, Default)]
pub struct ManualQueue {
    songs: Vec<Song>,
}

impl ManualQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    /// Append to the back
    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Take the head
    pub fn pop_front(&mut self) -> Option<Song> {
        if self.songs.is_empty() {
            None
        } else {
            Some(self.songs.remove(0))
        }
    }

    /// Remove every entry with this song id
    ///
    /// Returns the number of entries removed.
    pub fn remove(&mut self, song_id: &SongId) -> usize {
        let before = self.songs.len();
        self.songs.retain(|s| &s.id != song_id);
        before - self.songs.len()
    }

    /// Replace the whole queue (playlist playback)
    pub fn replace(&mut self, songs: Vec<Song>) {
        self.songs = songs;
    }

    pub fn clear(&mut self) {
        self.songs.clear();
    }

    /// Queued songs in play order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> Song {
        Song::new(id, format!("Song {}", id), "DJ FoamBot", "Country", 165, format!("/{}.mp3", id))
    }

    #[test]
    fn fifo_order() {
        let mut queue = ManualQueue::new();
        queue.push(song("1"));
        queue.push(song("2"));
        queue.push(song("3"));

        assert_eq!(queue.pop_front().unwrap().id.as_str(), "1");
        assert_eq!(queue.pop_front().unwrap().id.as_str(), "2");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn pop_empty_queue() {
        let mut queue = ManualQueue::new();
        assert!(queue.pop_front().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn remove_by_id_drops_all_copies() {
        let mut queue = ManualQueue::new();
        queue.push(song("1"));
        queue.push(song("2"));
        queue.push(song("1"));

        assert_eq!(queue.remove(&SongId::new("1")), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.remove(&SongId::new("9")), 0);
    }

    #[test]
    fn replace_and_clear() {
        let mut queue = ManualQueue::new();
        queue.push(song("1"));
        queue.replace(vec![song("5"), song("6")]);

        let ids: Vec<&str> = queue.songs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);

        queue.clear();
        assert!(queue.is_empty());
    }
}
