//! Catalog loading tests
//!
//! Covers the JSON catalog source and the lookups the page layer relies on.

use airadio_core::{Catalog, CoreError, SongId};
use std::io::Write;

const SAMPLE: &str = r#"[
  {"id":"1","title":"Call Me Mrs. Sprayfoam","artist":"DJ FoamBot Productions","genre":"Jingle/Commercial","duration":170,"plays":12450,"src":"/music/Call-Me-Mrs.Sprayfoam.mp3"},
  {"id":"2","title":"Let It Foam","artist":"DJ FoamBot Productions feat. Mrs. SprayFoam","genre":"Parody/Pop","duration":200,"plays":15670,"src":"/music/Let-It-Foam.mp3"},
  {"id":"8","title":"Polyurethane Gang","artist":"DJ FoamBot Productions","genre":"Hip-Hop","duration":67,"plays":18900,"src":"/music/Polyurethane-Gang.mp3"}
]"#;

#[test]
fn test_load_from_json_string_keeps_order() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();

    let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "8"]);
    assert_eq!(catalog.get(&SongId::new("8")).unwrap().plays, 18900);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let catalog = Catalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::from_json_file(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let result = Catalog::from_json_str("[{\"id\": 1}]");
    assert!(matches!(result, Err(CoreError::Serialization(_))));
}

#[test]
fn test_duplicate_ids_in_json_rejected() {
    let json = r#"[
      {"id":"1","title":"A","artist":"X","genre":"G","duration":10,"src":"/a.mp3"},
      {"id":"1","title":"B","artist":"X","genre":"G","duration":10,"src":"/b.mp3"}
    ]"#;
    assert!(matches!(
        Catalog::from_json_str(json),
        Err(CoreError::DuplicateSong(_))
    ));
}

#[test]
fn test_trending_top_two() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();
    let top: Vec<&str> = catalog.trending(2).iter().map(|s| s.title.as_str()).collect();
    assert_eq!(top, vec!["Polyurethane Gang", "Let It Foam"]);
}
