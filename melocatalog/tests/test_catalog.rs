use melocatalog::{CatalogManager, Error, SongPayload};
use tempfile::TempDir;

/// Crée un catalogue temporaire pour les tests
fn create_test_catalog() -> (TempDir, CatalogManager) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("catalog.db");
    let catalog = CatalogManager::open(&db_path).unwrap();
    (temp_dir, catalog)
}

fn payload(title: &str, file_name: &str) -> SongPayload {
    SongPayload {
        title: title.to_string(),
        file_name: file_name.to_string(),
        mime_type: "audio/flac".to_string(),
        genre: "Rock".to_string(),
        release_date: "1975-10-31".to_string(),
        singers: vec!["Queen".to_string()],
        duration: 354,
    }
}

#[tokio::test]
async fn test_upload_and_get() {
    let (_temp_dir, catalog) = create_test_catalog();

    let song = catalog
        .upload_song(payload("Bohemian Rhapsody", "queen/bohemian.flac"))
        .await
        .unwrap();

    assert!(!song.id.is_empty());
    assert_eq!(song.title, "Bohemian Rhapsody");
    assert_eq!(song.singers, vec!["Queen".to_string()]);
    assert_eq!(song.duration, 354);

    // Le morceau retourné est identique à celui relu par id
    let fetched = catalog.get_song(&song.id).await.unwrap();
    assert_eq!(fetched, song);
}

#[tokio::test]
async fn test_upload_trims_fields() {
    let (_temp_dir, catalog) = create_test_catalog();

    let song = catalog
        .upload_song(payload("  Hotel California  ", "  eagles/hotel.flac  "))
        .await
        .unwrap();

    assert_eq!(song.title, "Hotel California");
    assert_eq!(song.file_name, "eagles/hotel.flac");
}

#[tokio::test]
async fn test_validation_order() {
    let (_temp_dir, catalog) = create_test_catalog();

    // Tous les champs vides : file_name est signalé en premier
    let mut p = payload("", "");
    p.mime_type = "   ".to_string();
    p.singers = vec![];
    let err = catalog.upload_song(p).await.unwrap_err();
    assert!(matches!(err, Error::EmptyField("file_name")));

    // file_name présent : mime_type est signalé
    let mut p = payload("", "a.flac");
    p.mime_type = "".to_string();
    p.singers = vec![];
    let err = catalog.upload_song(p).await.unwrap_err();
    assert!(matches!(err, Error::EmptyField("mime_type")));

    // mime_type présent : title est signalé
    let mut p = payload("  ", "a.flac");
    p.singers = vec![];
    let err = catalog.upload_song(p).await.unwrap_err();
    assert!(matches!(err, Error::EmptyField("title")));

    // Champs textuels présents : singers est signalé
    let mut p = payload("A Song", "a.flac");
    p.singers = vec![];
    let err = catalog.upload_song(p).await.unwrap_err();
    assert!(matches!(err, Error::EmptyField("singers")));
}

#[tokio::test]
async fn test_duplicate_file_name_and_title() {
    let (_temp_dir, catalog) = create_test_catalog();

    let first = catalog
        .upload_song(payload("Bohemian Rhapsody", "queen/bohemian.flac"))
        .await
        .unwrap();

    // Même couple (file_name, title) : rejeté
    let err = catalog
        .upload_song(payload("Bohemian Rhapsody", "queen/bohemian.flac"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SongAlreadyExists { .. }));

    // Le premier morceau est toujours là, inchangé
    let fetched = catalog.get_song(&first.id).await.unwrap();
    assert_eq!(fetched, first);
    assert_eq!(catalog.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_same_title_different_file_is_allowed() {
    let (_temp_dir, catalog) = create_test_catalog();

    catalog
        .upload_song(payload("Bohemian Rhapsody", "queen/bohemian.flac"))
        .await
        .unwrap();

    // Même titre mais file_name différent : accepté
    let result = catalog
        .upload_song(payload("Bohemian Rhapsody", "covers/bohemian.mp3"))
        .await;
    assert!(result.is_ok());
    assert_eq!(catalog.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_get_song_blank_id() {
    let (_temp_dir, catalog) = create_test_catalog();

    let err = catalog.get_song("   ").await.unwrap_err();
    assert!(matches!(err, Error::EmptyField("id")));
}

#[tokio::test]
async fn test_get_song_missing() {
    let (_temp_dir, catalog) = create_test_catalog();

    let err = catalog.get_song("no-such-id").await.unwrap_err();
    assert!(matches!(err, Error::SongNotFound(_)));
}

#[tokio::test]
async fn test_get_songs() {
    let (_temp_dir, catalog) = create_test_catalog();

    assert!(catalog.get_songs().await.unwrap().is_empty());

    let a = catalog
        .upload_song(payload("Song A", "a.flac"))
        .await
        .unwrap();
    let b = catalog
        .upload_song(payload("Song B", "b.flac"))
        .await
        .unwrap();

    let songs = catalog.get_songs().await.unwrap();
    assert_eq!(songs.len(), 2);
    assert!(songs.contains(&a));
    assert!(songs.contains(&b));
}

#[tokio::test]
async fn test_find_song() {
    let (_temp_dir, catalog) = create_test_catalog();

    let song = catalog
        .upload_song(payload("Song A", "a.flac"))
        .await
        .unwrap();

    assert_eq!(
        catalog.find_song(&song.id).await.unwrap(),
        Some(song.clone())
    );
    assert_eq!(catalog.find_song("no-such-id").await.unwrap(), None);
}
