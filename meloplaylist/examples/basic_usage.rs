//! Exemple d'utilisation basique de meloplaylist
//!
//! Pour exécuter cet exemple :
//! ```bash
//! cargo run -p meloplaylist --example basic_usage
//! ```

use melocatalog::{CatalogManager, SongPayload};
use meloplaylist::{PlaylistManager, PlaylistPayload};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Exemple meloplaylist ===\n");

    // 1. Ouvrir le service sur un répertoire temporaire
    println!("1. Ouverture du catalogue et du gestionnaire de playlists...");
    let data_dir = tempfile::tempdir()?;
    let catalog = Arc::new(CatalogManager::open(&data_dir.path().join("catalog.db"))?);
    let manager = PlaylistManager::open(&data_dir.path().join("playlists.db"), catalog.clone())?;
    println!("   ✓ Service prêt\n");

    // 2. Uploader quelques morceaux
    println!("2. Upload de 3 morceaux...");
    let songs = vec![
        SongPayload {
            title: "Bohemian Rhapsody".into(),
            file_name: "queen/bohemian.flac".into(),
            mime_type: "audio/flac".into(),
            genre: "Rock".into(),
            release_date: "1975-10-31".into(),
            singers: vec!["Queen".into()],
            duration: 354,
        },
        SongPayload {
            title: "Stairway to Heaven".into(),
            file_name: "zeppelin/stairway.mp3".into(),
            mime_type: "audio/mpeg".into(),
            genre: "Rock".into(),
            release_date: "1971-11-08".into(),
            singers: vec!["Led Zeppelin".into()],
            duration: 482,
        },
        SongPayload {
            title: "Hotel California".into(),
            file_name: "eagles/hotel.flac".into(),
            mime_type: "audio/flac".into(),
            genre: "Rock".into(),
            release_date: "1976-12-08".into(),
            singers: vec!["Eagles".into()],
            duration: 391,
        },
    ];

    let mut song_ids = Vec::new();
    for payload in songs {
        let song = catalog.upload_song(payload).await?;
        println!("   ✓ Ajouté: {} ({}s)", song.title, song.duration);
        song_ids.push(song.id);
    }
    println!();

    // 3. Créer une playlist (l'appelant devient admin)
    println!("3. Création d'une playlist...");
    let playlist = manager
        .create_playlist(
            PlaylistPayload {
                name: "Classic Rock".into(),
                description: "Les incontournables".into(),
            },
            "alice",
        )
        .await?;
    println!("   ✓ Playlist créée: {}", playlist.name);
    println!("   ✓ ID: {}", playlist.id);
    println!("   ✓ Admin: {}\n", playlist.admin);

    // 4. Ajouter les morceaux (avec un doublon et un inconnu, ignorés)
    println!("4. Ajout des morceaux (doublon et identifiant inconnu ignorés)...");
    let mut candidates = song_ids.clone();
    candidates.push(song_ids[0].clone());
    candidates.push("no-such-song".to_string());

    let playlist = manager.add_songs(&playlist.id, &candidates, "alice").await?;
    println!("   ✓ Morceaux dans la playlist: {}", playlist.songs.len());
    println!("   ✓ Durée totale: {}s\n", playlist.total_duration);

    // 5. Tenter une mutation avec une autre identité
    println!("5. Tentative de mutation par un non-admin...");
    match manager.delete_playlist(&playlist.id, "mallory").await {
        Err(e) => println!("   ✓ Refusé: {}\n", e),
        Ok(_) => println!("   ✗ Aurait dû être refusé !\n"),
    }

    // 6. Retirer un morceau
    println!("6. Retrait du premier morceau...");
    let playlist = manager
        .delete_song(&playlist.id, &song_ids[0], "alice")
        .await?;
    println!("   ✓ Morceaux restants: {}", playlist.songs.len());
    println!("   ✓ Durée totale: {}s\n", playlist.total_duration);

    // 7. Mettre à jour nom et description
    println!("7. Mise à jour de la playlist...");
    let playlist = manager
        .update_playlist(
            &playlist.id,
            PlaylistPayload {
                name: "Classic Rock - Revisité".into(),
                description: "Sélection resserrée".into(),
            },
            "alice",
        )
        .await?;
    println!("   ✓ Nouveau nom: {}", playlist.name);
    println!("   ✓ updated_at: {:?}\n", playlist.updated_at);

    // 8. Supprimer la playlist
    println!("8. Suppression de la playlist...");
    let deleted = manager.delete_playlist(&playlist.id, "alice").await?;
    println!("   ✓ Supprimée: {}", deleted.name);

    println!("\n=== Exemple terminé ===");
    Ok(())
}
