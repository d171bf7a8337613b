//! Integration tests for tile loading against a scripted tile server.

use gzsatellite::cache::{namespace_directory, DiskCache};
use gzsatellite::coord::TileIndex;
use gzsatellite::loader::{FetchFailure, LoaderError, TileLoader, TileRequestContext};
use gzsatellite::provider::{HttpClient, HttpResponse, ProviderError};
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const TEMPLATE: &str = "http://tiles.example/{z}/{x}/{y}.jpg";

/// Tile server stand-in that serves a tile body for every URL unless told
/// to fail it, and records every request.
#[derive(Default)]
struct ScriptedServer {
    statuses: Mutex<HashMap<String, u16>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedServer {
    fn fail(&self, url: &str, status: u16) {
        self.statuses.lock().unwrap().insert(url.to_string(), status);
    }

    fn heal(&self) {
        self.statuses.lock().unwrap().clear();
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedServer {
    fn get(&self, url: &str) -> Result<HttpResponse, ProviderError> {
        self.requests.lock().unwrap().push(url.to_string());
        let status = self
            .statuses
            .lock()
            .unwrap()
            .get(url)
            .copied()
            .unwrap_or(200);
        Ok(HttpResponse::new(status, format!("jpeg:{}", url).into_bytes()))
    }
}

fn session(
    cache_dir: &TempDir,
    lat: f64,
    lon: f64,
    zoom: u8,
    blocks: u32,
    server: &Arc<ScriptedServer>,
) -> TileLoader<Arc<ScriptedServer>> {
    let context = TileRequestContext::new(TEMPLATE, lat, lon, zoom, blocks).unwrap();
    TileLoader::new(context, cache_dir.path(), Arc::clone(server)).unwrap()
}

#[test]
fn test_partial_failure_then_retry_reuses_cache() {
    let cache_dir = TempDir::new().unwrap();
    let server = Arc::new(ScriptedServer::default());
    server.fail("http://tiles.example/1/1/1.jpg", 503);

    // Origin (0, 0) at zoom 1 sits on the corner of tile (1, 1): window is 2×2
    let mut loader = session(&cache_dir, 0.0, 0.0, 1, 1, &server);
    assert_eq!(loader.window().len(), 4);

    let first = loader.start();
    assert_eq!(first.len(), 3);
    assert_eq!(first.failures().len(), 1);
    assert_eq!(first.failures()[0].tile, TileIndex::new(1, 1, 1));
    assert_eq!(first.failures()[0].reason, FetchFailure::Status(503));
    assert_eq!(server.request_count(), 4);

    server.heal();
    let second = loader.start();

    assert_eq!(second.len(), 4);
    assert_eq!(second.cache_hits(), 3);
    assert_eq!(second.downloaded(), 1);
    assert_eq!(server.request_count(), 5);
    assert_eq!(
        server.requests().last().unwrap(),
        "http://tiles.example/1/1/1.jpg"
    );

    // Earlier snapshot is untouched by the reload
    assert_eq!(first.len(), 3);
}

#[test]
fn test_preseeded_cache_makes_no_requests() {
    let cache_dir = TempDir::new().unwrap();
    let server = Arc::new(ScriptedServer::default());

    let seed = DiskCache::open(cache_dir.path(), TEMPLATE).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            seed.store(&TileIndex::new(x, y, 2), b"seeded").unwrap();
        }
    }

    let mut loader = session(&cache_dir, 0.0, 0.0, 2, 5, &server);
    let tiles = loader.start();

    assert_eq!(tiles.len(), 16);
    assert_eq!(tiles.cache_hits(), 16);
    assert_eq!(server.request_count(), 0);
}

#[test]
fn test_window_clamped_at_top_left_corner() {
    let cache_dir = TempDir::new().unwrap();
    let server = Arc::new(ScriptedServer::default());

    let mut loader = session(&cache_dir, 80.0, -170.0, 2, 5, &server);
    assert_eq!((loader.centre().x, loader.centre().y), (0, 0));

    let window = loader.window();
    assert_eq!((window.min_x, window.max_x), (0, 3));
    assert_eq!((window.min_y, window.max_y), (0, 3));

    let tiles = loader.start();
    assert_eq!(tiles.len(), 16);
    assert_eq!(server.request_count(), 16);
}

#[test]
fn test_tiles_written_to_documented_layout() {
    let cache_dir = TempDir::new().unwrap();
    let server = Arc::new(ScriptedServer::default());

    let mut loader = session(&cache_dir, 0.0, 0.0, 3, 0, &server);
    let tiles = loader.start();
    let tile = &tiles.tiles()[0];

    let expected = namespace_directory(cache_dir.path(), TEMPLATE).join("x4_y4_z3.jpg");
    assert_eq!(tile.image_path(), expected);
    assert_eq!(
        fs::read(&expected).unwrap(),
        b"jpeg:http://tiles.example/3/4/4.jpg"
    );
}

#[test]
fn test_sessions_share_cache_per_template() {
    let cache_dir = TempDir::new().unwrap();
    let server = Arc::new(ScriptedServer::default());

    session(&cache_dir, 10.0, 10.0, 5, 1, &server).start();
    assert_eq!(server.request_count(), 9);

    // A new session against the same server finds everything on disk
    let tiles = session(&cache_dir, 10.0, 10.0, 5, 1, &server).start();
    assert_eq!(tiles.cache_hits(), 9);
    assert_eq!(server.request_count(), 9);

    // A different template gets its own namespace
    let other = TileRequestContext::new("http://other.example/{z}/{x}/{y}", 10.0, 10.0, 5, 1)
        .unwrap();
    let tiles = TileLoader::new(other, cache_dir.path(), Arc::clone(&server))
        .unwrap()
        .start();
    assert_eq!(tiles.downloaded(), 9);
    assert_eq!(server.request_count(), 18);
}

#[test]
fn test_parallel_load_keeps_scan_order() {
    let cache_dir = TempDir::new().unwrap();
    let server = Arc::new(ScriptedServer::default());
    server.fail("http://tiles.example/6/30/29.jpg", 404);

    let mut loader = session(&cache_dir, 10.0, -5.0, 6, 2, &server);
    let window = loader.window();
    let tiles = loader.start_parallel(8);

    let expected: Vec<TileIndex> = window
        .indices()
        .filter(|t| *t != TileIndex::new(30, 29, 6))
        .collect();
    let actual: Vec<TileIndex> = tiles.iter().map(|t| t.index()).collect();

    assert_eq!(window.len(), 25);
    assert_eq!(actual, expected);
    assert_eq!(server.request_count(), 25);
}

#[test]
fn test_cache_failure_is_construction_error() {
    let temp = TempDir::new().unwrap();
    let not_a_dir = temp.path().join("cache-file");
    fs::write(&not_a_dir, b"").unwrap();

    let context = TileRequestContext::new(TEMPLATE, 0.0, 0.0, 4, 1).unwrap();
    let result = TileLoader::new(context, &not_a_dir, Arc::new(ScriptedServer::default()));

    assert!(matches!(result, Err(LoaderError::CacheInitialization(_))));
}

#[test]
fn test_invalid_origin_is_invalid_argument() {
    let err = TileRequestContext::new(TEMPLATE, 0.0, 0.0, 32, 1).unwrap_err();
    let err = LoaderError::from(err);
    assert!(matches!(err, LoaderError::InvalidArgument(_)));
    assert!(err.to_string().starts_with("Invalid argument"));
}
