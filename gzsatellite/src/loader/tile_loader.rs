//! Centre tile computation and window materialization.

use super::types::TileOutcome;
use super::{
    CentreTile, FetchFailure, LoaderError, MapTile, TileFailure, TileRequestContext, TileSet,
    TileWindow,
};
use crate::cache::DiskCache;
use crate::coord::{lat_lon_to_tile_coords, zoom_to_resolution, CoordError, TileIndex};
use crate::provider::{HttpClient, ReqwestClient};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Loads the block of tiles around a geographic origin.
///
/// Each tile is taken from the disk cache when present and fetched from the
/// tile server otherwise. A tile that cannot be fetched is left out of the
/// result; it never stops the rest of the window from loading.
///
/// # Example
///
/// ```ignore
/// use gzsatellite::loader::{TileLoader, TileRequestContext};
/// use gzsatellite::provider::ReqwestClient;
///
/// let context = TileRequestContext::new(
///     "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
///     40.2462, -111.6476, 18, 2,
/// )?;
/// let mut loader = TileLoader::new(context, &cache_dir, ReqwestClient::new()?)?;
/// for tile in loader.start().iter() {
///     println!("{} {} {}", tile.x(), tile.y(), tile.image_path().display());
/// }
/// ```
pub struct TileLoader<C: HttpClient = ReqwestClient> {
    context: TileRequestContext,
    centre: CentreTile,
    cache: DiskCache,
    client: C,
    tiles: Arc<TileSet>,
    generation: u64,
}

impl<C: HttpClient> TileLoader<C> {
    /// Create a loader and open the cache namespace for the context's server.
    ///
    /// # Errors
    ///
    /// * [`LoaderError::InvalidArgument`] if the origin cannot be projected
    /// * [`LoaderError::CacheInitialization`] if the cache directory cannot be created
    pub fn new(
        context: TileRequestContext,
        cache_dir: &Path,
        client: C,
    ) -> Result<Self, LoaderError> {
        let coords = context.origin_coords()?;
        let centre = CentreTile::from_coords(&coords);
        let cache = DiskCache::open(cache_dir, context.server().as_str())?;

        info!(
            lat = context.latitude(),
            lon = context.longitude(),
            zoom = context.zoom(),
            blocks = context.blocks(),
            centre_x = centre.x,
            centre_y = centre.y,
            "Tile loader created"
        );

        Ok(Self {
            context,
            centre,
            cache,
            client,
            tiles: Arc::new(TileSet::empty(0)),
            generation: 0,
        })
    }

    /// Load every tile of the window, one after another.
    ///
    /// Discards the previous result first. Blocks until the whole window has
    /// been visited and returns the new snapshot.
    pub fn start(&mut self) -> Arc<TileSet> {
        self.abort();
        let window = self.window();
        let started = Instant::now();

        info!(
            blocks = self.context.blocks(),
            centre_x = self.centre.x,
            centre_y = self.centre.y,
            tiles = window.len(),
            "Loading tiles"
        );

        let outcomes: Vec<TileOutcome> = window.indices().map(|t| self.resolve(&t)).collect();
        self.finish(outcomes, started)
    }

    /// Load the window with up to `workers` concurrent fetches.
    ///
    /// The snapshot is ordered exactly as [`start`](Self::start) would order
    /// it. With `workers <= 1`, or if the pool cannot be built, this is
    /// [`start`](Self::start).
    pub fn start_parallel(&mut self, workers: usize) -> Arc<TileSet> {
        if workers <= 1 {
            return self.start();
        }

        let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!(workers, error = %e, "Failed to build download pool, loading sequentially");
                return self.start();
            }
        };

        self.abort();
        let window = self.window();
        let indices: Vec<TileIndex> = window.indices().collect();
        let started = Instant::now();

        info!(
            blocks = self.context.blocks(),
            centre_x = self.centre.x,
            centre_y = self.centre.y,
            tiles = indices.len(),
            workers,
            "Loading tiles in parallel"
        );

        let this = &*self;
        let outcomes: Vec<TileOutcome> =
            pool.install(|| indices.par_iter().map(|t| this.resolve(t)).collect());
        self.finish(outcomes, started)
    }

    /// Drop the current result set.
    ///
    /// Snapshots already handed out stay valid.
    pub fn abort(&mut self) {
        self.generation += 1;
        self.tiles = Arc::new(TileSet::empty(self.generation));
    }

    /// The most recent snapshot.
    pub fn tiles(&self) -> Arc<TileSet> {
        Arc::clone(&self.tiles)
    }

    /// Whether (`lat`, `lon`) lies in the centre tile at the session zoom.
    pub fn inside_centre_tile(&self, lat: f64, lon: f64) -> Result<bool, CoordError> {
        let tile = lat_lon_to_tile_coords(lat, lon, self.context.zoom())?.floor();
        Ok(tile.x == self.centre.x && tile.y == self.centre.y)
    }

    /// Metres per pixel of the tiles at the origin latitude.
    pub fn resolution(&self) -> f64 {
        zoom_to_resolution(self.context.latitude(), self.context.zoom())
    }

    pub fn centre(&self) -> &CentreTile {
        &self.centre
    }

    pub fn context(&self) -> &TileRequestContext {
        &self.context
    }

    /// The server URL template.
    pub fn object_uri(&self) -> &str {
        self.context.server().as_str()
    }

    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }

    /// Tiles covered by a load.
    pub fn window(&self) -> TileWindow {
        TileWindow::around(&self.centre, self.context.blocks(), self.context.zoom())
    }

    fn resolve(&self, tile: &TileIndex) -> TileOutcome {
        let path = self.cache.path_for(tile);

        if self.cache.contains(tile) {
            debug!(tile = %tile, "Tile cache hit");
            return TileOutcome::Cached(MapTile::new(*tile, path));
        }

        let url = self.context.server().uri_for_tile(tile.x, tile.y, tile.zoom);
        let failed = |reason: FetchFailure| {
            let failure = TileFailure {
                tile: *tile,
                url: url.clone(),
                reason,
            };
            warn!("{}", failure);
            TileOutcome::Failed(failure)
        };

        let response = match self.client.get(&url) {
            Ok(response) => response,
            Err(e) => return failed(FetchFailure::Transport(e)),
        };

        if !response.is_ok() {
            return failed(FetchFailure::Status(response.status));
        }

        match self.cache.store(tile, &response.body) {
            Ok(path) => {
                debug!(tile = %tile, url = %url, bytes = response.body.len(), "Tile downloaded");
                TileOutcome::Downloaded(MapTile::new(*tile, path))
            }
            Err(e) => failed(FetchFailure::Persist(e.to_string())),
        }
    }

    fn finish(&mut self, outcomes: Vec<TileOutcome>, started: Instant) -> Arc<TileSet> {
        let set = TileSet::from_outcomes(self.generation, outcomes);

        info!(
            loaded = set.len(),
            cache_hits = set.cache_hits(),
            downloaded = set.downloaded(),
            failed = set.failures().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tile load complete"
        );

        self.tiles = Arc::new(set);
        Arc::clone(&self.tiles)
    }
}
