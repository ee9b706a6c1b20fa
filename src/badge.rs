//! The badge component: options in, encoded images and events out.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --set_source--> Loading --image_loaded--> Ready
//!                                  ^                        |
//!                                  +-------set_source-------+
//! ```
//!
//! Load completion computes geometry, emits `Setup`, renders, and emits
//! `Draw`. Every later write that changes a stored value renders again and
//! emits `Draw`, except `source`, which starts a new load. Size and position
//! writes recompute geometry first, but only while `Ready`. Before an image
//! is ready there is no geometry, so a render publishes the bare surface
//! and load completion picks up the pending values.

use std::fmt;

use crate::anchor::AnchorPosition;
use crate::errors::BadgeError;
use crate::events::{BadgeEvent, EventChannel, ListenerId};
use crate::log::{debug, warn};
use crate::paint::Paint;
use crate::render::{self, Geometry, defaults};
use crate::store::{BadgeOptions, Change, PropertyStore};
use crate::surface::{NaturalSize, Surface};
use crate::types::{BadgeValue, CornerRadius, SizeFraction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// No source assigned yet.
    Uninitialized,
    /// Waiting for the host to deliver the image for the current source.
    Loading,
    /// Image loaded and geometry valid.
    Ready,
}

/// A numeric badge composited over a base image.
///
/// Loading is the host's job: after [`Badge::set_source`] it fetches and
/// decodes the image however it likes, then hands it over with
/// [`Badge::image_loaded`]. Nothing cancels an outstanding load, so the
/// image delivered last wins even if it belongs to an older source.
pub struct Badge<S: Surface> {
    surface: S,
    store: PropertyStore,
    state: LoadState,
    image: Option<S::Image>,
    geometry: Option<Geometry>,
    url: Option<String>,
    events: EventChannel<BadgeEvent>,
}

impl<S: Surface> fmt::Debug for Badge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Badge")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("geometry", &self.geometry)
            .field("url", &self.url.as_ref().map(String::len))
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Badge<S> {
    /// Create a badge; a non-empty `options.source` starts loading at once.
    ///
    /// The surface is sized to a blank 300x150 canvas until an image loads.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn new(mut surface: S, options: BadgeOptions) -> Self {
        if let Err(err) = surface.resize(defaults::SURFACE_WIDTH, defaults::SURFACE_HEIGHT) {
            warn!(%err, "could not acquire surface");
        }
        let source = options.source.clone();
        let mut badge = Self {
            surface,
            store: PropertyStore::new(BadgeOptions {
                source: String::new(),
                ..options
            }),
            state: LoadState::Uninitialized,
            image: None,
            geometry: None,
            url: None,
            events: EventChannel::new(),
        };
        badge.set_source(Some(&source));
        badge
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Current geometry; `None` until an image loads for the current source.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn options(&self) -> &BadgeOptions {
        self.store.options()
    }

    pub fn value(&self) -> BadgeValue {
        self.store.value()
    }

    pub fn source(&self) -> &str {
        self.store.source()
    }

    pub fn size_fraction(&self) -> SizeFraction {
        self.store.size_fraction()
    }

    pub fn position(&self) -> AnchorPosition {
        self.store.position()
    }

    pub fn corner_radius(&self) -> CornerRadius {
        self.store.corner_radius()
    }

    pub fn background_fill(&self) -> &Paint {
        self.store.background_fill()
    }

    pub fn text_fill(&self) -> &Paint {
        self.store.text_fill()
    }

    /// The most recent render output, without computing anything.
    pub fn last_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The most recent render output. If nothing was rendered yet, the
    /// surface is encoded as it stands and that result is cached; no `Draw`
    /// is emitted.
    ///
    /// Before any render the surface is the blank canvas acquired by
    /// [`Badge::new`], so this fails only when that acquisition failed.
    pub fn url(&mut self) -> Result<&str, BadgeError> {
        let url = match self.url.take() {
            Some(url) => url,
            None => self.surface.encode()?,
        };
        Ok(self.url.insert(url).as_str())
    }

    /// `None` restores 0 (hidden). Values are clamped to `0..=99`.
    pub fn set_value(&mut self, value: Option<i64>) {
        let change = self.store.set_value(value);
        self.apply(change);
    }

    /// `None` restores the empty source. A changed source starts a new load.
    pub fn set_source(&mut self, source: Option<&str>) {
        let change = self.store.set_source(source.map(str::to_string));
        self.apply(change);
    }

    /// `None` restores 0.6. Values are clamped to `[0, 1]`.
    pub fn set_size_fraction(&mut self, fraction: Option<f64>) {
        let change = self.store.set_size_fraction(fraction);
        self.apply(change);
    }

    /// `None` restores `topRight`.
    pub fn set_position(&mut self, position: Option<AnchorPosition>) {
        let change = self.store.set_position(position);
        self.apply(change);
    }

    /// `None` restores 8. Negative radii clamp to 0.
    pub fn set_corner_radius(&mut self, radius: Option<f64>) {
        let change = self.store.set_corner_radius(radius);
        self.apply(change);
    }

    /// `None` restores opaque red.
    pub fn set_background_fill(&mut self, paint: Option<Paint>) {
        let change = self.store.set_background_fill(paint);
        self.apply(change);
    }

    /// `None` restores white.
    pub fn set_text_fill(&mut self, paint: Option<Paint>) {
        let change = self.store.set_text_fill(paint);
        self.apply(change);
    }

    /// Completion callback for the host's image load.
    ///
    /// An image with a zero dimension counts as a failed load: it is
    /// dropped and the badge keeps waiting.
    pub fn image_loaded(&mut self, image: S::Image) {
        let (width, height) = image.natural_size();
        if width == 0 || height == 0 {
            warn!(width, height, "ignoring empty image");
            return;
        }
        debug!(width, height, source = self.store.source(), "image loaded");

        self.image = Some(image);
        self.state = LoadState::Ready;
        self.layout();
        self.events.emit(&BadgeEvent::Setup);
        self.render();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&BadgeEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn on_setup(&mut self, mut listener: impl FnMut() + 'static) -> ListenerId {
        self.events.subscribe(move |event| {
            if let BadgeEvent::Setup = event {
                listener();
            }
        })
    }

    pub fn on_draw(&mut self, mut listener: impl FnMut(&str) + 'static) -> ListenerId {
        self.events.subscribe(move |event| {
            if let BadgeEvent::Draw(url) = event {
                listener(url);
            }
        })
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    fn apply(&mut self, change: Change) {
        match change {
            Change::Unchanged => {}
            Change::Reload => {
                self.state = LoadState::Loading;
                self.image = None;
                self.geometry = None;
                debug!(source = self.store.source(), "loading");
            }
            Change::Relayout => {
                if self.state == LoadState::Ready {
                    self.layout();
                } else {
                    debug!("image not ready, geometry deferred");
                }
                self.render();
            }
            Change::Repaint => self.render(),
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn layout(&mut self) {
        let Some(image) = &self.image else {
            return;
        };
        let (width, height) = image.natural_size();
        let geometry = Geometry::compute(
            width,
            height,
            self.store.size_fraction(),
            self.store.position(),
        );
        debug!(side = geometry.side, x = geometry.offset.x, y = geometry.offset.y, "geometry");
        if let Err(err) = self.surface.resize(width, height) {
            warn!(%err, "could not size surface");
        }
        self.geometry = Some(geometry);
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn render(&mut self) {
        let result = render::render(
            &mut self.surface,
            self.image.as_ref(),
            self.geometry.as_ref(),
            self.store.value(),
            self.store.options(),
        );
        match result {
            Ok(url) => {
                self.url = Some(url.clone());
                self.events.emit(&BadgeEvent::Draw(url));
            }
            Err(err) => {
                warn!(%err, "render skipped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordedImage, RecordingSurface};
    use std::cell::Cell;
    use std::rc::Rc;

    fn badge() -> Badge<RecordingSurface> {
        Badge::new(RecordingSurface::new(), BadgeOptions::default())
    }

    #[test]
    fn starts_uninitialized_without_source() {
        let b = badge();
        assert_eq!(b.load_state(), LoadState::Uninitialized);
        assert!(b.geometry().is_none());
        assert!(b.last_url().is_none());
    }

    #[test]
    fn source_in_options_starts_loading() {
        let b = Badge::new(
            RecordingSurface::new(),
            BadgeOptions::default().with_source("favicon.png"),
        );
        assert_eq!(b.load_state(), LoadState::Loading);
        assert_eq!(b.source(), "favicon.png");
    }

    #[test]
    fn load_completion_sizes_surface_and_computes_geometry() {
        let mut b = badge();
        b.set_source(Some("favicon.png"));
        b.image_loaded(RecordedImage::new("favicon.png", 32, 16));

        assert_eq!(b.load_state(), LoadState::Ready);
        assert_eq!(b.surface().size(), Some((32, 16)));
        let g = b.geometry().unwrap();
        assert!((g.side - 9.6).abs() < 1e-9);
    }

    #[test]
    fn empty_image_keeps_loading() {
        let mut b = badge();
        b.set_source(Some("favicon.png"));
        b.image_loaded(RecordedImage::new("favicon.png", 0, 16));
        assert_eq!(b.load_state(), LoadState::Loading);
        assert!(b.geometry().is_none());
    }

    #[test]
    fn url_before_any_render_encodes_blank_canvas() {
        let mut b = badge();
        let draws = Rc::new(Cell::new(0));
        let d = draws.clone();
        b.on_draw(move |_| d.set(d.get() + 1));

        assert_eq!(b.surface().size(), Some((300, 150)));
        assert!(b.last_url().is_none());
        let url = b.url().unwrap().to_string();
        assert_eq!(b.last_url(), Some(url.as_str()));
        assert_eq!(draws.get(), 0);
    }

    #[test]
    fn url_fails_when_surface_was_never_acquired() {
        let mut b = Badge::new(RecordingSurface::unavailable(), BadgeOptions::default());
        assert!(matches!(b.url(), Err(BadgeError::SurfaceUnavailable { .. })));
    }

    #[test]
    fn reload_drops_image_and_geometry() {
        let mut b = badge();
        b.set_source(Some("a.png"));
        b.image_loaded(RecordedImage::new("a.png", 16, 16));
        b.set_source(Some("b.png"));
        assert!(b.geometry().is_none());

        b.set_value(Some(4));
        assert_eq!(b.surface().frame_text(), "clear");
    }

    #[test]
    fn reassigning_source_returns_to_loading() {
        let mut b = badge();
        b.set_source(Some("a.png"));
        b.image_loaded(RecordedImage::new("a.png", 16, 16));
        b.set_source(Some("b.png"));
        assert_eq!(b.load_state(), LoadState::Loading);
        b.set_source(None);
        assert_eq!(b.source(), "");
        assert_eq!(b.load_state(), LoadState::Loading);
    }
}
