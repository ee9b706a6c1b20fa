//! Overlay a numeric badge ("pill") on a raster image, such as an unread
//! count on a favicon, and republish the composite as a data URI whenever
//! anything visible changes.
//!
//! ```
//! use favbadge::{Badge, BadgeEvent, BadgeOptions};
//! use favbadge::surface::{RecordedImage, RecordingSurface};
//!
//! let mut badge = Badge::new(
//!     RecordingSurface::new(),
//!     BadgeOptions::default().with_source("favicon.png"),
//! );
//! badge.on_draw(|url| println!("new favicon: {url}"));
//!
//! // The host finishes loading the image...
//! badge.image_loaded(RecordedImage::new("favicon.png", 32, 32));
//! // ...and every visible change republishes.
//! badge.set_value(Some(3));
//! assert!(badge.last_url().is_some());
//! ```
//!
//! # Features
//!
//! - `pixmap` (default): the tiny-skia surface, which encodes PNG data URIs.
//! - `tracing`: debug and warning logs through `tracing`. Without it the
//!   log calls compile to nothing, so run the tests both with and without
//!   this feature.

pub mod anchor;
pub mod badge;
pub mod errors;
pub mod events;
pub mod log;
pub mod paint;
pub mod render;
pub mod store;
pub mod surface;
pub mod types;

pub use anchor::AnchorPosition;
pub use badge::{Badge, LoadState};
pub use errors::BadgeError;
pub use events::{BadgeEvent, EventChannel, ListenerId};
pub use paint::{Color, Paint};
pub use render::Geometry;
pub use store::{BadgeOptions, Change, PropertyStore};
pub use surface::{Font, NaturalSize, Surface};
pub use types::{BadgeValue, CornerRadius, SizeFraction};
