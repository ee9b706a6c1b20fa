//! Render a badge over a generated 32x32 icon and print the data URI.
//!
//! Run with: RUST_LOG=debug cargo run --example render_favicon --features tracing -- 7

use favbadge::surface::PixmapSurface;
use favbadge::{AnchorPosition, Badge, BadgeOptions};
use tiny_skia::{Color, Pixmap};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let value = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .unwrap_or(3);

    let mut badge = Badge::new(
        PixmapSurface::new(),
        BadgeOptions::default()
            .with_source("generated:teal-square")
            .with_position(AnchorPosition::BottomRight)
            .with_corner_radius(6.0),
    );
    badge.on_setup(|| tracing::info!("geometry ready"));
    badge.on_draw(|url| println!("{url}"));

    let Some(mut icon) = Pixmap::new(32, 32) else {
        eprintln!("could not allocate icon");
        return;
    };
    icon.fill(Color::from_rgba8(0, 128, 128, 255));
    badge.image_loaded(icon);
    badge.set_value(Some(value));
}
