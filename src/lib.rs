//! Overview-to-camera alignment geometry.
//!
//! Places a live camera preview exactly over a fingerprint region of a
//! larger overview image, then blends between the full overview and the
//! registered close-up with a single zoom value in `0.0..=1.0`.
//!
//! Pure geometry — no pixels, no rendering, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Points, sizes, rects, aspect-fit and the scale/translate transform
//! - [`layout`] — Static layout solver: overview frame, camera frame, zoom range
//! - [`zoom`] — Zoom interpolation: content offset, zoom scale, preview opacity
//! - [`config`] — Margin factor and opacity range
//! - [`engine`] — Stateful engine holding the current layout
//! - [`present`] — Render sink trait for the presentation layer
//! - `svg` — SVG debug visualization (`svg` feature)
//!
//! # Example
//!
//! ```
//! use zenalign::{AlignEngine, OverviewContext, Rect, Size, ViewportBounds};
//!
//! let mut engine = AlignEngine::default();
//! let layout = engine
//!     .locate_fingerprint(
//!         &OverviewContext::new(Size::new(1000.0, 800.0), Rect::new(400.0, 300.0, 100.0, 100.0)),
//!         ViewportBounds::new(300.0, 300.0),
//!     )
//!     .unwrap();
//!
//! // The camera preview sits where the fingerprint lands after letterboxing.
//! assert_eq!(layout.camera_preview_frame.size, Size::new(30.0, 30.0));
//!
//! let state = engine.change_zoom(0.0).unwrap();
//! assert_eq!(state.zoom_scale, 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod present;
#[cfg(feature = "svg")]
pub mod svg;
pub mod zoom;

pub use config::{AlignConfig, AlphaBounds};
pub use engine::AlignEngine;
pub use geometry::{Point, Rect, ScaleTranslate, Size};
pub use layout::{AlignError, OverviewContext, StaticLayout, ViewportBounds};
pub use present::{Presenter, RenderSink};
pub use zoom::ZoomState;
