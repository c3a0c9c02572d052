//! Stagger Core
//!
//! Foundational primitives for the Stagger carousel engine:
//!
//! - **Drawable Layers**: The `ImageLayer` trait the engine renders through
//! - **Transforms**: Resolution-free translate/scale layer transforms
//! - **Configuration**: Carousel and scroll-sequence tuning, validated at construction
//! - **Errors**: Configuration error taxonomy
//!
//! The engine never draws pixels itself. Hosts implement [`ImageLayer`]
//! over whatever surface they have (a DOM node, a GPU quad, a terminal
//! cell grid) and the engine pushes sampled transforms into it each tick.

pub mod config;
pub mod error;
pub mod surface;

pub use config::{CarouselConfig, DepthProfile, ScrollSequenceConfig};
pub use error::ConfigError;
pub use surface::{ImageLayer, LayerTransform};
