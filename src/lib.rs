pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod process;
pub mod render;
pub mod schema;

pub use error::{PodcastError, Result, ValidationError};
pub use probe::{AudioProbe, HttpProbe};
pub use process::{load, Episode, EpisodeCollection};
pub use render::{render, render_page};
