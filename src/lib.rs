#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod design;
pub mod error;
pub mod file_io;
pub mod reducer;
pub mod share_codec;
pub mod stitch;
pub mod text_codec;

pub use app::PunchgridApp;
pub use design::Design;
pub use design::DesignRef;
pub use error::{EditorError, EditorResult};
pub use reducer::{reduce, Editor, EditorState, ExportArtifact, Intent};
pub use stitch::Stitch;
