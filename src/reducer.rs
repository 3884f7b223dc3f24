//! The single mutation authority. Intents from the presentation layer flow
//! through [`reduce`], a pure transition function from one immutable
//! [`EditorState`] to the next; [`Editor`] wraps it in the void-returning
//! dispatch contract the UI consumes.

use std::sync::Arc;

use crate::design::{Design, DesignRef};
use crate::error::{EditorError, EditorResult};
use crate::share_codec;
use crate::stitch::Stitch;
use crate::text_codec;

/// Cached text encoding of the current design, ready for download.
///
/// At most one artifact is live per state generation: every design-changing
/// transition builds a replacement and the superseded handle is dropped when
/// the editor swaps states in. `generation` increments per rebuild, so a
/// transition that left the design alone is observable as an unchanged
/// generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    text: Arc<str>,
    generation: u64,
}

impl ExportArtifact {
    fn from_design(design: &Design, generation: u64) -> Self {
        Self {
            text: text_codec::encode(design).into(),
            generation,
        }
    }

    /// The text-format payload for the download affordance.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything the presentation layer reads back after a dispatch: the
/// design, the drag interaction fields, and the export artifact.
#[derive(Debug, Clone)]
pub struct EditorState {
    design: DesignRef,
    dragging: bool,
    paint_value: Option<Stitch>,
    artifact: ExportArtifact,
}

impl EditorState {
    pub fn new(design: Design) -> Self {
        let artifact = ExportArtifact::from_design(&design, 0);
        Self {
            design: Arc::new(design),
            dragging: false,
            paint_value: None,
            artifact,
        }
    }

    pub fn design(&self) -> &DesignRef {
        &self.design
    }

    pub fn columns(&self) -> usize {
        self.design.columns()
    }

    pub fn rows(&self) -> usize {
        self.design.rows()
    }

    pub fn stitches(&self) -> &[Stitch] {
        self.design.stitches()
    }

    /// True while a pointer button is held anywhere in the window, not just
    /// over the grid.
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn paint_value(&self) -> Option<Stitch> {
        self.paint_value
    }

    pub fn artifact(&self) -> &ExportArtifact {
        &self.artifact
    }

    /// Next state holding `design`, with a freshly regenerated artifact.
    /// Drag fields carry over unchanged.
    fn with_design(&self, design: Design) -> Self {
        let artifact = ExportArtifact::from_design(&design, self.artifact.generation + 1);
        Self {
            design: Arc::new(design),
            dragging: self.dragging,
            paint_value: self.paint_value,
            artifact,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Design::default())
    }
}

/// Intents the presentation layer may dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the design wholesale, e.g. after decoding an uploaded file.
    LoadDesign {
        stitches: Vec<Stitch>,
        columns: usize,
        rows: usize,
    },
    /// Set one cell to an explicit value.
    SetStitch { index: usize, value: Stitch },
    /// Flip one cell; keyboard activation of a focused cell. Never starts
    /// a drag stroke.
    ToggleStitch { index: usize },
    /// Blank the grid at its current dimensions. Destructive; the UI
    /// confirms before dispatching.
    ClearEditor,
    /// Crop/extend to new dimensions. Destructive when shrinking; the UI
    /// confirms before dispatching. A no-op when dimensions are unchanged.
    Resize { columns: usize, rows: usize },
    /// Pointer button pressed anywhere in the window. `cell` is the grid
    /// index under the pointer when the press originated on a cell.
    PointerDown { cell: Option<usize> },
    /// Pointer button released anywhere in the window, grid or not.
    PointerUp,
    /// Pointer entered a cell; paints only while a drag stroke is active.
    PaintCell { index: usize },
}

/// The state-transition function. Validates before building the next state,
/// so an `Err` leaves the caller's state untouched and consistent.
pub fn reduce(state: &EditorState, intent: Intent) -> EditorResult<EditorState> {
    match intent {
        Intent::LoadDesign {
            stitches,
            columns,
            rows,
        } => {
            let design = Design::from_stitches(stitches, columns, rows)?;
            Ok(state.with_design(design))
        }
        Intent::SetStitch { index, value } => {
            let design = state.design.with_stitch(index, value)?;
            Ok(state.with_design(design))
        }
        Intent::ToggleStitch { index } => {
            let current = state.design.get(index).ok_or(EditorError::IndexOutOfRange {
                index,
                len: state.design.len(),
            })?;
            let design = state.design.with_stitch(index, current.toggled())?;
            Ok(state.with_design(design))
        }
        Intent::ClearEditor => {
            let design = Design::blank(state.columns(), state.rows())?;
            Ok(state.with_design(design))
        }
        Intent::Resize { columns, rows } => {
            if columns == state.columns() && rows == state.rows() {
                // Unchanged dimensions: same design Arc, same artifact.
                return Ok(state.clone());
            }
            let design = state.design.resize(columns, rows)?;
            Ok(state.with_design(design))
        }
        Intent::PointerDown { cell } => {
            let Some(index) = cell else {
                // Press outside the grid: the drag begins but paints
                // nothing until released.
                let mut next = state.clone();
                next.dragging = true;
                return Ok(next);
            };
            let current = state.design.get(index).ok_or(EditorError::IndexOutOfRange {
                index,
                len: state.design.len(),
            })?;
            // The first cell of a stroke always flips; its new value is
            // painted across every cell the stroke passes over.
            let value = current.toggled();
            let design = state.design.with_stitch(index, value)?;
            let mut next = state.with_design(design);
            next.dragging = true;
            next.paint_value = Some(value);
            Ok(next)
        }
        Intent::PointerUp => {
            let mut next = state.clone();
            next.dragging = false;
            next.paint_value = None;
            Ok(next)
        }
        Intent::PaintCell { index } => {
            if !state.dragging {
                return Ok(state.clone());
            }
            let value = state.paint_value.unwrap_or(Stitch::Punched);
            let design = state.design.with_stitch(index, value)?;
            Ok(state.with_design(design))
        }
    }
}

/// Owns the current state and implements the dispatch contract: intents in,
/// nothing out, the next state readable before the next render. Rejected
/// transitions are logged and remembered for the UI to surface; the prior
/// state stays live.
pub struct Editor {
    state: EditorState,
    last_error: Option<EditorError>,
}

impl Editor {
    /// Start from a share token when one is present and valid, otherwise
    /// from the default blank grid. A bad token is never fatal.
    pub fn startup(share_token: Option<&str>) -> Self {
        let mut last_error = None;
        let design = match share_token {
            Some(token) => match share_codec::decode_token(token) {
                Ok(design) => design,
                Err(err) => {
                    log::warn!("ignoring share token: {err}");
                    last_error = Some(err);
                    Design::default()
                }
            },
            None => Design::default(),
        };
        Self {
            state: EditorState::new(design),
            last_error,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match reduce(&self.state, intent) {
            // Swapping states in drops the superseded artifact handle.
            Ok(next) => self.state = next,
            Err(err) => {
                log::warn!("transition rejected: {err}");
                self.last_error = Some(err);
            }
        }
    }

    /// The most recent rejected transition, cleared on read.
    pub fn take_error(&mut self) -> Option<EditorError> {
        self.last_error.take()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::startup(None)
    }
}
