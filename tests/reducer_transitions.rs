use std::sync::Arc;

use punchgrid::error::EditorError;
use punchgrid::reducer::{reduce, Editor, EditorState, Intent};
use punchgrid::stitch::Stitch;
use punchgrid::{share_codec, text_codec};

fn create_editor(columns: usize, rows: usize) -> Editor {
    let mut editor = Editor::startup(None);
    editor.dispatch(Intent::Resize { columns, rows });
    editor
}

#[test]
fn test_startup_without_token_is_default_blank() {
    let editor = Editor::startup(None);
    let state = editor.state();
    assert_eq!(state.columns(), 24);
    assert_eq!(state.rows(), 20);
    assert!(!state.dragging());
    assert!(state.stitches().iter().all(|s| *s == Stitch::Unpunched));
}

#[test]
fn test_startup_with_valid_token() {
    let design = text_codec::decode("x-\n-x").unwrap();
    let token = share_codec::encode_token(&design).unwrap();

    let editor = Editor::startup(Some(&token));
    assert_eq!(**editor.state().design(), design);
}

#[test]
fn test_startup_with_bad_token_falls_back() {
    let mut editor = Editor::startup(Some("!!not-a-token!!"));
    // Non-fatal: the default grid comes up and the condition is surfaced.
    assert_eq!(editor.state().columns(), 24);
    assert_eq!(editor.state().rows(), 20);
    assert!(matches!(
        editor.take_error(),
        Some(EditorError::ShareTokenInvalid(_))
    ));
}

#[test]
fn test_load_design_replaces_wholesale() {
    let mut editor = create_editor(3, 3);
    editor.dispatch(Intent::LoadDesign {
        stitches: vec![Stitch::Punched; 4],
        columns: 2,
        rows: 2,
    });
    let state = editor.state();
    assert_eq!(state.columns(), 2);
    assert_eq!(state.rows(), 2);
    assert_eq!(state.artifact().text(), "xx\nxx");
}

#[test]
fn test_load_design_length_mismatch_keeps_prior_state() {
    let state = EditorState::default();
    let before = state.design().clone();

    let result = reduce(
        &state,
        Intent::LoadDesign {
            stitches: vec![Stitch::Unpunched; 5],
            columns: 2,
            rows: 2,
        },
    );
    assert_eq!(
        result.unwrap_err(),
        EditorError::LengthMismatch {
            expected: 4,
            actual: 5
        }
    );
    // The caller's state is untouched.
    assert!(Arc::ptr_eq(state.design(), &before));
}

#[test]
fn test_dispatch_error_retains_state_and_surfaces_error() {
    let mut editor = create_editor(2, 2);
    let before = editor.state().design().clone();

    editor.dispatch(Intent::SetStitch {
        index: 99,
        value: Stitch::Punched,
    });

    assert!(Arc::ptr_eq(editor.state().design(), &before));
    assert!(matches!(
        editor.take_error(),
        Some(EditorError::IndexOutOfRange { index: 99, .. })
    ));
}

#[test]
fn test_set_stitch_regenerates_artifact() {
    let mut editor = create_editor(3, 2);
    let generation = editor.state().artifact().generation();

    editor.dispatch(Intent::SetStitch {
        index: 1,
        value: Stitch::Punched,
    });

    let state = editor.state();
    assert_eq!(state.artifact().text(), "-x-\n---");
    assert_eq!(state.artifact().generation(), generation + 1);
}

#[test]
fn test_clear_editor_blanks_at_current_dimensions() {
    let mut editor = create_editor(3, 2);
    editor.dispatch(Intent::SetStitch {
        index: 0,
        value: Stitch::Punched,
    });
    editor.dispatch(Intent::ClearEditor);

    let state = editor.state();
    assert_eq!(state.columns(), 3);
    assert_eq!(state.rows(), 2);
    assert_eq!(state.artifact().text(), "---\n---");
}

#[test]
fn test_resize_with_same_dimensions_is_noop() {
    let mut editor = create_editor(4, 4);
    editor.dispatch(Intent::SetStitch {
        index: 5,
        value: Stitch::Punched,
    });
    let design_before = editor.state().design().clone();
    let generation = editor.state().artifact().generation();

    editor.dispatch(Intent::Resize {
        columns: 4,
        rows: 4,
    });

    // Same design value and no artifact churn.
    assert!(Arc::ptr_eq(editor.state().design(), &design_before));
    assert_eq!(editor.state().artifact().generation(), generation);
}

#[test]
fn test_resize_changes_design_and_artifact() {
    let mut editor = create_editor(2, 2);
    editor.dispatch(Intent::SetStitch {
        index: 0,
        value: Stitch::Punched,
    });
    editor.dispatch(Intent::Resize {
        columns: 3,
        rows: 2,
    });

    assert_eq!(editor.state().artifact().text(), "x--\n---");
}

#[test]
fn test_artifact_matches_text_codec() {
    let mut editor = create_editor(5, 3);
    editor.dispatch(Intent::SetStitch {
        index: 7,
        value: Stitch::Punched,
    });
    let state = editor.state();
    assert_eq!(state.artifact().text(), text_codec::encode(state.design()));
}
