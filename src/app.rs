use egui::{Color32, Key, Rect, Sense, Stroke, Vec2};

use crate::file_io;
use crate::reducer::{Editor, Intent};
use crate::share_codec;
use crate::stitch::Stitch;

/// Base address share links are built on; the token rides in its `data`
/// query parameter.
const SHARE_BASE: &str = "https://punchgrid.app/";

const CELL_SIZE: f32 = 24.0;
const MAX_DIMENSION: usize = 200;

/// Destructive actions awaiting user confirmation in the modal.
enum Confirm {
    Clear,
    Resize { columns: usize, rows: usize },
}

/// Route a window-wide primary press to the engine. Presses are swallowed
/// while a confirmation dialog is open, so clicking its buttons cannot
/// reach the cells beneath them.
pub fn press_intent(modal_open: bool, cell: Option<usize>) -> Option<Intent> {
    (!modal_open).then_some(Intent::PointerDown { cell })
}

/// Keyboard activation of a focused cell, gated the same way as presses.
pub fn activate_intent(modal_open: bool, index: usize) -> Option<Intent> {
    (!modal_open).then_some(Intent::ToggleStitch { index })
}

/// The native editor application. All design state lives in the [`Editor`];
/// this type only holds widget-level scratch: pending resize inputs, the
/// hovered cell from the previous frame, and the status line.
pub struct PunchgridApp {
    editor: Editor,
    hovered_cell: Option<usize>,
    pending_columns: usize,
    pending_rows: usize,
    confirm: Option<Confirm>,
    status: Option<String>,
}

impl PunchgridApp {
    /// Called once before the first frame. A share token (or a full share
    /// URL) may be passed on the command line; a bad one falls back to the
    /// blank default grid.
    pub fn new(_cc: &eframe::CreationContext<'_>, share_arg: Option<String>) -> Self {
        let token = share_arg
            .as_deref()
            .map(|arg| share_codec::token_from_url(arg).unwrap_or(arg).to_owned());
        let mut editor = Editor::startup(token.as_deref());
        let status = editor
            .take_error()
            .map(|err| format!("Share link ignored: {err}"));

        let (columns, rows) = (editor.state().columns(), editor.state().rows());
        Self {
            editor,
            hovered_cell: None,
            pending_columns: columns,
            pending_rows: rows,
            confirm: None,
            status,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.editor.dispatch(intent);
        if let Some(err) = self.editor.take_error() {
            self.status = Some(err.to_string());
        }
    }

    /// Draw the stitch grid and route its pointer/keyboard input into
    /// intents. Press and release are handled window-wide, mirroring a
    /// document-level listener, so a stroke ends even when the pointer is
    /// released off the grid.
    fn grid_ui(&mut self, ui: &mut egui::Ui) {
        let state = self.editor.state();
        let (columns, rows) = (state.columns(), state.rows());
        let stitches: Vec<Stitch> = state.stitches().to_vec();
        let dragging = state.dragging();

        let desired = Vec2::new(columns as f32 * CELL_SIZE, rows as f32 * CELL_SIZE);
        let (grid_response, painter) = ui.allocate_painter(desired, Sense::hover());
        let grid_rect = grid_response.rect;

        let cell_rect = |index: usize| {
            let (r, c) = (index / columns, index % columns);
            Rect::from_min_size(
                grid_rect.min + Vec2::new(c as f32 * CELL_SIZE, r as f32 * CELL_SIZE),
                Vec2::splat(CELL_SIZE),
            )
        };

        // contains_pointer respects layer order, so a floating window over
        // the grid occludes the cells beneath it.
        let modal_open = self.confirm.is_some();
        let pointer = ui.input(|i| i.pointer.interact_pos());
        let hovered = pointer
            .filter(|pos| grid_rect.contains(*pos) && grid_response.contains_pointer())
            .map(|pos| {
                let c = ((pos.x - grid_rect.min.x) / CELL_SIZE) as usize;
                let r = ((pos.y - grid_rect.min.y) / CELL_SIZE) as usize;
                r.min(rows - 1) * columns + c.min(columns - 1)
            });

        let (pressed, released) =
            ui.input(|i| (i.pointer.primary_pressed(), i.pointer.primary_released()));

        if pressed {
            if let Some(intent) = press_intent(modal_open, hovered) {
                self.dispatch(intent);
            }
        } else if !modal_open && dragging && hovered != self.hovered_cell {
            // Pointer-enter on a new cell mid-stroke paints it.
            if let Some(index) = hovered {
                self.dispatch(Intent::PaintCell { index });
            }
        }
        self.hovered_cell = hovered;
        if released {
            self.dispatch(Intent::PointerUp);
        }

        // Per-cell widgets exist for focus and keyboard editing only;
        // painting went through the window-wide path above.
        let mut focus_target: Option<usize> = None;
        let cell_id = |ui: &egui::Ui, index: usize| ui.id().with(("stitch", index));

        for (index, stitch) in stitches.iter().enumerate() {
            let rect = cell_rect(index);
            let response = ui.interact(rect, cell_id(ui, index), Sense::click());

            if response.has_focus() {
                if ui.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Space)) {
                    if let Some(intent) = activate_intent(modal_open, index) {
                        self.dispatch(intent);
                    }
                }
                ui.input(|i| {
                    if i.key_pressed(Key::ArrowUp) && index >= columns {
                        focus_target = Some(index - columns);
                    }
                    if i.key_pressed(Key::ArrowDown) && index + columns < columns * rows {
                        focus_target = Some(index + columns);
                    }
                    if i.key_pressed(Key::ArrowLeft) && index % columns != 0 {
                        focus_target = Some(index - 1);
                    }
                    if i.key_pressed(Key::ArrowRight) && index % columns != columns - 1 {
                        focus_target = Some(index + 1);
                    }
                });
            }
            if response.clicked() {
                response.request_focus();
            }

            let fill = match stitch {
                Stitch::Punched => Color32::from_gray(40),
                Stitch::Unpunched => Color32::from_gray(230),
            };
            painter.rect_filled(rect.shrink(1.0), 2.0, fill);
            if response.has_focus() {
                painter.rect_stroke(rect.shrink(1.0), 2.0, Stroke::new(2.0, Color32::LIGHT_BLUE));
            }
        }

        if let Some(target) = focus_target {
            let id = cell_id(ui, target);
            ui.ctx().memory_mut(|m| m.request_focus(id));
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        let (columns, rows) = (self.editor.state().columns(), self.editor.state().rows());

        ui.heading("Punchcard");
        ui.separator();

        if ui.button("Clear").clicked() {
            self.confirm = Some(Confirm::Clear);
        }

        ui.separator();
        ui.label("Size");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.pending_columns).range(1..=MAX_DIMENSION));
            ui.label("x");
            ui.add(egui::DragValue::new(&mut self.pending_rows).range(1..=MAX_DIMENSION));
            if ui.button("Resize").clicked() {
                let (new_columns, new_rows) = (self.pending_columns, self.pending_rows);
                if new_columns < columns || new_rows < rows {
                    // Shrinking discards cells outside the new bounds.
                    self.confirm = Some(Confirm::Resize {
                        columns: new_columns,
                        rows: new_rows,
                    });
                } else {
                    self.dispatch(Intent::Resize {
                        columns: new_columns,
                        rows: new_rows,
                    });
                }
            }
        });

        ui.separator();
        ui.label("Text output");
        let mut preview = self.editor.state().artifact().text().to_owned();
        ui.add(
            egui::TextEdit::multiline(&mut preview)
                .interactive(false)
                .font(egui::TextStyle::Monospace)
                .desired_rows(rows.min(12)),
        );

        ui.separator();
        if ui.button("Save text file").clicked() {
            if let Some(path) = file_io::pick_export_path() {
                match file_io::export_artifact(&path, self.editor.state().artifact()) {
                    Ok(()) => self.status = Some(format!("Saved {}", path.display())),
                    Err(err) => self.status = Some(format!("Save failed: {err}")),
                }
            }
        }
        if ui.button("Load text file").clicked() {
            if let Some(path) = file_io::pick_import_path() {
                match file_io::import_design(&path) {
                    Ok(intent) => {
                        self.dispatch(intent);
                        self.pending_columns = self.editor.state().columns();
                        self.pending_rows = self.editor.state().rows();
                        self.status = Some(format!("Loaded {}", path.display()));
                    }
                    // Prior design stays untouched on a failed import.
                    Err(err) => self.status = Some(format!("Import failed: {err}")),
                }
            }
        }

        ui.separator();
        if ui.button("Share").clicked() {
            match share_codec::encode_token(self.editor.state().design()) {
                Ok(token) => {
                    let url = share_codec::share_url(SHARE_BASE, &token);
                    ui.ctx().copy_text(url);
                    self.status = Some("Share link copied to clipboard".to_owned());
                }
                Err(err) => self.status = Some(format!("Share failed: {err}")),
            }
        }

        if let Some(status) = &self.status {
            ui.separator();
            ui.label(status.clone());
        }
    }

    fn confirm_ui(&mut self, ctx: &egui::Context) {
        let Some(confirm) = &self.confirm else { return };
        let prompt = match confirm {
            Confirm::Clear => "Clear the whole design?".to_owned(),
            Confirm::Resize { columns, rows } => {
                format!("Shrink to {columns}x{rows}? Stitches outside the new size are lost.")
            }
        };

        let mut decided = None;
        egui::Window::new("Are you sure?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.horizontal(|ui| {
                    if ui.button("Confirm").clicked() {
                        decided = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        decided = Some(false);
                    }
                });
            });

        match decided {
            Some(true) => {
                let intent = match self.confirm.take() {
                    Some(Confirm::Clear) => Intent::ClearEditor,
                    Some(Confirm::Resize { columns, rows }) => Intent::Resize { columns, rows },
                    None => return,
                };
                self.dispatch(intent);
            }
            Some(false) => self.confirm = None,
            None => {}
        }
    }
}

impl eframe::App for PunchgridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .resizable(false)
            .show(ctx, |ui| self.controls_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| self.grid_ui(ui));
        });

        self.confirm_ui(ctx);
    }
}
