//! Ninefold desktop application UI.
//!
//! # Design Notes
//! - Desktop-focused client with a 9x9 grid and clear 3x3 boundaries.
//! - Keyboard-driven input (digits, arrows, delete/backspace) with mouse
//!   selection, plus an on-screen keypad.
//! - Sidebar drives generation (difficulty + new game), board checking, and
//!   save/load through the persistence gateway.
//! - All user-facing text lives here; the core crates only raise structured
//!   errors.

use std::sync::Arc;

use eframe::{
    App, CreationContext, Frame,
    egui::{
        self, Align2, Button, CentralPanel, Context, FontId, Grid, InputState, Key, RichText,
        ScrollArea, Stroke, StrokeKind, Ui, Vec2,
    },
};
use egui_extras::{Size, StripBuilder};
use log::{error, info};
use ninefold_core::{Board, Level};
use ninefold_generator::PuzzleGenerator;
use ninefold_solver::BacktrackingSolver;
use ninefold_store::{BoardStore, StoreBackend};

/// Directory the file-backed store saves boards into.
const SAVE_DIR: &str = "saves";

/// Database file the SQLite-backed store saves boards into.
const DB_PATH: &str = "ninefold.db";

/// The save/load backend the sidebar currently points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum StorageChoice {
    #[default]
    File,
    Database,
}

impl StorageChoice {
    const ALL: [Self; 2] = [Self::File, Self::Database];

    const fn name(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Database => "Database",
        }
    }

    fn backend(self) -> StoreBackend {
        match self {
            Self::File => StoreBackend::File(SAVE_DIR.into()),
            Self::Database => StoreBackend::Database(DB_PATH.into()),
        }
    }
}

#[derive(Debug)]
pub struct NinefoldApp {
    board: Board,
    givens: [[bool; 9]; 9],
    selected_cell: Option<(usize, usize)>,
    level: Level,
    storage: StorageChoice,
    save_name: String,
    saved_names: Vec<String>,
    store: Option<Box<dyn BoardStore>>,
    status: String,
}

impl NinefoldApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let mut app = Self::with_store(None, StorageChoice::default());
        app.new_game();
        app.open_store();
        app
    }

    fn with_store(store: Option<Box<dyn BoardStore>>, storage: StorageChoice) -> Self {
        Self {
            board: Board::new(Arc::new(BacktrackingSolver::new())),
            givens: [[false; 9]; 9],
            selected_cell: None,
            level: Level::default(),
            storage,
            save_name: String::new(),
            saved_names: Vec::new(),
            store,
            status: String::new(),
        }
    }

    fn open_store(&mut self) {
        self.store = match self.storage.backend().open() {
            Ok(store) => Some(store),
            Err(err) => {
                error!("cannot open the {} store: {err}", self.storage.name());
                self.status = format!("Cannot open the {} store: {err}.", self.storage.name());
                None
            }
        };
        self.saved_names.clear();
        self.refresh_names();
    }

    fn new_game(&mut self) {
        let puzzle = PuzzleGenerator::new(self.level).generate();
        for (row, given_row) in self.givens.iter_mut().enumerate() {
            for (col, given) in given_row.iter_mut().enumerate() {
                *given = puzzle.problem.get(row, col) != 0;
            }
        }
        self.board = puzzle.problem;
        self.selected_cell = None;
        self.status = format!("New {} game.", self.level.name());
        info!("started a {} game (seed {:#x})", self.level.name(), puzzle.seed);
    }

    fn is_given(&self, row: usize, col: usize) -> bool {
        self.givens[row][col]
    }

    fn set_digit(&mut self, digit: u8) {
        if let Some((row, col)) = self.selected_cell {
            if !self.is_given(row, col) {
                if let Err(err) = self.board.set(row, col, digit) {
                    self.status = err.to_string();
                }
            }
        }
    }

    fn remove_digit(&mut self) {
        if let Some((row, col)) = self.selected_cell {
            if !self.is_given(row, col) {
                self.board.clear_cell(row, col);
            }
        }
    }

    fn reset(&mut self) {
        for row in 0..9 {
            for col in 0..9 {
                if !self.is_given(row, col) {
                    self.board.clear_cell(row, col);
                }
            }
        }
        self.status = "Board reset to its starting cells.".to_owned();
    }

    fn check(&mut self) {
        self.status = if self.board.is_filled() {
            if self.board.check_board() {
                "Solved! The board is complete and correct.".to_owned()
            } else {
                "The completed board breaks the rules.".to_owned()
            }
        } else if self.board.is_valid() {
            "No conflicts so far.".to_owned()
        } else {
            "There is a conflict on the board.".to_owned()
        };
    }

    fn save(&mut self) {
        if !self.board.is_valid() {
            self.status = "Not saving: the board has conflicts.".to_owned();
            return;
        }
        let name = self.save_name.trim().to_owned();
        let Some(store) = self.store.as_mut() else {
            self.status = "The save store is unavailable.".to_owned();
            return;
        };
        match store.write(&self.board, &name) {
            Ok(()) => {
                self.status = format!("Saved {name:?}.");
                self.refresh_names();
            }
            Err(err) => self.status = format!("Save failed: {err}."),
        }
    }

    fn load(&mut self, name: &str) {
        let Some(store) = self.store.as_ref() else {
            self.status = "The save store is unavailable.".to_owned();
            return;
        };
        match store.read(name) {
            Ok(board) => {
                self.board = board;
                // The persisted payload is values only, so a loaded board
                // has no given cells: everything is editable.
                self.givens = [[false; 9]; 9];
                self.selected_cell = None;
                self.status = format!("Loaded {name:?}.");
            }
            Err(err) => self.status = format!("Load failed: {err}."),
        }
    }

    fn refresh_names(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match store.names() {
            Ok(names) => self.saved_names = names,
            Err(err) => {
                error!("cannot list saved boards: {err}");
                self.status = format!("Cannot list saved boards: {err}.");
            }
        }
    }

    fn handle_input(&mut self, i: &InputState) {
        const DEFAULT_POSITION: (usize, usize) = (0, 0);
        if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::N) {
            self.new_game();
        }
        if i.key_pressed(Key::ArrowUp) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            pos.0 = pos.0.saturating_sub(1);
        }
        if i.key_pressed(Key::ArrowDown) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            pos.0 = (pos.0 + 1).min(8);
        }
        if i.key_pressed(Key::ArrowLeft) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            pos.1 = pos.1.saturating_sub(1);
        }
        if i.key_pressed(Key::ArrowRight) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            pos.1 = (pos.1 + 1).min(8);
        }
        if i.key_pressed(Key::Escape) {
            self.selected_cell = None;
        }

        let pairs = [
            (Key::Delete, None),
            (Key::Backspace, None),
            (Key::Num1, Some(1)),
            (Key::Num2, Some(2)),
            (Key::Num3, Some(3)),
            (Key::Num4, Some(4)),
            (Key::Num5, Some(5)),
            (Key::Num6, Some(6)),
            (Key::Num7, Some(7)),
            (Key::Num8, Some(8)),
            (Key::Num9, Some(9)),
        ];
        for (key, digit) in pairs {
            if i.key_pressed(key) {
                if let Some(digit) = digit {
                    self.set_digit(digit);
                } else {
                    self.remove_digit();
                }
            }
        }
    }
}

impl App for NinefoldApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if !ctx.wants_keyboard_input() {
            ctx.input(|i| self.handle_input(i));
        }

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.75))
                .size(Size::relative(0.25))
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        StripBuilder::new(ui)
                            .size(Size::relative(9.0 / (9.0 + 2.0)))
                            .size(Size::relative(2.0 / (9.0 + 2.0)))
                            .vertical(|mut strip| {
                                strip.cell(|ui| {
                                    self.draw_grid(ui);
                                });
                                strip.cell(|ui| {
                                    self.draw_keypad(ui);
                                });
                            });
                    });
                    strip.cell(|ui| {
                        self.draw_sidebar(ui);
                    });
                });
        });
    }
}

impl NinefoldApp {
    fn draw_grid(&mut self, ui: &mut Ui) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let border_color = visuals.widgets.inactive.fg_stroke.color;
        let given_text_color = visuals.strong_text_color();
        let filled_text_color = visuals.text_color();
        let selected_bg_color = visuals.selection.bg_fill;
        let same_house_bg_color = visuals.widgets.hovered.bg_fill;
        let bg_color = visuals.text_edit_bg_color();

        let thin_border = Stroke::new(1.0, border_color);
        let thick_border = Stroke::new(3.0, border_color);
        let selected_border = Stroke::new(6.0, border_color);

        let board_size = ui.available_size().min_elem();
        let cell_size = board_size / 9.0;
        let selected_value = self
            .selected_cell
            .map(|(row, col)| self.board.get(row, col))
            .filter(|&value| value != 0);

        Grid::new(ui.id().with("outer_board"))
            .spacing((0.0, 0.0))
            .min_col_width(cell_size * 3.0)
            .min_row_height(cell_size * 3.0)
            .show(ui, |ui| {
                for box_row in 0..3 {
                    for box_col in 0..3 {
                        let grid =
                            Grid::new(ui.id().with(format!("inner_box_{box_row}_{box_col}")))
                                .spacing((0.0, 0.0))
                                .min_col_width(cell_size)
                                .min_row_height(cell_size)
                                .show(ui, |ui| {
                                    for cell_row in 0..3 {
                                        for cell_col in 0..3 {
                                            let pos = (
                                                box_row * 3 + cell_row,
                                                box_col * 3 + cell_col,
                                            );
                                            self.draw_cell(
                                                ui,
                                                pos,
                                                cell_size,
                                                CellColors {
                                                    given_text: given_text_color,
                                                    filled_text: filled_text_color,
                                                    selected_bg: selected_bg_color,
                                                    same_house_bg: same_house_bg_color,
                                                    bg: bg_color,
                                                    thin_border,
                                                    selected_border,
                                                },
                                                selected_value,
                                            );
                                        }
                                        ui.end_row();
                                    }
                                });
                        ui.painter().rect_stroke(
                            grid.response.rect,
                            0.0,
                            thick_border,
                            StrokeKind::Inside,
                        );
                    }
                    ui.end_row();
                }
            });
    }

    fn draw_cell(
        &mut self,
        ui: &mut Ui,
        pos: (usize, usize),
        cell_size: f32,
        colors: CellColors,
        selected_value: Option<u8>,
    ) {
        let (row, col) = pos;
        let value = self.board.get(row, col);
        let text = if value == 0 {
            RichText::new("")
        } else if self.is_given(row, col) {
            RichText::new(value.to_string()).color(colors.given_text)
        } else {
            RichText::new(value.to_string()).color(colors.filled_text)
        }
        .size(cell_size * 0.8);

        let mut button = Button::new(text).min_size(Vec2::splat(cell_size));
        if self.selected_cell == Some(pos) || (value != 0 && Some(value) == selected_value) {
            button = button.fill(colors.selected_bg);
        } else if self.selected_cell.is_some_and(|(r, c)| {
            r == row || c == col || (r / 3 == row / 3 && c / 3 == col / 3)
        }) {
            button = button.fill(colors.same_house_bg);
        } else {
            button = button.fill(colors.bg);
        }

        let button = ui.add(button);
        let border = if self.selected_cell == Some(pos) {
            colors.selected_border
        } else {
            colors.thin_border
        };
        ui.painter()
            .rect_stroke(button.rect, 0.0, border, StrokeKind::Inside);
        if button.clicked() {
            self.selected_cell = Some(pos);
        }
    }

    fn draw_keypad(&mut self, ui: &mut Ui) {
        enum ButtonType {
            Digit(u8),
            RemoveDigit,
        }
        fn d(digit: u8) -> ButtonType {
            ButtonType::Digit(digit)
        }
        fn r() -> ButtonType {
            ButtonType::RemoveDigit
        }

        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let digit_count_color = visuals.text_color();

        let layout = [
            [d(1), d(2), d(3), d(4), d(5)],
            [d(6), d(7), d(8), d(9), r()],
        ];

        let x_padding = 5.0;
        let y_padding = 5.0;
        let avail = ui.available_size();
        let button_size = f32::min(
            (avail.x - 4.0 * x_padding) / 5.0,
            (avail.y - y_padding) / 2.0,
        );

        let mut counts = [0_usize; 10];
        for row_values in self.board.values() {
            for value in row_values {
                counts[usize::from(value)] += 1;
            }
        }

        let button_enabled = self
            .selected_cell
            .is_some_and(|(row, col)| !self.is_given(row, col));

        Grid::new(ui.id().with("keypad_grid"))
            .spacing((x_padding, y_padding))
            .show(ui, |ui| {
                for row in &layout {
                    for button_type in row {
                        match button_type {
                            ButtonType::Digit(digit) => {
                                let text =
                                    RichText::new(digit.to_string()).size(button_size * 0.8);
                                let button = Button::new(text).min_size(Vec2::splat(button_size));
                                let button = ui
                                    .add_enabled(button_enabled, button)
                                    .on_hover_text("Set digit");
                                if button.clicked() {
                                    self.set_digit(*digit);
                                }
                                ui.painter().text(
                                    button.rect.right_top() + egui::vec2(-4.0, 2.0),
                                    Align2::RIGHT_TOP,
                                    counts[usize::from(*digit)].to_string(),
                                    FontId::proportional(button_size * 0.25),
                                    digit_count_color,
                                );
                            }
                            ButtonType::RemoveDigit => {
                                let text = RichText::new("X").size(button_size * 0.8);
                                let button = Button::new(text).min_size(Vec2::splat(button_size));
                                let button = ui
                                    .add_enabled(button_enabled, button)
                                    .on_hover_text("Remove digit");
                                if button.clicked() {
                                    self.remove_digit();
                                }
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn draw_sidebar(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.label(RichText::new("Ninefold").size(24.0));
            ui.separator();

            ui.label("Difficulty");
            ui.horizontal(|ui| {
                for level in Level::ALL {
                    ui.selectable_value(&mut self.level, level, level.name());
                }
            });
            if ui.button(RichText::new("New Game").size(18.0)).clicked() {
                self.new_game();
            }
            if ui.button(RichText::new("Check Board").size(18.0)).clicked() {
                self.check();
            }
            if ui.button(RichText::new("Reset Board").size(18.0)).clicked() {
                self.reset();
            }
            ui.separator();

            ui.label("Storage");
            ui.horizontal(|ui| {
                let mut switched = false;
                for choice in StorageChoice::ALL {
                    switched |= ui
                        .selectable_value(&mut self.storage, choice, choice.name())
                        .changed();
                }
                if switched {
                    self.open_store();
                }
            });

            ui.label("Save name");
            ui.text_edit_singleline(&mut self.save_name);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    self.save();
                }
                if ui.button("Load").clicked() {
                    let name = self.save_name.trim().to_owned();
                    self.load(&name);
                }
            });

            ui.label("Saved boards");
            ScrollArea::vertical().show(ui, |ui| {
                let names = self.saved_names.clone();
                for name in names {
                    if ui.selectable_label(false, &name).clicked() {
                        self.save_name.clone_from(&name);
                        self.load(&name);
                    }
                }
            });
            ui.separator();

            ui.label(&self.status);
        });
    }
}

#[cfg(test)]
mod tests {
    use ninefold_store::FileBoardStore;

    use super::*;

    fn app_without_store() -> NinefoldApp {
        let mut app = NinefoldApp::with_store(None, StorageChoice::File);
        app.new_game();
        app
    }

    fn first_empty(board: &Board) -> (usize, usize) {
        for row in 0..9 {
            for col in 0..9 {
                if board.get(row, col) == 0 {
                    return (row, col);
                }
            }
        }
        unreachable!("a generated problem always has empty cells");
    }

    /// Creates a unique throwaway directory under the system temp dir.
    fn scratch_dir() -> std::path::PathBuf {
        use std::sync::atomic::{AtomicU32, Ordering};
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let unique = format!(
            "ninefold-app-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed),
        );
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn backend_choice_maps_to_the_right_store() {
        assert_eq!(
            StorageChoice::File.backend(),
            StoreBackend::File(SAVE_DIR.into())
        );
        assert_eq!(
            StorageChoice::Database.backend(),
            StoreBackend::Database(DB_PATH.into())
        );
    }

    #[test]
    fn reset_restores_the_generated_problem() {
        let mut app = app_without_store();
        let problem = app.board.clone();

        let pos = first_empty(&app.board);
        app.selected_cell = Some(pos);
        app.set_digit(7);
        assert_ne!(app.board, problem);

        app.reset();
        assert_eq!(app.board, problem);
    }

    #[test]
    fn reset_never_touches_given_cells() {
        let mut app = app_without_store();
        let problem = app.board.clone();
        app.reset();
        for row in 0..9 {
            for col in 0..9 {
                if app.is_given(row, col) {
                    assert_eq!(app.board.get(row, col), problem.get(row, col));
                }
            }
        }
    }

    #[test]
    fn save_and_load_round_trip_through_the_store() {
        let dir = scratch_dir();
        let mut app = app_without_store();
        app.store = Some(Box::new(FileBoardStore::new(&dir).unwrap()));

        let saved = app.board.clone();
        app.save_name = "slot".to_owned();
        app.save();
        assert_eq!(app.saved_names, vec!["slot"]);

        app.new_game();
        app.load("slot");
        assert_eq!(app.board, saved);
        // The persisted payload is values only; nothing is given after a
        // load.
        assert!(!app.givens.iter().flatten().any(|&given| given));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

/// Colors and strokes shared by every cell of the grid.
#[derive(Clone, Copy)]
struct CellColors {
    given_text: egui::Color32,
    filled_text: egui::Color32,
    selected_bg: egui::Color32,
    same_house_bg: egui::Color32,
    bg: egui::Color32,
    thin_border: Stroke,
    selected_border: Stroke,
}
