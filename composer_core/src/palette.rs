use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_COLOR, HslColor, rotate_hue};

/// The controller refuses more than 12 palette entries.
pub const MAX_COLORS: usize = 12;

/// Hue step used when deriving a new entry from the selected one: one
/// twelfth of the color wheel.
pub const HUE_STEP_DEG: f64 = 360.0 / MAX_COLORS as f64;

/// Which palette entry is being edited.
///
/// `NoSelection` is a real state (a freshly opened editor has one) and
/// resolves to the last entry at the start of each operation, so add and
/// remove still act on the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    NoSelection,
    At(usize),
}

impl Selection {
    /// Resolve to a concrete index for a palette of `len` entries
    /// (`len` must be at least 1).
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Selection::NoSelection => len - 1,
            Selection::At(i) => i.min(len - 1),
        }
    }
}

/// Complete palette + selection replacement handed to consumers after
/// every operation. There is no incremental-update contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteView {
    pub colors: Vec<HslColor>,
    pub selected: usize,
}

/// The live edit buffer for the palette: an ordered color list plus the
/// current selection.
///
/// Length bounds and selection range are handled uniformly: operations
/// silently clamp or no-op instead of erroring; frontends use
/// [`can_insert`](Self::can_insert) / [`can_remove`](Self::can_remove)
/// to disable the matching affordances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteEditor {
    colors: Vec<HslColor>,
    selection: Selection,
}

impl PaletteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored colors. Empty until the first edit: the default black
    /// entry shown by [`view`](Self::view) is not written back before
    /// the user actually edits.
    pub fn colors(&self) -> &[HslColor] {
        &self.colors
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn can_insert(&self) -> bool {
        self.colors.len() < MAX_COLORS
    }

    pub fn can_remove(&self) -> bool {
        self.colors.len() > 1
    }

    /// What the user sees: an empty palette is presented as a single
    /// default black entry.
    pub fn view(&self) -> PaletteView {
        if self.colors.is_empty() {
            PaletteView {
                colors: vec![DEFAULT_COLOR],
                selected: 0,
            }
        } else {
            PaletteView {
                colors: self.colors.clone(),
                selected: self.selection.resolve(self.colors.len()),
            }
        }
    }

    /// Write the presented default back before the first real edit.
    fn materialize(&mut self) {
        if self.colors.is_empty() {
            self.colors.push(DEFAULT_COLOR);
        }
    }

    /// Select an entry. Out-of-range indices clamp to the last entry.
    pub fn select(&mut self, index: usize) -> PaletteView {
        self.materialize();
        self.selection = Selection::At(index.min(self.colors.len() - 1));
        self.view()
    }

    /// Insert a new entry right after the selection: same saturation and
    /// lightness, hue rotated +30 degrees (wrapping). The new entry
    /// becomes the selection. No-op at the 12-entry maximum.
    pub fn insert_after_selection(&mut self) -> PaletteView {
        self.materialize();
        if self.colors.len() >= MAX_COLORS {
            return self.view();
        }
        let sel = self.selection.resolve(self.colors.len());
        let next = rotate_hue(self.colors[sel], HUE_STEP_DEG);
        self.colors.insert(sel + 1, next);
        self.selection = Selection::At(sel + 1);
        self.view()
    }

    /// Remove the selected entry; the selection moves one step earlier,
    /// clamped into the new range. No-op at the 1-entry minimum.
    pub fn remove_selected(&mut self) -> PaletteView {
        self.materialize();
        if self.colors.len() <= 1 {
            return self.view();
        }
        let sel = self.selection.resolve(self.colors.len());
        self.colors.remove(sel);
        let new_sel = sel.saturating_sub(1).min(self.colors.len() - 1);
        self.selection = Selection::At(new_sel);
        self.view()
    }

    /// Overwrite the selected entry, leaving everything else (including
    /// the selection index) in place.
    pub fn replace_selected(&mut self, color: HslColor) -> PaletteView {
        self.materialize();
        let sel = self.selection.resolve(self.colors.len());
        self.colors[sel] = color;
        self.selection = Selection::At(sel);
        self.view()
    }

    /// Replace the whole palette (preset load). Input beyond the maximum
    /// is truncated; the selection resets.
    pub fn reset_with(&mut self, colors: &[HslColor]) -> PaletteView {
        self.colors = colors.iter().copied().take(MAX_COLORS).collect();
        self.selection = Selection::NoSelection;
        self.view()
    }
}
