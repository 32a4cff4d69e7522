use composer_core::color::{HUE_SNAP_DEG, PERCENT_SNAP, snap};
use composer_core::{Direction, HslColor, Session, hsl_to_rgb, presets};
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Palette Composer",
        options,
        Box::new(|_cc| Ok(Box::new(ComposerApp::default()))),
    )
}

#[derive(Default)]
struct ComposerApp {
    session: Session,
}

fn fill_color(c: HslColor) -> egui::Color32 {
    let (r, g, b) = hsl_to_rgb(c.h, c.s, c.l);
    egui::Color32::from_rgb(r as u8, g as u8, b as u8)
}

impl ComposerApp {
    fn config_json(&self) -> String {
        match self.session.config().to_json_pretty() {
            Ok(json) => json,
            Err(e) => format!("{e:#}"),
        }
    }

    fn palette_row(&mut self, ui: &mut egui::Ui) {
        let view = self.session.editor.view();

        ui.horizontal(|ui| {
            ui.horizontal_wrapped(|ui| {
                for (i, &c) in view.colors.iter().enumerate() {
                    let size = egui::vec2(28.0, 28.0);
                    let mut button = egui::Button::new("")
                        .fill(fill_color(c))
                        .min_size(size)
                        .rounding(14.0);
                    if i == view.selected {
                        button = button.stroke(egui::Stroke::new(2.0, egui::Color32::WHITE));
                    }
                    if ui.add(button).clicked() {
                        self.session.editor.select(i);
                    }
                }
            });

            ui.vertical(|ui| {
                let add = ui.add_enabled(
                    self.session.editor.can_insert(),
                    egui::Button::new(egui::RichText::new("+").strong()),
                );
                if add.clicked() {
                    self.session.editor.insert_after_selection();
                }

                let del = ui.add_enabled(
                    self.session.editor.can_remove(),
                    egui::Button::new(egui::RichText::new("−").strong()),
                );
                if del.clicked() {
                    self.session.editor.remove_selected();
                }
            });
        });
    }

    fn color_sliders(&mut self, ui: &mut egui::Ui) {
        let view = self.session.editor.view();
        let selected = view.colors[view.selected];
        let mut h = selected.h;
        let mut s = selected.s;
        let mut l = selected.l;

        let mut changed = false;
        if ui
            .add(egui::Slider::new(&mut h, 0.0..=360.0).text("Hue"))
            .changed()
        {
            h = snap(h, HUE_SNAP_DEG);
            changed = true;
        }
        if ui
            .add(egui::Slider::new(&mut s, 0.0..=100.0).text("Saturation"))
            .changed()
        {
            s = snap(s, PERCENT_SNAP);
            changed = true;
        }
        if ui
            .add(egui::Slider::new(&mut l, 0.0..=100.0).text("Lightness"))
            .changed()
        {
            l = snap(l, PERCENT_SNAP);
            changed = true;
        }

        if changed {
            self.session
                .editor
                .replace_selected(HslColor::new(h, s, l));
        }
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui) {
        let mut speed = self.session.speed();
        if ui
            .add(egui::Slider::new(&mut speed, 0..=100).step_by(10.0).text("Speed"))
            .changed()
        {
            self.session.set_speed(speed);
        }

        ui.horizontal(|ui| {
            ui.label("Direction:");
            ui.selectable_value(&mut self.session.direction, Direction::Forward, "Forward");
            ui.selectable_value(&mut self.session.direction, Direction::Reverse, "Reverse");
        });
    }
}

impl eframe::App for ComposerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Palette Composer");
                ui.separator();
                ui.label(format!("core v{}", composer_core::version()));

                ui.separator();
                ui.label("Preset:");
                for name in presets::names() {
                    if ui.button(*name).clicked() {
                        self.session.load_preset(name);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.palette_row(ui);
            ui.separator();

            let view = self.session.editor.view();
            ui.label(format!(
                "Selected: {} of {} | {}",
                view.selected,
                view.colors.len(),
                view.colors[view.selected].to_hex()
            ));
            self.color_sliders(ui);
            ui.separator();

            self.playback_controls(ui);
            ui.separator();

            ui.heading("Config payload");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.monospace(self.config_json());
            });
        });
    }
}
