//! Spline-Painter.
//!
//! Anker per Klick setzen, ziehen und löschen; die Kurve wird nach jeder
//! Änderung neu aufgebaut und mit egui gezeichnet.

use eframe::egui;
use spline_painter::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spline-Painter v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 700.0])
                .with_title("Spline-Painter"),
            ..Default::default()
        };

        eframe::run_native(
            "Spline-Painter",
            options,
            Box::new(|_cc| Ok(Box::new(PainterApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PainterApp {
    state: AppState,
    controller: AppController,
}

impl PainterApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for PainterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = ui::render_toolbar(ctx, &self.state);
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(ui::collect_pointer_events(ui, &response));
                self.process_events(std::mem::take(&mut events));

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(&ui.painter_at(rect), rect, &scene);
            });

        // Toolbar-Events, falls das Zentral-Panel in diesem Frame nicht lief
        self.process_events(events);
    }
}

impl PainterApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
