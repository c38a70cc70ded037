#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// hide console window on Windows in release
mod app;
mod dialog;
mod localization;
pub use localization::{Language, LocalizableString};

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(420.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Statistics Calculator",
        options,
        Box::new(|cc| Box::new(Calculator::new(cc))),
    )
}

#[derive(serde::Deserialize, serde::Serialize, Default)]
struct Calculator {
    #[serde(skip)]
    dialogs: dialog::DialogWidget,
    body: app::App,
}

impl Calculator {
    fn new(cc: &eframe::CreationContext) -> Self {
        let calculator: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };
        calculator.body.init(cc);
        calculator
    }
}

impl eframe::App for Calculator {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let dialogs_are_done = self.dialogs.progress(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(dialogs_are_done);
            let events = self.body.show(ui);
            for event in events {
                match event {
                    app::AppEvent::CloseRequested => frame.close(),
                    app::AppEvent::Dialog(dialog) => self.dialogs.push(dialog),
                }
            }
        });
    }

    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
