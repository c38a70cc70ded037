use data_format::{StatisticCalculator, StatsError, Summary, Table};

use crate::{localization, Language, LocalizableString};

#[derive(serde::Deserialize, serde::Serialize, Default)]
pub(super) struct App {
    language: Language,
    mode: DarkLightMode,
    path: String,
    column: String,
    #[serde(skip)]
    results: Vec<Summary>,
}
impl App {
    pub(super) fn init(&self, cc: &eframe::CreationContext) {
        cc.egui_ctx.set_visuals(self.mode.visuals())
    }
    pub(super) fn show(&mut self, ui: &mut egui::Ui) -> Vec<AppEvent> {
        let language = self.language;
        let mut events = Vec::new();
        egui::menu::bar(ui, |ui| {
            ui.menu_button(localization::FILE_MENU.localize(language), |ui| {
                // dark/light mode switch
                {
                    /// Show small toggle-button for light and dark mode.
                    #[must_use]
                    fn light_dark_small_toggle_button(
                        is_dark_mode: bool,
                        ui: &mut egui::Ui,
                    ) -> Option<DarkLightMode> {
                        #![allow(clippy::collapsible_else_if)]
                        if is_dark_mode {
                            if ui
                                .add(egui::Button::new("☀").frame(false))
                                .on_hover_text("Switch to light mode")
                                .clicked()
                            {
                                ui.close_menu();
                                return Some(DarkLightMode::Light);
                            }
                        } else {
                            if ui
                                .add(egui::Button::new("🌙").frame(false))
                                .on_hover_text("Switch to dark mode")
                                .clicked()
                            {
                                ui.close_menu();
                                return Some(DarkLightMode::Dark);
                            }
                        }
                        None
                    }
                    let style: egui::Style = (*ui.ctx().style()).clone();
                    let new_visuals = light_dark_small_toggle_button(style.visuals.dark_mode, ui);
                    if let Some(mode) = new_visuals {
                        self.mode = mode;
                        ui.ctx().set_visuals(mode.visuals());
                    }
                }
                // quit button
                {
                    if ui.button(localization::QUIT.localize(language)).clicked() {
                        events.push(AppEvent::CloseRequested);
                        ui.close_menu();
                    }
                }
            });
        });
        // file
        {
            ui.label(localization::SELECT_FILE.localize(language));
            ui.text_edit_singleline(&mut self.path);
            if ui.button(localization::BROWSE.localize(language)).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(localization::FILE_FILTER.localize(language), &["txt"])
                    .pick_file()
                {
                    self.path = path.to_string_lossy().to_string();
                }
            }
        }
        // column
        {
            ui.label(localization::ENTER_COLUMN.localize(language));
            ui.text_edit_singleline(&mut self.column);
        }
        ui.horizontal(|ui| {
            if ui.button(localization::CALCULATE.localize(language)).clicked() {
                match calculate(&self.path, &self.column) {
                    Some(Ok(summary)) => self.results.push(summary),
                    Some(Err(err)) => events.push(AppEvent::Dialog(error_dialog(err, language))),
                    None => log::debug!("Calculation skipped, file or column not given"),
                }
            }
            if ui.button(localization::CLEAR.localize(language)).clicked() {
                self.results.clear();
            }
        });
        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for summary in &self.results {
                ui.strong(&summary.column);
                ui.label(summary.to_string());
                ui.add_space(6.);
            }
        });
        events
    }
}

/// Reads the file and computes the summary, `None` if path or column are still empty.
pub(super) fn calculate(path: &str, column: &str) -> Option<Result<Summary, StatsError>> {
    if path.is_empty() || column.is_empty() {
        return None;
    }
    Some(Table::read(path).and_then(|table| StatisticCalculator::new(&table, column).summary()))
}

fn error_dialog(err: StatsError, language: Language) -> crate::dialog::Dialog {
    log::error!("{err}");
    let msg = LocalizableString {
        english: err.to_string(),
    };
    crate::dialog::Dialog::error(
        localization::ERROR.localize(language).to_string(),
        msg.localize(language),
        localization::OK.localize(language).to_string(),
    )
}

pub(super) enum AppEvent {
    CloseRequested,
    Dialog(crate::dialog::Dialog),
}
#[derive(PartialEq, Default, serde::Deserialize, serde::Serialize, Clone, Copy, Debug)]
enum DarkLightMode {
    Dark,
    #[default]
    Light,
}
impl DarkLightMode {
    fn visuals(&self) -> egui::Visuals {
        match self {
            DarkLightMode::Dark => egui::Visuals::dark(),
            DarkLightMode::Light => egui::Visuals::light(),
        }
    }
}

#[cfg(test)]
fn write_temp_file(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "column_stats_{}_{name}.txt",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn calculate_needs_path_and_column() {
    assert!(calculate("", "x").is_none());
    assert!(calculate("data.txt", "").is_none());
}
#[test]
fn calculate_from_file() {
    let path = write_temp_file("calculate_from_file", "name,id,x\na,10,5\nb,20,1\nc,30,9\nd,40,3\n");
    let summary = calculate(&path.to_string_lossy(), "x");
    std::fs::remove_file(&path).unwrap();
    let summary = summary.unwrap().unwrap();
    assert_eq!(summary.lines()[4], "Min: b (ID: 20)");
    assert_eq!(summary.lines()[5], "Max: c (ID: 30)");
}
#[test]
fn calculate_reports_errors() {
    let path = write_temp_file("calculate_reports_errors", "name,id,x\na,10,5\n");
    let err = calculate(&path.to_string_lossy(), "y");
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, Some(Err(StatsError::ColumnNotFound(_)))));
    let missing = std::env::temp_dir().join("column_stats_missing_file.txt");
    assert!(matches!(
        calculate(&missing.to_string_lossy(), "x"),
        Some(Err(StatsError::Io { .. }))
    ));
}
#[test]
fn results_are_not_persisted() {
    let app = App {
        path: "data.txt".into(),
        column: "x".into(),
        results: vec![Summary {
            column: "x".into(),
            row_count: 1,
            mean: 1.,
            variance: 0.,
            standard_deviation: 0.,
            mode: None,
            min: data_format::Identity {
                name: "a".into(),
                id: "1".into(),
            },
            max: data_format::Identity {
                name: "a".into(),
                id: "1".into(),
            },
        }],
        ..Default::default()
    };
    let mut storage = std::collections::HashMap::new();
    struct Storage<'a>(&'a mut std::collections::HashMap<String, String>);
    impl eframe::Storage for Storage<'_> {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn flush(&mut self) {}
    }
    let mut s = Storage(&mut storage);
    eframe::set_value(&mut s, eframe::APP_KEY, &app);
    let restored: App = eframe::get_value(&s, eframe::APP_KEY).unwrap();
    assert_eq!(restored.path, "data.txt");
    assert_eq!(restored.column, "x");
    assert_eq!(restored.mode, DarkLightMode::Light);
    assert!(restored.results.is_empty());
}
