use eframe::egui;

/// A modal window with a message and a row of buttons.
pub(super) struct Dialog {
    title: String,
    message: String,
    buttons: Vec<Button>,
    is_open: bool,
    requested_focus: bool,
}

pub struct Button {
    pub label: String,
    pub action: Box<dyn Fn() -> bool>,
}
impl Button {
    #[must_use]
    fn show(&self, ui: &mut egui::Ui, requested_focus: &mut bool) -> bool {
        let button = ui.button(&self.label);
        if !*requested_focus {
            button.request_focus();
            *requested_focus = true;
        }
        if button.clicked() {
            (self.action)()
        } else {
            false
        }
    }
}

impl Dialog {
    pub(super) fn new(title: String, message: String, buttons: Vec<Button>) -> Self {
        assert!(!buttons.is_empty(), "Dialog without buttons is not allowed");
        Self {
            title,
            message,
            buttons,
            is_open: true,
            requested_focus: false,
        }
    }
    pub(super) fn error(title: String, message: String, ok: String) -> Self {
        Self::new(
            title,
            message,
            vec![Button {
                label: ok,
                action: Box::new(|| true),
            }],
        )
    }
    #[must_use]
    fn show_buttons(&mut self, ui: &mut egui::Ui) -> bool {
        let Self {
            buttons,
            requested_focus,
            ..
        } = self;
        ui.horizontal(|ui| {
            for button in buttons.iter() {
                if button.show(ui, requested_focus) {
                    return true;
                }
            }
            false
        })
        .inner
    }
}

#[derive(Default)]
pub(super) struct DialogWidget {
    dialogs: std::collections::VecDeque<Dialog>,
    current_dialog: Option<Dialog>,
}

impl DialogWidget {
    pub(super) fn push(&mut self, dialog: Dialog) {
        self.dialogs.push_back(dialog)
    }
    /// Shows the current dialog, returns `true` if no dialog is pending anymore.
    pub(super) fn progress(&mut self, ctx: &egui::Context) -> bool {
        if self.current_dialog.is_none() && !self.dialogs.is_empty() {
            self.current_dialog = self.dialogs.pop_front();
        }
        let dialogs_are_done = if let Some(dialog) = self.current_dialog.as_mut() {
            let mut is_open = dialog.is_open;
            let message = dialog.message.clone();
            let shown = egui::Window::new(dialog.title.as_str())
                .collapsible(false)
                .auto_sized()
                .resizable(false)
                .pivot(egui::Align2::CENTER_CENTER)
                .default_pos(ctx.input(|x| x.screen_rect()).center())
                .open(&mut is_open)
                .show(ctx, |ui| {
                    ui.label(message);
                    dialog.show_buttons(ui)
                });
            dialog.is_open = is_open;
            match shown.and_then(|shown| shown.inner) {
                Some(completed) => completed || !is_open,
                // closed via the window's cross
                None => true,
            }
        } else {
            true
        };
        if dialogs_are_done {
            self.current_dialog = None;
        }
        dialogs_are_done
    }
}

#[test]
fn widget_without_dialogs_is_done() {
    let ctx = egui::Context::default();
    let mut widget = DialogWidget::default();
    let _ = ctx.run(Default::default(), |ctx| {
        assert!(widget.progress(ctx));
    });
}
#[test]
fn pending_dialog_blocks() {
    let ctx = egui::Context::default();
    let mut widget = DialogWidget::default();
    widget.push(Dialog::error(
        "Error".into(),
        "Column 'x' not found".into(),
        "Ok".into(),
    ));
    let _ = ctx.run(Default::default(), |ctx| {
        assert!(!widget.progress(ctx));
    });
    assert!(widget.current_dialog.is_some());
}
