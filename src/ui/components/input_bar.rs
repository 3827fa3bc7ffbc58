use crate::ui::state::chat::QUICK_PROMPTS;

/// Returns true when the user asked to send (button or Enter).
pub fn render(ui: &mut egui::Ui, input_text: &mut String, enabled: bool) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(input_text)
                .hint_text("اكتب سؤالك عن الأدب العُماني...")
                .desired_width(ui.available_width() - 80.0),
        );
        if ui.add_enabled(enabled, egui::Button::new("إرسال")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    send && enabled
}

/// Example prompts under the input; returns the one clicked.
pub fn render_quick_prompts(ui: &mut egui::Ui, enabled: bool) -> Option<&'static str> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for (label, prompt) in QUICK_PROMPTS {
            let button = egui::Button::new(egui::RichText::new(label).small()).frame(false);
            if ui.add_enabled(enabled, button).clicked() {
                picked = Some(prompt);
            }
        }
    });
    picked
}
