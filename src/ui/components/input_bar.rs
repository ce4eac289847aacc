pub fn render(ui: &mut egui::Ui, input_text: &mut String, enabled: bool) -> Option<String> {
    let mut send = false;
    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(input_text)
                    .hint_text("Write a message")
                    .desired_width((ui.available_width() - 60.0).max(80.0)),
            );
            if ui.button("Send").clicked() {
                send = true;
            }

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send = true;
            }
        });
    });

    let body = input_text.trim();
    if send && !body.is_empty() {
        let message = body.to_string();
        input_text.clear();
        return Some(message);
    }

    None
}
