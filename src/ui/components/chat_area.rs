use crate::common::Message;

pub fn render(ui: &mut egui::Ui, peer_id: &str, messages: &[Message]) {
    if peer_id.is_empty() {
        ui.label(egui::RichText::new("Pick a friend to start chatting").weak());
        return;
    }

    ui.label(egui::RichText::new(format!("Chat with {peer_id}")).strong());
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 40.0).max(0.0))
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.label(egui::RichText::new("No messages yet").weak());
            }
            // Newest first.
            for message in messages {
                let time = message
                    .local_time()
                    .map(|time| time.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("[{time}]")).weak());
                    ui.label(egui::RichText::new(&message.sender_name).strong());
                    ui.label(&message.body);
                });
            }
        });
}
