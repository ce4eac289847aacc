use crate::ui::notifications::{Notifications, ToastLevel};

fn color(level: ToastLevel) -> egui::Color32 {
    match level {
        ToastLevel::Error => egui::Color32::from_rgb(220, 70, 70),
        ToastLevel::Warning => egui::Color32::YELLOW,
        ToastLevel::Success => egui::Color32::GREEN,
    }
}

/// Bottom-right overlay. Clicking a toast dismisses it.
pub fn render(ctx: &egui::Context, notifications: &mut Notifications) {
    notifications.prune(chrono::Utc::now());
    if notifications.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (index, toast) in notifications.iter().enumerate() {
                let response = egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.colored_label(color(toast.level), &toast.text);
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    dismissed = Some(index);
                }
            }
        });

    if let Some(index) = dismissed {
        notifications.dismiss(index);
    }
}
