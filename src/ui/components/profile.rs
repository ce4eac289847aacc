use crate::store::UserIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    RefreshBalance,
    Back,
}

pub fn render(
    ui: &mut egui::Ui,
    identity: &UserIdentity,
    currency: &str,
    tracked_messages: usize,
) -> Option<ProfileAction> {
    let mut action = None;

    ui.heading("Profile");
    ui.separator();

    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            ui.label("Address");
            ui.label(egui::RichText::new(&identity.address).monospace());
            ui.end_row();

            ui.label("Balance");
            if identity.balance.is_empty() {
                ui.label(egui::RichText::new("unknown").weak());
            } else {
                ui.label(format!("{} {currency}", identity.balance));
            }
            ui.end_row();

            ui.label("Messages received");
            ui.label(tracked_messages.to_string());
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Refresh balance").clicked() {
            action = Some(ProfileAction::RefreshBalance);
        }
        if ui.link("Back to chat").clicked() {
            action = Some(ProfileAction::Back);
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_produces_no_action() {
        let identity = UserIdentity::default().login("0xABCD...1234").set_balance("1.5");
        let ctx = egui::Context::default();
        let mut action = Some(ProfileAction::Back);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = render(ui, &identity, "AVAX", 3);
            });
        });
        assert_eq!(action, None);
    }
}
