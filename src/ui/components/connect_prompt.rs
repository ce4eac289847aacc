/// Shown on the root route while logged out. The connect action itself
/// lives in the nav bar.
pub fn render(ui: &mut egui::Ui, connecting: bool, chain_name: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading("Connect your wallet to start chatting");
        ui.label(egui::RichText::new(format!("Network: {chain_name}")).weak());
        ui.add_space(12.0);
        if connecting {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Waiting for the wallet...");
            });
        } else {
            ui.label(egui::RichText::new("Use \"connect wallet\" in the top bar").weak());
        }
    });
}
