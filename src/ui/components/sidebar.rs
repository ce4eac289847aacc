use super::navbar::trim_address;
use crate::ui::state::AppState;

const PEER_LABEL_WIDTH: usize = 18;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SidebarActions {
    pub add_friend: Option<String>,
    pub remove_friend: Option<String>,
    pub select_peer: Option<String>,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> SidebarActions {
    let mut actions = SidebarActions::default();

    ui.heading("Friends");
    ui.separator();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.friend_input)
                .hint_text("address or name")
                .desired_width(140.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Add").clicked() || submitted {
            let peer_id = state.friend_input.trim().to_string();
            if !peer_id.is_empty() {
                state.friend_input.clear();
                actions.add_friend = Some(peer_id);
            }
        }
    });

    let conversations = state.conversations.state();
    let selected = conversations.selected_peer();

    let friends: Vec<&str> = conversations.friends().collect();
    if friends.is_empty() {
        ui.label(egui::RichText::new("No friends added").weak());
    }
    for peer_id in friends {
        ui.horizontal(|ui| {
            let label = trim_address(peer_id, PEER_LABEL_WIDTH);
            if ui.selectable_label(peer_id == selected, label).clicked() {
                actions.select_peer = Some(peer_id.to_string());
            }
            if ui.small_button("✕").on_hover_text("Remove friend").clicked() {
                actions.remove_friend = Some(peer_id.to_string());
            }
        });
    }

    // Conversations that exist without a friend entry.
    let strangers: Vec<&str> = conversations
        .peers()
        .into_iter()
        .filter(|peer_id| !conversations.is_friend(peer_id))
        .collect();
    if !strangers.is_empty() {
        ui.separator();
        ui.label("Other conversations:");
        for peer_id in strangers {
            ui.horizontal(|ui| {
                let label = trim_address(peer_id, PEER_LABEL_WIDTH);
                if ui.selectable_label(peer_id == selected, label).clicked() {
                    actions.select_peer = Some(peer_id.to_string());
                }
                if ui.small_button("+").on_hover_text("Add friend").clicked() {
                    actions.add_friend = Some(peer_id.to_string());
                }
            });
        }
    }

    actions
}
