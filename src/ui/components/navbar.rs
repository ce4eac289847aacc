use crate::ui::state::AppState;

/// Width of the address shown in the nav bar.
pub const NAV_ADDRESS_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Disconnected { connecting: bool },
    Connected { address: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Home,
    Connect,
    Disconnect,
    OpenProfile,
}

impl NavState {
    pub fn from_state(state: &AppState) -> Self {
        let identity = state.identity.state();
        if identity.is_logged {
            NavState::Connected {
                address: identity.address.clone(),
            }
        } else {
            NavState::Disconnected {
                connecting: state.is_connecting,
            }
        }
    }

    pub fn address_label(&self) -> Option<String> {
        match self {
            NavState::Connected { address } => Some(trim_address(address, NAV_ADDRESS_WIDTH)),
            NavState::Disconnected { .. } => None,
        }
    }
}

/// Shortens `address` to `width` characters as `head...tail`. Shorter
/// addresses come back unchanged.
pub fn trim_address(address: &str, width: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= width || width <= 3 {
        return address.to_string();
    }

    let keep = width - 3;
    let tail = keep / 2;
    let head = keep - tail;
    let head: String = chars[..head].iter().collect();
    let tail: String = chars[chars.len() - tail..].iter().collect();
    format!("{head}...{tail}")
}

pub fn render(ui: &mut egui::Ui, nav: &NavState) -> Option<NavAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(egui::RichText::new("Quilt").heading().strong()).frame(false))
            .clicked()
        {
            action = Some(NavAction::Home);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match nav {
            NavState::Disconnected { connecting } => {
                let button = ui.add_enabled(!connecting, egui::Button::new("connect wallet"));
                if *connecting {
                    ui.spinner();
                }
                if button.clicked() {
                    action = Some(NavAction::Connect);
                }
            }
            NavState::Connected { .. } => {
                let label = nav.address_label().unwrap_or_default();
                if ui.link(label).clicked() {
                    action = Some(NavAction::OpenProfile);
                }
                if ui.button("disconnect").clicked() {
                    action = Some(NavAction::Disconnect);
                }
            }
        });
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SessionEvent;

    #[test]
    fn trims_long_addresses_to_width() {
        let trimmed = trim_address("0x1234567890abcdef1234567890abcdef12345678", 16);
        assert_eq!(trimmed, "0x12345...345678");
        assert_eq!(trimmed.len(), 16);
    }

    #[test]
    fn short_addresses_untouched() {
        assert_eq!(trim_address("0xABCD...1234", 16), "0xABCD...1234");
        assert_eq!(trim_address("0x1234", 2), "0x1234");
    }

    #[test]
    fn starts_disconnected() {
        let state = AppState::new(10, 5);
        assert_eq!(
            NavState::from_state(&state),
            NavState::Disconnected { connecting: false }
        );
    }

    #[test]
    fn connecting_disables_connect() {
        let mut state = AppState::new(10, 5);
        state.begin_connect();
        assert_eq!(
            NavState::from_state(&state),
            NavState::Disconnected { connecting: true }
        );
    }

    #[test]
    fn connected_shows_address_link() {
        let mut state = AppState::new(10, 5);
        state.apply_event(SessionEvent::Connected {
            address: "0xABCD...1234".into(),
            balance: None,
        });

        let nav = NavState::from_state(&state);
        assert_eq!(
            nav,
            NavState::Connected {
                address: "0xABCD...1234".into()
            }
        );
        assert_eq!(nav.address_label().as_deref(), Some("0xABCD...1234"));

        state.disconnect();
        assert_eq!(
            NavState::from_state(&state),
            NavState::Disconnected { connecting: false }
        );
    }
}
