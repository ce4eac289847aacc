use super::Reducer;

/// Who is logged in. Bound to wallet connect/disconnect outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub is_logged: bool,
    pub address: String,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityAction {
    Login(String),
    Logout,
    SetBalance(String),
}

impl UserIdentity {
    pub fn login(self, address: impl Into<String>) -> Self {
        Self {
            is_logged: true,
            address: address.into(),
            ..self
        }
    }

    pub fn logout(self) -> Self {
        Self::default()
    }

    /// Stored verbatim, whether or not anyone is logged in.
    pub fn set_balance(self, balance: impl Into<String>) -> Self {
        Self {
            balance: balance.into(),
            ..self
        }
    }
}

impl Reducer for UserIdentity {
    type Action = IdentityAction;

    fn reduce(self, action: IdentityAction) -> Self {
        match action {
            IdentityAction::Login(address) => self.login(address),
            IdentityAction::Logout => self.logout(),
            IdentityAction::SetBalance(balance) => self.set_balance(balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_records_address() {
        let identity = UserIdentity::default().login("0xABCD...1234");
        assert!(identity.is_logged);
        assert_eq!(identity.address, "0xABCD...1234");
    }

    #[test]
    fn logout_resets_everything() {
        let identity = UserIdentity::default()
            .login("0x1")
            .set_balance("2.5")
            .reduce(IdentityAction::Logout);
        assert_eq!(identity, UserIdentity::default());
    }

    #[test]
    fn balance_can_be_set_while_logged_out() {
        let identity = UserIdentity::default().reduce(IdentityAction::SetBalance("abc".into()));
        assert!(!identity.is_logged);
        assert_eq!(identity.balance, "abc");
    }
}
