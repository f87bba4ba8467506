use serde::Serialize;

/// Who an event is attributed to. Guest checkouts have no linked account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum UserIdentity {
    Customer(u64),
    Guest,
}

impl UserIdentity {
    /// Store customer ids use 0 for "no account".
    pub fn from_customer_id(customer_id: Option<u64>) -> Self {
        match customer_id {
            Some(id) if id > 0 => UserIdentity::Customer(id),
            _ => UserIdentity::Guest,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, UserIdentity::Guest)
    }
}

impl std::fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserIdentity::Customer(id) => write!(f, "{}", id),
            UserIdentity::Guest => write!(f, "guest"),
        }
    }
}
