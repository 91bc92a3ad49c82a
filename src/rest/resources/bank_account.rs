//! Bank accounts, reached only through recipients.

use crate::rest::api_resource;

api_resource!(
    /// Bank account details nested in a [`Recipient`](super::Recipient).
    ///
    /// Displays by account holder name rather than id.
    BankAccount,
    "bank_account",
    "name"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{materialize, Resource};
    use serde_json::json;

    #[test]
    fn test_nested_bank_account_displays_name() {
        let recipient = materialize(json!({
            "object": "recipient",
            "id": "recp_1",
            "bank_account": {"object": "bank_account", "brand": "bbl", "name": "SOMCHAI PRASERT"}
        }))
        .unwrap()
        .into_resource()
        .unwrap();

        let bank_account: BankAccount = recipient
            .as_object()
            .get("bank_account")
            .unwrap()
            .downcast()
            .unwrap();
        assert_eq!(bank_account.to_string(), "<BankAccount name='SOMCHAI PRASERT'>");
        assert!(matches!(recipient, Resource::Recipient(_)));
    }

    #[test]
    fn test_display_without_name() {
        assert_eq!(BankAccount::default().to_string(), "<BankAccount>");
    }
}
