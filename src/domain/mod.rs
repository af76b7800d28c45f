//! Domain layer: strong types with validation and invariants (no I/O).

mod response;
mod validation;
mod value;

pub use response::SendResult;
pub use validation::ValidationError;
pub use value::{
    AccountId, ApiKey, AttendeeId, BaseUrl, GroupJid, MessageId, MessageText, PhoneNumber,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty { field: "api key" })
        ));
    }

    #[test]
    fn api_key_trims_whitespace() {
        let key = ApiKey::new("  secret  ").unwrap();
        assert_eq!(key.as_str(), "secret");
    }

    #[test]
    fn base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://host.example/api/").unwrap();
        assert_eq!(url.as_str(), "https://host.example/api");

        let url = BaseUrl::new("https://host.example/api///").unwrap();
        assert_eq!(url.as_str(), "https://host.example/api");
    }

    #[test]
    fn base_url_rejects_relative_input() {
        assert!(matches!(
            BaseUrl::new("host.example/api"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("  "),
            Err(ValidationError::Empty { field: "base url" })
        ));
    }

    #[test]
    fn base_url_joins_endpoint_paths() {
        let url = BaseUrl::new("https://host.example/api/").unwrap();
        assert_eq!(url.join("/accounts"), "https://host.example/api/accounts");
    }

    #[test]
    fn messaging_id_strips_leading_plus_and_appends_suffix() {
        let phone = PhoneNumber::new("+243000000000");
        assert_eq!(phone.messaging_id().as_str(), "243000000000@s.whatsapp.net");
    }

    #[test]
    fn messaging_id_strips_every_leading_plus() {
        let phone = PhoneNumber::new("++79251234567");
        assert_eq!(phone.messaging_id().as_str(), "79251234567@s.whatsapp.net");
    }

    #[test]
    fn messaging_id_passes_malformed_input_through() {
        let phone = PhoneNumber::new("not-a-number");
        assert_eq!(phone.messaging_id().as_str(), "not-a-number@s.whatsapp.net");
    }

    #[test]
    fn group_jid_is_kept_verbatim_as_attendee_id() {
        let jid = GroupJid::new("12345-67890@g.us").unwrap();
        let attendee = AttendeeId::from(&jid);
        assert_eq!(attendee.as_str(), "12345-67890@g.us");
    }

    #[test]
    fn group_jid_rejects_empty() {
        assert!(matches!(
            GroupJid::new(" "),
            Err(ValidationError::Empty { field: "group jid" })
        ));
    }

    #[test]
    fn message_text_rejects_blank() {
        assert!(MessageText::new("  \n ").is_err());
        assert_eq!(MessageText::new(" hi ").unwrap().as_str(), " hi ");
    }

    #[test]
    fn account_id_rejects_empty() {
        assert!(matches!(
            AccountId::new(""),
            Err(ValidationError::Empty {
                field: AccountId::FIELD
            })
        ));
    }

    #[test]
    fn send_result_constructors_fill_the_expected_shape() {
        let ok = SendResult::sent(Some(MessageId::new("m1").unwrap()), 200, "{}");
        assert!(ok.success);
        assert_eq!(ok.http_status, Some(200));
        assert!(ok.error.is_none());

        let rejected = SendResult::rejected("quota exceeded", 429, "{}");
        assert!(!rejected.success);
        assert_eq!(rejected.http_status, Some(429));
        assert_eq!(rejected.error.as_deref(), Some("quota exceeded"));

        let skipped = SendResult::not_attempted("no destination");
        assert!(!skipped.success);
        assert_eq!(skipped.http_status, None);
        assert_eq!(skipped.raw_body, None);
    }
}
