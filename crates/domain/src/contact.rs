//! Contact — the WhatsApp "click to chat" deep link used by call-to-action buttons.

use crate::error::ValidationError;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Phone number plus the greeting that pre-fills the chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    phone: String,
    greeting: String,
}

impl ContactLink {
    /// Create a contact link.
    ///
    /// `phone` is the international number without `+` or separators.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`] when `phone` is empty or
    /// contains anything other than ASCII digits.
    pub fn new(
        phone: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(Self {
            phone,
            greeting: greeting.into(),
        })
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Deep link that opens a chat pre-filled with the greeting followed by
    /// `subject`, e.g. `https://wa.me/57...?text=Hola%20Jota...`.
    #[must_use]
    pub fn quote_url(&self, subject: &str) -> String {
        let message = format!("{}{subject}", self.greeting);
        format!(
            "{WHATSAPP_BASE}{}?text={}",
            self.phone,
            urlencoding::encode(&message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jota() -> ContactLink {
        ContactLink::new(
            "573022985621",
            "Hola Jota, estoy interesado en el servicio de ",
        )
        .unwrap()
    }

    #[test]
    fn should_build_wa_me_link_with_encoded_message() {
        let url = jota().quote_url("Video Ads & Motion Graphics");
        assert_eq!(
            url,
            "https://wa.me/573022985621?text=Hola%20Jota%2C%20estoy%20interesado%20en%20el%20servicio%20de%20Video%20Ads%20%26%20Motion%20Graphics"
        );
    }

    #[test]
    fn should_percent_encode_non_ascii_subject() {
        let url = jota().quote_url("Diseño");
        assert!(url.ends_with("Dise%C3%B1o"));
    }

    #[test]
    fn should_reject_empty_phone() {
        assert!(ContactLink::new("", "hi").is_err());
    }

    #[test]
    fn should_reject_phone_with_separators() {
        assert_eq!(
            ContactLink::new("+57 302 298", "hi"),
            Err(ValidationError::InvalidPhone("+57 302 298".to_string()))
        );
    }

    #[test]
    fn should_allow_empty_greeting() {
        let link = ContactLink::new("123", "").unwrap();
        assert_eq!(link.quote_url("Web"), "https://wa.me/123?text=Web");
    }
}
