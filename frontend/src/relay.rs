//! Contact relay: validates a free-text message and hands it to WhatsApp
//! as a `wa.me` deep link opened in a new browsing context. Nothing is sent
//! anywhere else and delivery is never confirmed.

use log::{debug, warn};
use thiserror::Error;
use web_sys::window;

use crate::config;

const WHATSAPP_BASE: &str = "https://wa.me";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("Message must be at least {min} characters.")]
    TooShort { min: usize, actual: usize },
    #[error("'{0}' is not an international phone number (digits only, no '+')")]
    InvalidPhone(String),
    #[error("Could not open {0}")]
    OpenFailed(String),
}

/// A message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(text: &str) -> Result<Self, RelayError> {
        Self::parse_with_min(text, config::MIN_MESSAGE_CHARS)
    }

    pub fn parse_with_min(text: &str, min: usize) -> Result<Self, RelayError> {
        // UTF-16 code units, the length a browser text field reports.
        let actual = text.encode_utf16().count();
        if actual < min {
            return Err(RelayError::TooShort { min, actual });
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppRelay {
    phone: String,
}

impl WhatsAppRelay {
    pub fn new(phone: &str) -> Result<Self, RelayError> {
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(RelayError::InvalidPhone(phone.to_string()));
        }
        Ok(Self { phone: phone.to_string() })
    }

    /// Relay for the configured site number.
    pub fn site() -> Result<Self, RelayError> {
        Self::new(config::WHATSAPP_NUMBER)
    }

    /// Chat link without a prefilled message.
    pub fn chat_link(&self) -> String {
        format!("{}/{}", WHATSAPP_BASE, self.phone)
    }

    pub fn message_link(&self, message: &ContactMessage) -> String {
        format!(
            "{}?text={}",
            self.chat_link(),
            urlencoding::encode(message.as_str())
        )
    }

    /// Validate `text` and build its link.
    pub fn link_for(&self, text: &str) -> Result<String, RelayError> {
        ContactMessage::parse(text).map(|message| self.message_link(&message))
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) -> Result<(), RelayError> {
    let window = window().ok_or_else(|| RelayError::OpenFailed(url.to_string()))?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {
            debug!("Opened {}", url);
            Ok(())
        }
        Ok(None) => {
            // Popup blockers return no window handle.
            warn!("Browser blocked opening {}", url);
            Err(RelayError::OpenFailed(url.to_string()))
        }
        Err(e) => {
            warn!("Failed to open {}: {:?}", url, e);
            Err(RelayError::OpenFailed(url.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> WhatsAppRelay {
        WhatsAppRelay::new("919500656339").unwrap()
    }

    #[test]
    fn test_hello_there_link() {
        assert_eq!(
            relay().link_for("Hello there!").unwrap(),
            "https://wa.me/919500656339?text=Hello%20there%21"
        );
    }

    #[test]
    fn test_short_message_rejected() {
        assert_eq!(
            relay().link_for("short"),
            Err(RelayError::TooShort { min: 10, actual: 5 })
        );
        assert_eq!(
            RelayError::TooShort { min: 10, actual: 5 }.to_string(),
            "Message must be at least 10 characters."
        );
    }

    #[test]
    fn test_boundary_length() {
        assert!(ContactMessage::parse("123456789").is_err());
        assert!(ContactMessage::parse("1234567890").is_ok());
        assert!(ContactMessage::parse("").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 9 characters, 18 bytes
        assert!(ContactMessage::parse("ééééééééé").is_err());
        assert!(ContactMessage::parse("éééééééééé").is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is a surrogate pair.
        assert!(ContactMessage::parse("🙏🙏🙏🙏🙏").is_ok());
        assert_eq!(
            ContactMessage::parse("🙏🙏🙏🙏"),
            Err(RelayError::TooShort { min: 10, actual: 8 })
        );
    }

    #[test]
    fn test_encoding_preserves_exact_text() {
        let text = "Need ads & a site? 50% off / rate=1";
        let link = relay().link_for(text).unwrap();
        let encoded = link.split_once("?text=").unwrap().1;
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
    }

    #[test]
    fn test_multiline_and_unicode() {
        let link = relay().link_for("Hi team,\nvanakkam 🙏").unwrap();
        assert!(link.ends_with("Hi%20team%2C%0Avanakkam%20%F0%9F%99%8F"));
    }

    #[test]
    fn test_chat_link_without_text() {
        assert_eq!(relay().chat_link(), "https://wa.me/919500656339");
    }

    #[test]
    fn test_invalid_phone() {
        assert!(matches!(WhatsAppRelay::new("+91 95006"), Err(RelayError::InvalidPhone(_))));
        assert!(matches!(WhatsAppRelay::new(""), Err(RelayError::InvalidPhone(_))));
    }
}
