//! Locale value object - language of visitor-facing messages

use serde::{Deserialize, Serialize};

/// Visitor-facing strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub send: &'static str,
    pub sending: &'static str,
    pub sent: &'static str,
    pub rejected: &'static str,
    pub network_error: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
}

const INDONESIAN: Messages = Messages {
    send: "Kirim",
    sending: "Mengirim...",
    sent: "✅ Pesan berhasil dikirim! Terima kasih.",
    rejected: "❌ Gagal mengirim pesan. Silakan coba lagi.",
    network_error: "❌ Terjadi kesalahan. Silakan coba lagi.",
    theme_light: "☀️ Terang",
    theme_dark: "🌙 Gelap",
};

const ENGLISH: Messages = Messages {
    send: "Send",
    sending: "Sending...",
    sent: "✅ Message sent! Thank you.",
    rejected: "❌ Failed to send message. Please try again.",
    network_error: "❌ Something went wrong. Please try again.",
    theme_light: "☀️ Light",
    theme_dark: "🌙 Dark",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Id => &INDONESIAN,
            Locale::En => &ENGLISH,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Some(Locale::Id),
            "en" | "en-us" | "en-gb" | "english" => Some(Locale::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Id => write!(f, "id"),
            Locale::En => write!(f, "en"),
        }
    }
}
