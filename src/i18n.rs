//! Localized strings for the widget library.
//!
//! Labels are plain `&'static str` tables selected by [`Locale`]. Widgets
//! receive a [`Translations`] value explicitly instead of looking one up
//! from ambient state, so a host can mix locales per screen if it wants.

use once_cell::sync::Lazy;
use unicase::UniCase;

use crate::error::{ConfabError, Result};

/// Supported UI locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

/// Language-subtag aliases accepted by [`Locale::parse`]
static LOCALE_ALIASES: Lazy<Vec<(UniCase<&'static str>, Locale)>> = Lazy::new(|| {
    vec![
        (UniCase::new("en"), Locale::En),
        (UniCase::new("eng"), Locale::En),
        (UniCase::new("es"), Locale::Es),
        (UniCase::new("spa"), Locale::Es),
        (UniCase::new("fr"), Locale::Fr),
        (UniCase::new("fra"), Locale::Fr),
    ]
});

impl Locale {
    /// Parse a BCP-47-ish tag ("en", "en-US", "es_MX") into a locale.
    ///
    /// Only the primary language subtag is considered; matching is
    /// case-insensitive.
    pub fn parse(tag: &str) -> Result<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        let primary = UniCase::new(primary);
        LOCALE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == primary)
            .map(|(_, locale)| *locale)
            .ok_or_else(|| ConfabError::UnknownLocale(tag.to_string()))
    }

    /// Canonical tag for this locale
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }

    /// All supported locales
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Es, Locale::Fr]
    }
}

/// Label table for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    /// Steady-state connection label (computed, never displayed in the banner)
    pub connected: &'static str,
    /// Label shown while the client is reestablishing its session
    pub reconnecting: &'static str,
    /// Label shown when the client has lost its session
    pub disconnected: &'static str,
    /// Title fallback for channels without a name
    pub unnamed_channel: &'static str,
    /// Subtitle fallback when a channel has no members yet
    pub no_members: &'static str,
    /// Word for "member" (singular)
    pub member: &'static str,
    /// Word for "members" (plural)
    pub members: &'static str,
    /// Word for "online"
    pub online: &'static str,
    /// Suffix for a single typing user ("Ana {is_typing}")
    pub is_typing: &'static str,
    /// Suffix for several typing users ("Ana and 2 more {are_typing}")
    pub are_typing: &'static str,
    /// Joiner for the multi-user typing line ("Ana {and} 2 {more}...")
    pub and_count_more: &'static str,
}

pub const EN: Translations = Translations {
    connected: "Connected",
    reconnecting: "Reconnecting...",
    disconnected: "Disconnected",
    unnamed_channel: "New conversation",
    no_members: "No members yet",
    member: "member",
    members: "members",
    online: "online",
    is_typing: "is typing...",
    are_typing: "are typing...",
    and_count_more: "and {} more",
};

pub const ES: Translations = Translations {
    connected: "Conectado",
    reconnecting: "Reconectando...",
    disconnected: "Desconectado",
    unnamed_channel: "Conversación nueva",
    no_members: "Aún no hay miembros",
    member: "miembro",
    members: "miembros",
    online: "en línea",
    is_typing: "está escribiendo...",
    are_typing: "están escribiendo...",
    and_count_more: "y {} más",
};

pub const FR: Translations = Translations {
    connected: "Connecté",
    reconnecting: "Reconnexion...",
    disconnected: "Déconnecté",
    unnamed_channel: "Nouvelle conversation",
    no_members: "Pas encore de membres",
    member: "membre",
    members: "membres",
    online: "en ligne",
    is_typing: "est en train d'écrire...",
    are_typing: "sont en train d'écrire...",
    and_count_more: "et {} autres",
};

impl Default for Translations {
    fn default() -> Self {
        EN
    }
}

impl Translations {
    /// Label table for a locale
    pub fn for_locale(locale: Locale) -> Translations {
        match locale {
            Locale::En => EN,
            Locale::Es => ES,
            Locale::Fr => FR,
        }
    }

    /// Subtitle text for member/online counts, e.g. "4 members, 2 online"
    pub fn members_online(&self, member_count: usize, online_count: usize) -> String {
        if member_count == 0 {
            return self.no_members.to_string();
        }
        let noun = if member_count == 1 {
            self.member
        } else {
            self.members
        };
        if online_count == 0 {
            format!("{} {}", member_count, noun)
        } else {
            format!("{} {}, {} {}", member_count, noun, online_count, self.online)
        }
    }

    /// Typing-indicator text for the given user names, or `None` when nobody
    /// is typing.
    pub fn typing(&self, names: &[String]) -> Option<String> {
        match names {
            [] => None,
            [only] => Some(format!("{} {}", only, self.is_typing)),
            [first, rest @ ..] => {
                let more = self.and_count_more.replacen("{}", &rest.len().to_string(), 1);
                Some(format!("{} {} {}", first, more, self.are_typing))
            }
        }
    }
}
