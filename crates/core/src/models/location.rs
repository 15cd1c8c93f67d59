//! Company sites shown on the contact page.
//!
//! Unlike the other tables, every location carries both languages: there is no
//! fallback path, so the Russian fields are mandatory.

use serde::{Deserialize, Serialize};

use crate::types::{Language, LocationId};

/// Base URL of the embeddable map widget.
const MAP_WIDGET_URL: &str = "https://yandex.ru/map-widget/v1/";

/// Whether a site is a headquarters (production or office) or a warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Hq,
    Warehouse,
}

/// WGS-84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A company site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub name_ru: String,
    pub city: String,
    pub city_ru: String,
    pub address: String,
    pub address_ru: String,
    pub coords: Coordinates,
    pub zoom: u8,
    #[serde(rename = "type")]
    pub kind: LocationKind,
}

impl Location {
    #[must_use]
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name,
            Language::Ru => &self.name_ru,
        }
    }

    #[must_use]
    pub fn city(&self, language: Language) -> &str {
        match language {
            Language::En => &self.city,
            Language::Ru => &self.city_ru,
        }
    }

    #[must_use]
    pub fn address(&self, language: Language) -> &str {
        match language {
            Language::En => &self.address,
            Language::Ru => &self.address_ru,
        }
    }

    /// Embeddable map URL centred on this site with a placemark.
    #[must_use]
    pub fn map_url(&self, language: Language) -> String {
        let Coordinates { lat, lng } = self.coords;
        format!(
            "{MAP_WIDGET_URL}?ll={lng}%2C{lat}&z={zoom}&pt={lng}%2C{lat},pm2rdm&lang={locale}",
            zoom = self.zoom,
            locale = language.map_locale(),
        )
    }
}
