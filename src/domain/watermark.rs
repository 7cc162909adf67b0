// Watermark overlay identifying who is viewing the dashboard
use super::portal::UserProfile;
use chrono::NaiveDateTime;
use serde::Serialize;

const DEFAULT_TILES: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watermark {
    pub label: String,
    pub tiles: usize,
}

impl Watermark {
    pub fn for_user(user: &UserProfile, now: NaiveDateTime) -> Self {
        let partner = user
            .partner
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or(&user.full_name);

        let outlet = match &user.outlet {
            Some(outlet) => outlet
                .external_id
                .clone()
                .unwrap_or_else(|| format!("OUT-{}", outlet.id)),
            None => format!("OUT-{}", user.id),
        };

        Self {
            label: format!("{} • {} • {}", partner, outlet, format_timestamp(now)),
            tiles: DEFAULT_TILES,
        }
    }
}

/// `dd.mm.yyyy, HH:MM`
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format("%d.%m.%Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portal::{OutletInfo, PartnerInfo};
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(12, 5, 0)
            .unwrap()
    }

    fn user() -> UserProfile {
        UserProfile {
            id: 9,
            full_name: "Demo Partner".to_string(),
            partner: None,
            outlet: None,
        }
    }

    #[test]
    fn test_label_falls_back_to_user() {
        let watermark = Watermark::for_user(&user(), noon());
        assert_eq!(watermark.label, "Demo Partner • OUT-9 • 07.03.2024, 12:05");
        assert_eq!(watermark.tiles, 24);
    }

    #[test]
    fn test_label_prefers_partner_and_external_id() {
        let mut profile = user();
        profile.partner = Some(PartnerInfo {
            name: "Portal Franchise".to_string(),
        });
        profile.outlet = Some(OutletInfo {
            id: 4,
            external_id: Some("MSK-001".to_string()),
        });
        assert_eq!(
            Watermark::for_user(&profile, noon()).label,
            "Portal Franchise • MSK-001 • 07.03.2024, 12:05"
        );

        profile.outlet.as_mut().unwrap().external_id = None;
        assert!(Watermark::for_user(&profile, noon()).label.contains("OUT-4"));
    }
}
