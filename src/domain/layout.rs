// Screen layout - one navigation model shared by every page
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Dashboard,
    Fastboard,
    Reports,
    Knowledge,
}

impl Screen {
    pub fn route(&self) -> &'static str {
        match self {
            Screen::Dashboard => "/dashboard",
            Screen::Fastboard => "/fastboard",
            Screen::Reports => "/reports",
            Screen::Knowledge => "/knowledge",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" | "/dashboard" => Some(Screen::Dashboard),
            "/fastboard" => Some(Screen::Fastboard),
            "/reports" => Some(Screen::Reports),
            "/knowledge" => Some(Screen::Knowledge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Partner portal with the left sidebar.
    Portal,
    /// Loyalty board with the tool rails.
    Loyalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Home,
    Report,
    Knowledge,
    Pie,
    Document,
    Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub variant: LayoutVariant,
    pub nav: Vec<NavItem>,
}

impl Layout {
    pub fn builder(variant: LayoutVariant) -> LayoutBuilder {
        LayoutBuilder {
            variant,
            active: None,
        }
    }

    #[cfg(test)]
    pub fn active_item(&self) -> Option<&NavItem> {
        self.nav.iter().find(|item| item.active)
    }
}

pub struct LayoutBuilder {
    variant: LayoutVariant,
    active: Option<Screen>,
}

impl LayoutBuilder {
    pub fn active(mut self, screen: Screen) -> Self {
        self.active = Some(screen);
        self
    }

    pub fn build(self) -> Layout {
        let nav = nav_entries(self.variant)
            .iter()
            .map(|&(label, icon, screen)| NavItem {
                label,
                icon,
                href: screen.route(),
                active: self.active == Some(screen),
            })
            .collect();

        Layout {
            variant: self.variant,
            nav,
        }
    }
}

fn nav_entries(variant: LayoutVariant) -> &'static [(&'static str, NavIcon, Screen)] {
    match variant {
        LayoutVariant::Portal => &[
            ("Главная", NavIcon::Home, Screen::Dashboard),
            ("Отчеты", NavIcon::Report, Screen::Reports),
            ("База знаний", NavIcon::Knowledge, Screen::Knowledge),
        ],
        LayoutVariant::Loyalty => &[
            ("Дашборд", NavIcon::Pie, Screen::Dashboard),
            ("Документы", NavIcon::Document, Screen::Reports),
            ("Блоки", NavIcon::Grid, Screen::Fastboard),
        ],
    }
}
