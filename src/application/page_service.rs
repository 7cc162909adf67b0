// Page service - Loyalty board and the static portal sections
use crate::application::error::PortalError;
use crate::domain::fastboard::{BoardFilter, BoardView};
use crate::domain::layout::{Layout, LayoutVariant, Screen};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub layout: Layout,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Default)]
pub struct PageService;

impl PageService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_board(&self, filter: BoardFilter) -> Result<BoardView, PortalError> {
        tracing::debug!("Building loyalty board for {}", filter.id());
        Ok(BoardView::build(filter)?)
    }

    /// Section pages that only carry navigation and a notice. `None` for
    /// screens that have their own view.
    pub fn get_page(&self, screen: Screen) -> Option<PageView> {
        let (title, body) = match screen {
            Screen::Reports => ("Отчеты", "Страница отчетов в разработке."),
            Screen::Knowledge => ("База знаний", "Раздел базы знаний в разработке."),
            Screen::Dashboard | Screen::Fastboard => return None,
        };

        Some(PageView {
            layout: Layout::builder(LayoutVariant::Portal).active(screen).build(),
            title,
            body,
        })
    }
}
