//! Turns an [`Analysis`] into the stat cards shown in the analysis panel.

use crate::models::Analysis;

/// One labeled metric in the analysis panel.
#[derive(Debug, PartialEq, Clone)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Secondary line under the value, e.g. "on 2024-W20"
    pub context: Option<String>,
}

impl StatCard {
    fn new(title: &str, value: String, context: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            value,
            context,
        }
    }

    fn for_week(title: &str, value: String, week: &str) -> Self {
        Self::new(title, value, Some(format!("on {}", week)))
    }
}

/// What the analysis panel body shows.
#[derive(Debug, PartialEq, Clone)]
pub enum AnalysisView {
    /// Backend error text shown in place of the cards
    Message(String),
    Cards(Vec<StatCard>),
}

impl AnalysisView {
    /// Cards in display order, only for the fields the backend sent.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        if let Some(msg) = analysis.error_message() {
            return AnalysisView::Message(msg.to_string());
        }

        let mut cards = Vec::with_capacity(5);
        if let Some(temps) = &analysis.temperature_extremes {
            cards.push(StatCard::for_week(
                "Hottest Week",
                format!("{}°C", temps.hottest.temp),
                &temps.hottest.week,
            ));
            cards.push(StatCard::for_week(
                "Coldest Week",
                format!("{}°C", temps.coldest.temp),
                &temps.coldest.week,
            ));
        }
        if let Some(other) = &analysis.other_extremes {
            cards.push(StatCard::for_week(
                "Most Humid Week",
                format!("{}%", other.most_humid.value),
                &other.most_humid.week,
            ));
            cards.push(StatCard::for_week(
                "Windiest Week",
                format!("{} km/h", other.windiest.value),
                &other.windiest.week,
            ));
        }
        // A zero count carries no information and is not shown.
        if let Some(count) = analysis.record_count.filter(|c| *c > 0) {
            cards.push(StatCard::new("Total Weeks Recorded", count.to_string(), None));
        }
        AnalysisView::Cards(cards)
    }

    pub fn cards(&self) -> &[StatCard] {
        match self {
            AnalysisView::Cards(cards) => cards,
            AnalysisView::Message(_) => &[],
        }
    }
}
