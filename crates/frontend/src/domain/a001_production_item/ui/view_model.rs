//! Presentation mapping shared by the summary card and the detail view

use crate::shared::date_utils::{format_date, format_long_date, DateStyle};
use crate::shared::number_format::format_quantity;
use contracts::domain::a001_production_item::aggregate::{ProductionItem, ProductionStatus};
use contracts::domain::a001_production_item::stage_dates::{StageDates, StageKind};

pub const PLACEHOLDER: &str = "N/A";

/// Display value for an optional text field. Blank counts as missing.
pub fn placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Badge colour of a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Blue,
    Yellow,
    Red,
    Gray,
}

impl StatusTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Green => "status-badge status-badge--green",
            StatusTone::Blue => "status-badge status-badge--blue",
            StatusTone::Yellow => "status-badge status-badge--yellow",
            StatusTone::Red => "status-badge status-badge--red",
            StatusTone::Gray => "status-badge status-badge--gray",
        }
    }
}

pub fn status_tone(status: ProductionStatus) -> StatusTone {
    match status {
        ProductionStatus::Completed => StatusTone::Green,
        ProductionStatus::InProduction => StatusTone::Blue,
        ProductionStatus::Pending => StatusTone::Yellow,
        ProductionStatus::Delayed => StatusTone::Red,
        ProductionStatus::Unknown => StatusTone::Gray,
    }
}

/// `In Production`
pub fn status_label_title(status: ProductionStatus) -> String {
    status
        .code()
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `IN PRODUCTION`
pub fn status_label_upper(status: ProductionStatus) -> String {
    status.code().replace('_', " ").to_uppercase()
}

/// Upper-case the first character, keep the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub stage: String,
    pub kind: StageKind,
    pub date: String,
}

impl TimelineEntry {
    /// Icon name in `shared::icons`
    pub fn icon_name(&self) -> &'static str {
        stage_icon(self.kind)
    }

    pub fn marker_class(&self) -> &'static str {
        match self.kind {
            StageKind::Fabric => "timeline__marker timeline__marker--fabric",
            StageKind::Cutting => "timeline__marker timeline__marker--cutting",
            StageKind::Sewing => "timeline__marker timeline__marker--sewing",
            StageKind::Shipping => "timeline__marker timeline__marker--shipping",
            StageKind::Other => "timeline__marker timeline__marker--generic",
        }
    }
}

pub fn stage_icon(kind: StageKind) -> &'static str {
    match kind {
        StageKind::Fabric => "stage-fabric",
        StageKind::Cutting => "stage-cutting",
        StageKind::Sewing => "stage-sewing",
        StageKind::Shipping => "stage-shipping",
        StageKind::Other => "stage-generic",
    }
}

/// One entry per stage key, in mapping order. Empty when there is nothing to show.
pub fn timeline_entries(dates: Option<&StageDates>, style: DateStyle) -> Vec<TimelineEntry> {
    dates
        .map(|dates| {
            dates
                .iter()
                .map(|(stage, date)| TimelineEntry {
                    stage: capitalize(stage),
                    kind: StageKind::from_name(stage),
                    date: format_date(date, style),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Text content of a summary card
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
    pub title: String,
    pub subtitle: String,
    pub status_class: &'static str,
    pub status_label: String,
    pub fabric: String,
    pub color: String,
    pub quantity: String,
    pub stages: Vec<TimelineEntry>,
}

impl CardSummary {
    pub fn from_item(item: &ProductionItem) -> Self {
        Self {
            title: placeholder(item.order_number.as_deref()),
            subtitle: placeholder(item.style.as_deref()),
            status_class: status_tone(item.status).css_class(),
            status_label: status_label_title(item.status),
            fabric: placeholder(item.fabric.as_deref()),
            color: placeholder(item.color.as_deref()),
            quantity: format_quantity(item.quantity),
            stages: timeline_entries(item.dates.as_ref(), DateStyle::Short),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }

    /// Present only when the value is not blank
    fn optional(label: &'static str, value: Option<String>) -> Option<Self> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self::new(label, v))
    }
}

/// Text content of the detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSummary {
    pub title: String,
    pub subtitle: String,
    pub status_class: &'static str,
    pub status_label: String,
    pub primary_rows: Vec<DetailRow>,
    pub secondary_rows: Vec<DetailRow>,
    pub timeline: Vec<TimelineEntry>,
}

impl DetailSummary {
    pub fn from_item(item: &ProductionItem) -> Self {
        let mut primary_rows = vec![
            DetailRow::new("Fabric", placeholder(item.fabric.as_deref())),
            DetailRow::new("Color", placeholder(item.color.as_deref())),
            DetailRow::new("Quantity", format_quantity(item.quantity)),
        ];
        primary_rows.extend(DetailRow::optional("Brand", item.brand.clone()));

        let created = item
            .created_at
            .as_deref()
            .map(|v| format_long_date(Some(v)));
        let mut secondary_rows: Vec<DetailRow> = [
            DetailRow::optional("Source File", item.source_file.clone()),
            DetailRow::optional("Created", created),
        ]
        .into_iter()
        .flatten()
        .collect();
        secondary_rows.push(DetailRow::new(
            "Item ID",
            placeholder(Some(&item.id.to_string())),
        ));

        Self {
            title: placeholder(item.order_number.as_deref()),
            subtitle: placeholder(item.style.as_deref()),
            status_class: status_tone(item.status).css_class(),
            status_label: status_label_upper(item.status),
            primary_rows,
            secondary_rows,
            timeline: timeline_entries(item.dates.as_ref(), DateStyle::Long),
        }
    }
}
