//! Dashboard presenter: pure functions from payload to view models.
//!
//! All formatting, fallback chains, sorting and chart dataset
//! construction happen here; views only map the result onto widgets.

use questdash_types::{DashboardPayload, Quest, QuestStatus, STATUS_ORDER, TrendPoint};

use crate::presentation::formatters::{format_date, format_timestamp, number_or_dash};
use crate::presentation::view_models::{
    BannerViewModel, CardViewModel, ChartSegmentViewModel, ChartsViewModel, DashboardViewModel,
    KpiStripViewModel, StatusChartViewModel, TrendChartViewModel, TrendSeriesViewModel,
};

/// Build the complete dashboard snapshot for a validated payload.
///
/// Decides ready vs empty: with zero quests the charts section is
/// omitted, the card list is empty and the counter reads
/// "0 quests represented".
pub fn build_dashboard(payload: &DashboardPayload) -> DashboardViewModel {
    let kpis = build_kpis(payload);
    let generated_at = format_timestamp(payload.generated_at.as_deref());

    if payload.quests.is_empty() {
        return DashboardViewModel {
            banner: BannerViewModel::empty(),
            generated_at,
            kpis,
            charts: None,
            cards: Vec::new(),
            count_label: "0 quests represented".to_string(),
        };
    }

    let cards = build_cards(&payload.quests);
    let count_label = format!("{} quests represented", cards.len());

    DashboardViewModel {
        banner: BannerViewModel::ready(),
        generated_at,
        kpis,
        charts: Some(ChartsViewModel {
            status: build_status_chart(payload),
            trend: build_trend_chart(payload),
        }),
        cards,
        count_label,
    }
}

fn build_kpis(payload: &DashboardPayload) -> KpiStripViewModel {
    KpiStripViewModel {
        total: payload.summary.total,
        finished: payload.summary.count(QuestStatus::Finished),
        in_progress: payload.summary.count(QuestStatus::InProgress),
        blocked: payload.summary.count(QuestStatus::Blocked),
        abandoned: payload.summary.count(QuestStatus::Abandoned),
    }
}

/// Sort quests and build their cards.
///
/// Primary key: completed_date else updated_at else "", descending
/// lexicographic (most recent first). Tie-break: title ascending.
fn build_cards(quests: &[Quest]) -> Vec<CardViewModel> {
    let mut sorted: Vec<&Quest> = quests.iter().collect();
    sorted.sort_by(|a, b| {
        let a_date = sort_date(a);
        let b_date = sort_date(b);
        b_date
            .cmp(a_date)
            .then_with(|| sort_title(a).cmp(sort_title(b)))
    });

    sorted.into_iter().map(build_card).collect()
}

fn sort_date<'a>(quest: &'a Quest) -> &'a str {
    quest
        .completed_date
        .as_deref()
        .or(quest.updated_at.as_deref())
        .unwrap_or("")
}

fn sort_title<'a>(quest: &'a Quest) -> &'a str {
    quest.title.as_deref().unwrap_or("")
}

fn build_card(quest: &Quest) -> CardViewModel {
    let title = quest
        .title
        .as_deref()
        .or(quest.slug.as_deref())
        .or(quest.quest_id.as_deref())
        .unwrap_or("Untitled Quest");

    let completion = match &quest.completed_date {
        Some(date) => format_date(Some(date)),
        None if quest.status == QuestStatus::Finished => "Completed date missing".to_string(),
        None => "Not finished yet".to_string(),
    };

    CardViewModel {
        title: title.to_string(),
        status_label: quest.status.label().to_string(),
        badge_class: quest.status.badge_class().to_string(),
        status_color: quest.status.color(),
        pitch: quest
            .elevator_pitch
            .clone()
            .unwrap_or_else(|| "No summary recorded yet.".to_string()),
        quest_id: quest
            .quest_id
            .clone()
            .unwrap_or_else(|| "Not available".to_string()),
        completion,
        plan_iterations: number_or_dash(quest.plan_iteration),
        fix_iterations: number_or_dash(quest.fix_iteration),
    }
}

fn build_status_chart(payload: &DashboardPayload) -> StatusChartViewModel {
    StatusChartViewModel {
        segments: STATUS_ORDER
            .iter()
            .map(|status| ChartSegmentViewModel {
                label: status.label(),
                value: payload.summary.count(*status),
                color: status.color(),
            })
            .collect(),
    }
}

/// Trend points eligible for plotting: a point must carry a string
/// `period` to appear on the x axis.
fn plotted_points(payload: &DashboardPayload) -> Vec<&TrendPoint> {
    payload
        .trends
        .as_ref()
        .map(|trends| {
            trends
                .points
                .iter()
                .filter(|point| point.period.is_some())
                .collect()
        })
        .unwrap_or_default()
}

fn build_trend_chart(payload: &DashboardPayload) -> TrendChartViewModel {
    let points = plotted_points(payload);

    TrendChartViewModel {
        labels: points
            .iter()
            .filter_map(|point| point.period.clone())
            .collect(),
        series: STATUS_ORDER
            .iter()
            .map(|status| TrendSeriesViewModel {
                label: status.label(),
                color: status.color(),
                values: points.iter().map(|point| point.count(*status)).collect(),
            })
            .collect(),
    }
}
