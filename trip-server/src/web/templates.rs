//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Route, RouteId, RouteSegment};

use super::dto::format_time;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the trip request form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route list fragment (recommendation results).
///
/// Owns the detail expander state: at most one route's leg-by-leg panel
/// is rendered open per list.
#[derive(Template)]
#[template(path = "route_list.html")]
pub struct RouteListTemplate {
    pub routes: Vec<RouteCardView>,
    pub detail: DetailViewState,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteCardView {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_display: String,
    pub cost_display: String,
    pub badges: Vec<BadgeView>,
    pub segments: Vec<SegmentView>,
}

impl RouteCardView {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        let duration = route.total_duration();
        let hours = duration.num_hours();
        let mins = duration.num_minutes() % 60;

        let duration_display = if hours > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}m", mins)
        };

        Self {
            id: route.id().as_str().to_string(),
            start_time: format_time(route.start_time()),
            end_time: format_time(route.end_time()),
            duration_display,
            cost_display: route.total_cost().to_string(),
            badges: route.badges().iter().map(BadgeView::from_badge).collect(),
            segments: route.segments().iter().map(SegmentView::from_segment).collect(),
        }
    }
}

/// Badge view model: display label plus pill style.
#[derive(Debug, Clone)]
pub struct BadgeView {
    pub label: String,
    pub css_class: String,
}

impl BadgeView {
    pub fn from_badge(badge: crate::domain::Badge) -> Self {
        Self {
            label: badge.label().to_string(),
            css_class: badge.css_class().to_string(),
        }
    }
}

/// Segment view model.
#[derive(Debug, Clone)]
pub struct SegmentView {
    pub icon: String,
    pub instruction: String,
    pub duration_display: String,
    pub cost_display: Option<String>,
}

impl SegmentView {
    /// Create from a domain RouteSegment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            icon: segment.mode().icon().to_string(),
            instruction: segment.instruction().to_string(),
            duration_display: format!("{}m", segment.duration().num_minutes()),
            cost_display: segment.cost().map(|c| c.to_string()),
        }
    }
}

// ============================================================================
// Detail expander state
// ============================================================================

/// Which route's details are expanded, if any.
///
/// Opening a different route replaces the current selection; closing is
/// idempotent, so a second close (or closing while already closed) is a
/// no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailViewState {
    #[default]
    Closed,
    Open(RouteId),
}

impl DetailViewState {
    /// Expand the details of the given route.
    pub fn open(&mut self, id: RouteId) {
        *self = DetailViewState::Open(id);
    }

    /// Collapse whatever is open.
    pub fn close(&mut self) {
        *self = DetailViewState::Closed;
    }

    /// True if the given route's details are showing.
    pub fn is_open(&self, id: &str) -> bool {
        matches!(self, DetailViewState::Open(open) if open.as_str() == id)
    }
}
