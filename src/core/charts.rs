use crate::config::Config;
use crate::models::figure::{ChartKind, Charts, FigurePoint, FigureSpec, FigureTheme};
use crate::models::{MonthlyPoint, SeriesSet, TypeCount};
use crate::utils::formatting::fmt_pct_short;

pub const AVAILABILITY_TITLE: &str = "Monthly Availability";
pub const TYPES_TITLE: &str = "Maintenance Type Distribution";
pub const MTBF_TITLE: &str = "MTBF Trend (hrs)";
pub const MTTR_TITLE: &str = "MTTR Trend (hrs)";
const UNAVAILABLE_SUFFIX: &str = " (data not available)";

/// Turn chart datasets into figure descriptions styled from `cfg`.
pub fn build_charts(series: &SeriesSet, cfg: &Config) -> Charts {
    let theme = figure_theme(cfg);

    Charts {
        availability: availability_figure(series.availability.as_deref(), cfg, &theme),
        maintenance_types: types_figure(series.maintenance_types.as_deref(), cfg, &theme),
        mtbf: trend_figure(series.mtbf.as_deref(), MTBF_TITLE, "MTBF", &cfg.colors.mtbf, &theme),
        mttr: trend_figure(
            series.mttr.as_deref(),
            MTTR_TITLE,
            "duration_hours",
            &cfg.colors.mttr,
            &theme,
        ),
    }
}

fn figure_theme(cfg: &Config) -> FigureTheme {
    FigureTheme {
        plot_bgcolor: cfg.theme.background.clone(),
        paper_bgcolor: cfg.theme.background.clone(),
        font_color: cfg.theme.font_color.clone(),
        title_font_size: cfg.theme.title_font_size,
        ..FigureTheme::default()
    }
}

fn availability_figure(points: Option<&[MonthlyPoint]>, cfg: &Config, theme: &FigureTheme) -> FigureSpec {
    let title = match points {
        Some(_) => AVAILABILITY_TITLE.to_string(),
        None => format!("{AVAILABILITY_TITLE}{UNAVAILABLE_SUFFIX}"),
    };
    let points = points.unwrap_or_default();

    FigureSpec {
        kind: Some(ChartKind::Bar),
        title,
        x_label: Some("Month".to_string()),
        y_label: Some("Availability".to_string()),
        points: points
            .iter()
            .map(|p| FigurePoint {
                label: p.label(),
                value: p.value,
                text: Some(fmt_pct_short(p.value)),
                color: cfg.colors.availability.clone(),
            })
            .collect(),
        y_tick_format: Some(".0%".to_string()),
        y_range: Some([0.0, 1.0]),
        x_tick_angle: Some(45),
        theme: Some(theme.clone()),
        ..FigureSpec::default()
    }
}

fn types_figure(counts: Option<&[TypeCount]>, cfg: &Config, theme: &FigureTheme) -> FigureSpec {
    let Some(counts) = counts else {
        return FigureSpec {
            kind: Some(ChartKind::Pie),
            title: format!("{TYPES_TITLE}{UNAVAILABLE_SUFFIX}"),
            theme: Some(theme.clone()),
            ..FigureSpec::default()
        };
    };

    FigureSpec {
        kind: Some(ChartKind::Pie),
        title: TYPES_TITLE.to_string(),
        points: counts
            .iter()
            .map(|c| FigurePoint {
                label: c.maintenance_type.clone(),
                value: c.count as f64,
                text: None,
                color: cfg.colors.for_type(&c.maintenance_type).to_string(),
            })
            .collect(),
        hole: Some(0.4),
        theme: Some(theme.clone()),
        ..FigureSpec::default()
    }
}

fn trend_figure(
    points: Option<&[MonthlyPoint]>,
    title: &str,
    y_label: &str,
    color: &str,
    theme: &FigureTheme,
) -> FigureSpec {
    let Some(points) = points else {
        return FigureSpec {
            kind: Some(ChartKind::Line),
            title: format!("{title}{UNAVAILABLE_SUFFIX}"),
            x_tick_angle: Some(45),
            theme: Some(theme.clone()),
            ..FigureSpec::default()
        };
    };

    FigureSpec {
        kind: Some(ChartKind::Line),
        title: title.to_string(),
        x_label: Some("month".to_string()),
        y_label: Some(y_label.to_string()),
        points: points
            .iter()
            .map(|p| FigurePoint {
                label: p.label(),
                value: p.value,
                text: None,
                color: color.to_string(),
            })
            .collect(),
        markers: true,
        x_tick_angle: Some(45),
        theme: Some(theme.clone()),
        ..FigureSpec::default()
    }
}
