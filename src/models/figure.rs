use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// Shared look of every figure: transparent background, light text, centred title.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureTheme {
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font_color: String,
    pub title_x: f64,
    pub title_font_size: u32,
    /// left, right, top, bottom
    pub margin: [u32; 4],
}

impl Default for FigureTheme {
    fn default() -> Self {
        Self {
            plot_bgcolor: "rgba(0,0,0,0)".to_string(),
            paper_bgcolor: "rgba(0,0,0,0)".to_string(),
            font_color: "white".to_string(),
            title_x: 0.5,
            title_font_size: 16,
            margin: [20, 20, 40, 20],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigurePoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub color: String,
}

/// Structured chart description handed to the presentation sink.
///
/// A placeholder figure has no kind and no points.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FigureSpec {
    pub kind: Option<ChartKind>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub points: Vec<FigurePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
    /// Ring hole ratio for pie charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    pub markers: bool,
    pub x_tick_angle: Option<i32>,
    pub theme: Option<FigureTheme>,
}

impl FigureSpec {
    pub fn is_placeholder(&self) -> bool {
        self.kind.is_none() && self.points.is_empty()
    }
}

/// The four dashboard charts.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Charts {
    pub availability: FigureSpec,
    pub maintenance_types: FigureSpec,
    pub mtbf: FigureSpec,
    pub mttr: FigureSpec,
}

impl Charts {
    pub fn placeholders() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FigureSpec> {
        [
            &self.availability,
            &self.maintenance_types,
            &self.mtbf,
            &self.mttr,
        ]
        .into_iter()
    }
}
