use std::f32::consts::PI;
use crate::error::ChartError;
use crate::renderer::document::layout::{estimate_text_width, truncate_to_width, Color, Element};

const PALETTE: [Color; 8] = [
    Color::rgb(0.20, 0.45, 0.80),
    Color::rgb(0.95, 0.55, 0.15),
    Color::rgb(0.25, 0.65, 0.35),
    Color::rgb(0.85, 0.25, 0.25),
    Color::rgb(0.55, 0.40, 0.75),
    Color::rgb(0.55, 0.35, 0.25),
    Color::rgb(0.90, 0.45, 0.70),
    Color::rgb(0.50, 0.50, 0.50),
];

const TITLE_SIZE: f32 = 11.0;
const TITLE_SPACE: f32 = 20.0;
const LABEL_SIZE: f32 = 7.0;
const VALUE_SIZE: f32 = 7.0;
const AXIS_GUTTER: f32 = 24.0;
const LABEL_GUTTER: f32 = 16.0;
const MIN_PLOT: f32 = 20.0;

pub fn palette(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// 차트를 그릴 영역. 좌상단 기준, y는 아래로 증가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
    /// 축 최댓값. 없으면 막대 최댓값을 쓴다.
    pub max_value: Option<f64>,
    pub value_suffix: &'static str,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            title: title.into(),
            bars,
            max_value: None,
            value_suffix: "",
        }
    }

    pub fn with_max(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.value_suffix = suffix;
        self
    }

    pub fn render(&self, area: ChartArea) -> Result<Vec<Element>, ChartError> {
        let data_max = self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        if self.bars.is_empty() || data_max <= 0.0 {
            return Err(ChartError::NoData(self.title.clone()));
        }
        let axis_max = self.max_value.unwrap_or(data_max).max(data_max);

        let plot_left = area.x + AXIS_GUTTER;
        let plot_top = area.y + TITLE_SPACE + VALUE_SIZE + 4.0;
        let plot_bottom = area.y + area.height - LABEL_GUTTER;
        let plot_width = area.width - AXIS_GUTTER;
        let plot_height = plot_bottom - plot_top;
        let slot = plot_width / self.bars.len() as f32;
        if plot_height < MIN_PLOT || slot < 4.0 {
            return Err(ChartError::AreaTooSmall(self.title.clone()));
        }

        let mut elements = vec![Element::text(
            area.x,
            area.y + TITLE_SIZE,
            TITLE_SIZE,
            true,
            self.title.clone(),
        )];

        // 축
        elements.push(Element::line(
            (plot_left, plot_bottom),
            (plot_left + plot_width, plot_bottom),
            Color::GRAY,
        ));
        elements.push(Element::line((plot_left, plot_top), (plot_left, plot_bottom), Color::GRAY));
        elements.push(Element::text(
            area.x,
            plot_top + VALUE_SIZE,
            VALUE_SIZE,
            false,
            format_value(axis_max, self.value_suffix),
        ));
        elements.push(Element::text(area.x, plot_bottom, VALUE_SIZE, false, "0".to_string()));

        let bar_width = slot * 0.6;
        for (i, bar) in self.bars.iter().enumerate() {
            let height = (bar.value.max(0.0) / axis_max) as f32 * plot_height;
            let x = plot_left + slot * i as f32 + (slot - bar_width) / 2.0;
            let top = plot_bottom - height;

            if height > 0.0 {
                elements.push(Element::rect(x, top, bar_width, height, palette(i)));
            }

            let value_text = format_value(bar.value, self.value_suffix);
            let value_x = x + (bar_width - estimate_text_width(&value_text, VALUE_SIZE)) / 2.0;
            elements.push(Element::text(value_x.max(plot_left), top - 2.0, VALUE_SIZE, false, value_text));

            let label = truncate_to_width(&bar.label, slot - 2.0, LABEL_SIZE);
            let label_x = plot_left + slot * i as f32 + (slot - estimate_text_width(&label, LABEL_SIZE)) / 2.0;
            elements.push(Element::text(label_x, plot_bottom + LABEL_SIZE + 3.0, LABEL_SIZE, false, label));
        }

        Ok(elements)
    }
}

#[derive(Debug, Clone)]
pub struct RingChart {
    pub title: String,
    pub slices: Vec<Bar>,
}

impl RingChart {
    pub fn new(title: impl Into<String>, slices: Vec<Bar>) -> Self {
        Self {
            title: title.into(),
            slices,
        }
    }

    pub fn render(&self, area: ChartArea) -> Result<Vec<Element>, ChartError> {
        let total: f64 = self.slices.iter().map(|s| s.value.max(0.0)).sum();
        if total <= 0.0 {
            return Err(ChartError::NoData(self.title.clone()));
        }

        let body_top = area.y + TITLE_SPACE;
        let body_height = area.height - TITLE_SPACE;
        let diameter = body_height.min(area.width / 2.0);
        if diameter < MIN_PLOT * 2.0 {
            return Err(ChartError::AreaTooSmall(self.title.clone()));
        }

        let outer = diameter / 2.0;
        let inner = outer * 0.55;
        let cx = area.x + outer;
        let cy = body_top + body_height / 2.0;

        let mut elements = vec![Element::text(
            area.x,
            area.y + TITLE_SIZE,
            TITLE_SIZE,
            true,
            self.title.clone(),
        )];

        // 12시 방향부터 시계 방향
        let mut start = -PI / 2.0;
        for (i, slice) in self.slices.iter().enumerate() {
            let value = slice.value.max(0.0);
            if value <= 0.0 {
                continue;
            }
            let sweep = (value / total) as f32 * 2.0 * PI;
            elements.push(Element::Polygon {
                points: ring_segment(cx, cy, inner, outer, start, start + sweep),
                color: palette(i),
            });
            start += sweep;
        }

        // 범례
        let legend_x = area.x + diameter + 20.0;
        let legend_width = area.x + area.width - legend_x - 14.0;
        let row = 14.0;
        let max_rows = ((body_height / row).floor() as usize).max(1);
        for (i, slice) in self.slices.iter().take(max_rows).enumerate() {
            let y = body_top + row * i as f32;
            elements.push(Element::rect(legend_x, y + 2.0, 8.0, 8.0, palette(i)));
            let pct = slice.value.max(0.0) / total * 100.0;
            let text = format!("{} ({}, {:.1}%)", slice.label, slice.value, pct);
            elements.push(Element::text(
                legend_x + 14.0,
                y + 9.0,
                8.0,
                false,
                truncate_to_width(&text, legend_width, 8.0),
            ));
        }

        Ok(elements)
    }
}

fn ring_segment(cx: f32, cy: f32, inner: f32, outer: f32, start: f32, end: f32) -> Vec<(f32, f32)> {
    let steps = (((end - start) / (PI / 36.0)).ceil() as usize).max(2);
    let mut points = Vec::with_capacity((steps + 1) * 2);

    for s in 0..=steps {
        let a = start + (end - start) * s as f32 / steps as f32;
        points.push((cx + outer * a.cos(), cy + outer * a.sin()));
    }
    for s in (0..=steps).rev() {
        let a = start + (end - start) * s as f32 / steps as f32;
        points.push((cx + inner * a.cos(), cy + inner * a.sin()));
    }

    points
}

fn format_value(value: f64, suffix: &str) -> String {
    if value.fract() == 0.0 {
        format!("{}{}", value as i64, suffix)
    } else {
        format!("{:.1}{}", value, suffix)
    }
}
