use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartLayout, ChartService, LineChartData, PlotPoint, ValueScale},
    logging::{LogComponent, get_logger},
};
use crate::log_debug;

const BACKGROUND: &str = "#1e1e1e";
const GRID: &str = "#333333";
const AXIS_TEXT: &str = "#aaaaaa";
const VALUE_TICKS: usize = 5;

/// Canvas 2D line chart renderer.
pub struct LineChartRenderer {
    layout: ChartLayout,
}

impl LineChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { layout: ChartLayout::new(width as f64, height as f64) }
    }

    fn context_for(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.layout.width as u32);
        canvas.set_height(self.layout.height as u32);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Draw `data` onto `canvas`, replacing whatever was there.
    pub fn render(&self, canvas: &HtmlCanvasElement, data: &LineChartData) -> Result<(), JsValue> {
        let ctx = self.context_for(canvas)?;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.layout.width, self.layout.height);

        let Some(scale) = ValueScale::from_data(data) else {
            get_logger().warn(LogComponent::Infrastructure("LineChartRenderer"), "No series data to render");
            return self.render_no_data(&ctx);
        };

        self.render_grid(&ctx, &scale)?;
        self.render_category_labels(&ctx, &data.labels)?;

        for dataset in &data.datasets {
            let points = ChartService::plot_points(dataset, &scale, &self.layout);
            self.render_fill(&ctx, &points, &dataset.background_color);
            self.render_line(&ctx, &points, &dataset.border_color)?;
        }

        log_debug!(
            LogComponent::Infrastructure("LineChartRenderer"),
            "Rendered {} points",
            data.point_count()
        );
        Ok(())
    }

    fn render_grid(&self, ctx: &CanvasRenderingContext2d, scale: &ValueScale) -> Result<(), JsValue> {
        let left = self.layout.plot_left();
        let right = left + self.layout.plot_width();

        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID);
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("right");

        for value in scale.ticks(VALUE_TICKS) {
            let y = scale.y_for(value, &self.layout);
            ctx.begin_path();
            ctx.move_to(left, y);
            ctx.line_to(right, y);
            ctx.stroke();
            ctx.fill_text(&format!("${:.2}", value), left - 6.0, y + 4.0)?;
        }
        Ok(())
    }

    fn render_category_labels(&self, ctx: &CanvasRenderingContext2d, labels: &[String]) -> Result<(), JsValue> {
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_text_align("center");
        let y = self.layout.plot_bottom() + 16.0;
        for (i, label) in labels.iter().enumerate() {
            let x = ChartService::x_for(i, labels.len(), &self.layout);
            ctx.fill_text(label, x, y)?;
        }
        Ok(())
    }

    fn render_fill(&self, ctx: &CanvasRenderingContext2d, points: &[PlotPoint], color: &str) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let bottom = self.layout.plot_bottom();
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.move_to(first.x, bottom);
        for p in points {
            ctx.line_to(p.x, p.y);
        }
        ctx.line_to(last.x, bottom);
        ctx.close_path();
        ctx.fill();
    }

    fn render_line(&self, ctx: &CanvasRenderingContext2d, points: &[PlotPoint], color: &str) -> Result<(), JsValue> {
        ctx.set_stroke_style_str(color);
        ctx.set_fill_style_str(color);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(p.x, p.y);
            } else {
                ctx.line_to(p.x, p.y);
            }
        }
        ctx.stroke();

        for p in points {
            ctx.begin_path();
            ctx.arc(p.x, p.y, 3.0, 0.0, std::f64::consts::TAU)?;
            ctx.fill();
        }
        Ok(())
    }

    fn render_no_data(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("14px sans-serif");
        ctx.set_text_align("center");
        ctx.fill_text("No prediction data", self.layout.width / 2.0, self.layout.height / 2.0)
    }
}
