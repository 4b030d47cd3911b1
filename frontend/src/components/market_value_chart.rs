use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::LineChartConfig;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarketValueChartProps {
    /// `None` while the monthly series has not loaded
    pub chart: Option<LineChartConfig>,
}

pub struct MarketValueChart {
    canvas_ref: NodeRef,
}

impl Component for MarketValueChart {
    type Message = ();
    type Properties = MarketValueChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props().chart != old_props.chart
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // Each render replaces the previous drawing entirely
        if let Some(config) = &ctx.props().chart {
            self.draw_chart(config);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = ctx
            .props()
            .chart
            .as_ref()
            .map(|c| c.title.clone())
            .unwrap_or_default();

        html! {
            <div class="chart-container">
                <h3 class="chart-title">{title}</h3>
                {match &ctx.props().chart {
                    None => html! {
                        <div class="chart-loading">
                            <p>{"Loading chart data..."}</p>
                        </div>
                    },
                    Some(config) if config.is_empty() => html! {
                        <div class="chart-empty">
                            <p>{"No market value history yet"}</p>
                        </div>
                    },
                    Some(_) => html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            id="marketValueChart"
                            class="chart-canvas"
                            width="800"
                            height="350"
                        ></canvas>
                    },
                }}
            </div>
        }
    }
}

impl MarketValueChart {
    fn draw_chart(&self, config: &LineChartConfig) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        if let Err(e) = draw_on_canvas(canvas, config) {
            warn!("Failed to draw market value chart: {}", e);
        }
    }
}

/// Draw `config` onto `canvas`, replacing whatever it showed before
pub fn draw_on_canvas(canvas: HtmlCanvasElement, config: &LineChartConfig) -> Result<(), String> {
    let Some((y_min, y_max)) = config.value_bounds() else {
        return Ok(());
    };

    canvas.set_width(800);
    canvas.set_height(350);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let last = (config.values.len() - 1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5..last + 0.5, y_min..y_max)
        .map_err(|e| e.to_string())?;

    let labels = &config.labels;
    let x_label = |x: &f64| {
        let index = x.round();
        if (x - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        labels.get(index as usize).cloned().unwrap_or_default()
    };

    chart
        .configure_mesh()
        .y_desc(config.series_label.as_str())
        .x_label_formatter(&x_label)
        .y_label_formatter(&|v| format!("{:.2}", v))
        .x_labels(labels.len() + 1)
        .y_labels(8)
        .label_style(("sans-serif", 12, &RGBColor(90, 90, 90)))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()
        .map_err(|e| e.to_string())?;

    let (br, bg, bb) = config.border_color;
    let (fr, fg, fb) = config.background_color;
    let border = RGBColor(br, bg, bb);
    let fill = RGBColor(fr, fg, fb).mix(config.fill_opacity);
    let points: Vec<(f64, f64)> = config
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let baseline = 0.0_f64.clamp(y_min, y_max);
    chart
        .draw_series(AreaSeries::new(points.iter().copied(), baseline, fill.filled()))
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), border.stroke_width(2)))
        .map_err(|e| e.to_string())?
        .label(config.series_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], border));

    chart
        .draw_series(points.iter().map(|p| Circle::new(*p, 3, border.filled())))
        .map_err(|e| e.to_string())?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&RGBColor(220, 220, 220))
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}
