// Chart rendering with plotters' bitmap backend.
//
// File names are deterministic so reruns overwrite the previous output.
// Callers are expected to skip rendering entirely when a dataset is empty;
// an empty series here is an error, not a blank image.
use chrono::{Duration, NaiveDate};
use plotters::element::Pie;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

pub const TOP_ITEMS_FILE: &str = "top_items.png";
pub const DAILY_ORDERS_FILE: &str = "daily_orders.png";
pub const PAYMENT_METHODS_FILE: &str = "payment_methods.png";

const PIE_PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

/// Bar chart of the top-N items by order count, one labeled bar per item.
pub fn render_top_items(
    items: &[(String, usize)],
    top_n: usize,
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let top: Vec<&(String, usize)> = items.iter().take(top_n).collect();
    if top.is_empty() {
        return Err("no item counts to plot".into());
    }
    let max_count = top.iter().map(|(_, c)| *c).max().unwrap_or(0);

    let path = out_dir.join(TOP_ITEMS_FILE);
    let root = BitMapBackend::new(&path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Top {} Most Ordered Items", top.len()),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..top.len(), 0..max_count + max_count / 5 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Number of Orders")
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(i, (_, count))| {
        let color = Palette99::pick(i).mix(0.9);
        let mut bar = Rectangle::new([(i, 0), (i + 1, *count)], color.filled());
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    // Item name and count above each bar; the x axis itself stays numeric.
    chart.draw_series(top.iter().enumerate().map(|(i, (item, count))| {
        EmptyElement::at((i, *count))
            + Text::new(
                format!("{} ({})", item, count),
                (5, -15),
                ("sans-serif", 14).into_font(),
            )
    }))?;

    root.present()?;
    Ok(())
}

/// Line chart of order volume per calendar date, chronological. Days with
/// no orders are left as gaps in the series.
pub fn render_daily_trend(
    daily: &[(NaiveDate, usize)],
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let (Some(first), Some(last)) = (daily.first(), daily.last()) else {
        return Err("no daily volume to plot".into());
    };
    // A single-day dataset still needs a non-degenerate x range.
    let x_end = if last.0 > first.0 {
        last.0
    } else {
        first.0 + Duration::days(1)
    };
    let max_count = daily.iter().map(|(_, c)| *c).max().unwrap_or(0);

    let path = out_dir.join(DAILY_ORDERS_FILE);
    let root = BitMapBackend::new(&path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Trend of Daily Orders", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first.0..x_end, 0..max_count + max_count / 5 + 1)?;

    chart.configure_mesh().y_desc("Number of Orders").draw()?;

    chart
        .draw_series(LineSeries::new(
            daily.iter().map(|(d, c)| (*d, *c)),
            &BLUE,
        ))?
        .label("Orders per day")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(daily.iter().map(|(d, c)| Circle::new((*d, *c), 2, BLUE.filled())))?;

    chart.configure_series_labels().draw()?;

    root.present()?;
    Ok(())
}

/// Pie chart of the payment-method split. Only called when the Payment
/// Method column exists in the input.
pub fn render_payment_split(
    split: &[(String, usize)],
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    if split.is_empty() {
        return Err("no payment counts to plot".into());
    }

    let path = out_dir.join(PAYMENT_METHODS_FILE);
    let root = BitMapBackend::new(&path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Payment Method Distribution",
        ("sans-serif", 30).into_font(),
    )?;

    let dims = root.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = (dims.0.min(dims.1) as f64 / 2.0) * 0.7;
    let sizes: Vec<f64> = split.iter().map(|(_, c)| *c as f64).collect();
    let colors: Vec<RGBColor> = (0..split.len())
        .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
        .collect();
    let labels: Vec<String> = split
        .iter()
        .map(|(method, count)| format!("{} ({})", method, count))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 18).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
