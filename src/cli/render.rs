//! Text rendering for the shell screens.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eduguard_models::{DashboardStats, RosterState, Settings, UsageReport};

/// Width of a full bar in the usage chart.
const CHART_WIDTH: usize = 30;

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// The student list. In selection mode the first column shows a check mark
/// for selected rows.
pub fn roster_table(roster: &RosterState) -> String {
    if roster.is_empty() {
        return "No students registered yet".to_string();
    }

    let mut table = Table::new();
    let mut header = Vec::new();
    if roster.selection_mode {
        header.push(header_cell(""));
    }
    header.extend([
        header_cell("#"),
        header_cell("Name"),
        header_cell("Grade"),
        header_cell("Student ID"),
        header_cell("Email"),
        header_cell("Phone"),
        header_cell("Device"),
    ]);
    table.set_header(header);
    apply_table_style(&mut table);

    for (index, student) in roster.students.iter().enumerate() {
        let mut row = Vec::new();
        if roster.selection_mode {
            row.push(if roster.is_selected(student.id) {
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                dim_cell("·")
            });
        }
        let name = if student.is_active {
            Cell::new(&student.name)
        } else {
            dim_cell(format!("{} (inactive)", student.name))
        };
        row.extend([
            dim_cell(index + 1),
            name,
            Cell::new(&student.grade),
            Cell::new(&student.student_id),
            Cell::new(&student.email),
            Cell::new(&student.phone_number),
            match &student.device_id {
                Some(device) => Cell::new(device),
                None => dim_cell("-"),
            },
        ]);
        table.add_row(row);
    }
    let number_column = usize::from(roster.selection_mode);
    align_column(&mut table, number_column, CellAlignment::Right);

    table.to_string()
}

pub fn dashboard_cards(stats: &DashboardStats) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let cards = stats.cards();
    table.set_header(cards.iter().map(|card| header_cell(card.title)));
    table.add_row(
        cards
            .iter()
            .map(|card| Cell::new(&card.value).add_attribute(Attribute::Bold)),
    );
    table.add_row(cards.iter().map(|card| dim_cell(card.subtitle.unwrap_or(""))));
    for index in 0..cards.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table.to_string()
}

/// Horizontal bar chart of daily usage, scaled to the busiest day.
pub fn usage_chart(report: &UsageReport) -> String {
    let max = report.max_usage();
    let mut lines = vec!["Daily App Usage".to_string()];
    for (usage, fraction) in report.daily_usage.iter().zip(report.bar_fractions()) {
        let width = (fraction * CHART_WIDTH as f32).round() as usize;
        lines.push(format!(
            "{:>3} │{:<chart$}│ {:.1}h",
            usage.day,
            "█".repeat(width),
            usage.hours,
            chart = CHART_WIDTH
        ));
    }
    lines.push(format!("    0h{:>width$}", format!("{}h", max as u32), width = CHART_WIDTH));
    lines.join("\n")
}

pub fn key_metrics(report: &UsageReport) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Avg Screen Time"),
        header_cell("Violations"),
        header_cell("Compliance Rate"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} hrs", report.avg_screen_time_hours)),
        Cell::new(format!("{} this week", report.violations_this_week)),
        Cell::new(format!("{}% overall", report.compliance_rate)),
    ]);
    table.to_string()
}

pub fn weekly_summary(report: &UsageReport) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Weekly Summary"), header_cell("")]);
    for (label, value) in report.summary_rows() {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table.to_string()
}

pub fn settings_table(settings: &Settings) -> String {
    let toggle = |on: bool| {
        if on {
            Cell::new("On").fg(Color::Green)
        } else {
            dim_cell("Off")
        }
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Setting"), header_cell("")]);
    table.add_row(vec![Cell::new("Dark Theme"), toggle(settings.dark_theme)]);
    table.add_row(vec![
        Cell::new("Push Notifications"),
        toggle(settings.notifications),
    ]);
    table.to_string()
}
