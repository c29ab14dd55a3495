//! Terminal rendering for dashboard views

use colored::{ColoredString, Colorize};

use callboard::services::view::{CallDetail, CallTable, DashboardCharts, StatCard};
use callboard::StatusTone;

/// Render the four stat cards.
pub fn stats(cards: &[StatCard]) {
    for card in cards {
        println!(
            "  {}  {}",
            format!("{:>6}", card.value).cyan().bold(),
            card.title.bold()
        );
        println!("          {}", card.description.dimmed());
    }
}

/// Render the four chart datasets as text.
pub fn charts(charts: &DashboardCharts) {
    println!("{}", "Call Outcomes Distribution".bold());
    if charts.outcomes.is_empty() {
        println!("  {}", "No data available for charts".dimmed());
    }
    for slice in &charts.outcomes {
        println!(
            "  {:<30} {:>4} calls ({}%)",
            slice.label,
            slice.value,
            slice.percentage
        );
    }

    println!("\n{}", "Call Sessions Performance".bold());
    for session in &charts.sessions {
        println!(
            "  {:<10} total {:<4} appointments {:<4} AI interest {:<4} success {}%",
            session.short_id.cyan(),
            session.total_calls,
            session.appointments,
            session.ai_interest,
            session.success_rate
        );
    }

    println!("\n{}", "Call Engagement Analysis".bold());
    for level in &charts.engagement {
        println!(
            "  {:<10} total {:<4} appointments {:<4} AI interest {:<4} success {}%",
            level.level.label().cyan(),
            level.total_calls,
            level.appointments,
            level.ai_interest,
            level.success_rate
        );
    }

    println!("\n{}", "Interest vs Booking Correlation".bold());
    for point in &charts.correlation {
        println!(
            "  ({}, {}) {:<32} {:>4} calls ({}%)",
            point.x,
            point.y,
            point.label,
            point.count,
            point.percentage
        );
    }
}

/// Render the filtered call table.
pub fn table(table: &CallTable) {
    if table.total_records == 0 {
        println!("{}", "No call records available.".dimmed());
        return;
    }

    println!(
        "{} ({} total)",
        "Call Records".bold(),
        table.total_records
    );
    if !table.status_options.is_empty() {
        println!(
            "{} all, {}",
            "Statuses:".dimmed(),
            table.status_options.join(", ").dimmed()
        );
    }
    println!();

    if table.rows.is_empty() {
        println!(
            "{}",
            "No calls found matching your search criteria.".dimmed()
        );
        return;
    }

    for row in &table.rows {
        println!(
            "  {:<28} {:<16} {:<14} {:<14} appointment: {:<8} AI: {}",
            row.business_name.bold(),
            row.phone_number,
            toned(&row.status, row.status_tone),
            row.call_id.dimmed(),
            row.appointment,
            row.ai_interest
        );
    }
}

/// Render the detail view for one call.
pub fn detail(detail: &CallDetail) {
    println!(
        "{} {}",
        "Call Details -".bold(),
        detail.business_name.cyan().bold()
    );
    println!(
        "{} {} | {} {}",
        "Call ID:".dimmed(),
        detail.call_id,
        "Session:".dimmed(),
        detail.session
    );
    println!();

    println!("{}", "Contact Information".bold());
    println!("  Phone Number: {}", detail.phone_number);
    println!("  Status: {}", toned(&detail.status, detail.status_tone));
    println!();

    println!("{}", "Call Outcomes".bold());
    println!(
        "  Appointment Booked: {}",
        yes_no(detail.appointment_booked)
    );
    println!("  Need AI Agent: {}", yes_no(detail.ai_interest));
    println!();

    println!("{}", "Call Summary".bold());
    println!("  {}", detail.summary);
    println!();

    println!("{}", "Call Transcript".bold());
    println!("  {}", detail.transcript);

    // Absent recording suppresses the section entirely.
    if let Some(url) = &detail.recording_url {
        println!();
        println!("{}", "Call Recording".bold());
        println!("  {}", url.underline());
    }
}

fn toned(label: &str, tone: StatusTone) -> ColoredString {
    match tone {
        StatusTone::Success => label.green(),
        StatusTone::Info => label.blue(),
        StatusTone::Danger => label.red(),
        StatusTone::Neutral => label.normal(),
    }
}

fn yes_no(flag: bool) -> ColoredString {
    if flag {
        "Yes".green()
    } else {
        "No".dimmed()
    }
}
