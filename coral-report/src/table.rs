use coral_trend::display::{format_percent, round_record};
use coral_trend::{TrendRecord, TrendSeries};

const HEADERS: [&str; 3] = ["Year", "Bleached", "Remaining"];

/// One-line status for the selected year.
pub fn render_status(record: &TrendRecord) -> String {
    let r = round_record(record);
    format!(
        "{}: {} bleached, {} remaining",
        r.year,
        format_percent(r.bleach_percent),
        format_percent(r.remain_percent)
    )
}

/// The full series as a fixed-width text table.
pub fn render_table(series: &TrendSeries) -> String {
    let mut out = format!(
        "{:>6}  {:>10}  {:>10}\n",
        HEADERS[0], HEADERS[1], HEADERS[2]
    );
    out.push_str(&format!("{:-<6}  {:-<10}  {:-<10}\n", "", "", ""));
    for record in series.records() {
        let r = round_record(record);
        out.push_str(&format!(
            "{:>6}  {:>10}  {:>10}\n",
            r.year,
            format_percent(r.bleach_percent),
            format_percent(r.remain_percent)
        ));
    }
    out
}
