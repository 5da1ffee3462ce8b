//! Plain-text rendering of simulation results.
//!
//! Produces the two views a console front end prints: an ASCII Gantt chart
//! and a metrics table.


use crate::models::{SegmentKind, Tick, Timeline};
use crate::scheduler::SimulationMetrics;

/// Characters drawn per tick in the Gantt chart.
const CHARS_PER_TICK: usize = 4;

/// Renders a two-line ASCII Gantt chart.
///
/// The first line holds one labelled block per segment (`P<id>`, `Idle`,
/// `CS`), the second the start tick of each block and the final tick.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::{SegmentKind, Timeline};
/// use u_cpu_schedule::report::render_gantt;
///
/// let mut timeline = Timeline::new();
/// timeline.push(SegmentKind::Execution(1), 0, 2);
/// assert_eq!(render_gantt(&timeline), "|P1     |\n0       2");
/// ```
pub fn render_gantt(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "No Gantt chart activity.".to_string();
    }

    let mut blocks = String::new();
    let mut markers = String::new();
    let mut marker_end = 0usize;

    for segment in timeline.segments() {
        let label = match segment.kind {
            SegmentKind::Execution(id) => format!("P{id}"),
            SegmentKind::Idle => "Idle".to_string(),
            SegmentKind::ContextSwitch => "CS".to_string(),
        };
        let width = (segment.duration() as usize * CHARS_PER_TICK).saturating_sub(1);
        blocks.push_str(&format!("|{label:<width$}"));
        push_marker(&mut markers, &mut marker_end, segment.start);
    }
    blocks.push('|');
    push_marker(&mut markers, &mut marker_end, timeline.end_time());

    format!("{blocks}\n{markers}")
}

fn push_marker(markers: &mut String, marker_end: &mut usize, tick: Tick) {
    let text = tick.to_string();
    let target = tick as usize * CHARS_PER_TICK;
    let padding = target.saturating_sub(*marker_end);
    markers.extend(std::iter::repeat(' ').take(padding));
    markers.push_str(&text);
    *marker_end = target.max(*marker_end) + text.len();
}

/// Renders the per-process metrics table followed by the averages.
///
/// Columns: PID, arrival, burst, start, completion, turnaround, response.
pub fn render_metrics(metrics: &SimulationMetrics) -> String {
    let mut out = String::from("PID\tAT\tBT\tST\tCT\tTAT\tRT\n");
    for m in metrics.per_process.values() {
        out.push_str(&format!(
            "P{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            m.process_id, m.arrival, m.burst, m.start, m.completion, m.turnaround, m.response
        ));
    }
    out.push_str(&format!(
        "\nAverage Turnaround Time: {:.2}\nAverage Response Time: {:.2}\n",
        metrics.avg_turnaround, metrics.avg_response
    ));
    out
}
