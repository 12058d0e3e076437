//! Integration tests for the progress bar redraw policy.
//!
//! The bar is redrawn only when the percentage rises by a full point, the
//! total changes, the final iteration is reached, or nothing was drawn yet.

use tinylog::{BAR_WIDTH, CaptureBuffer, Logger, Severity, Sink};

fn capture() -> (Logger, CaptureBuffer, CaptureBuffer) {
    let standard = CaptureBuffer::new();
    let diagnostic = CaptureBuffer::new();
    let logger = Logger::with_sink(Severity::Off, Sink::new(standard.clone(), diagnostic.clone()));
    (logger, standard, diagnostic)
}

fn frames(output: &str) -> Vec<&str> {
    output.split_terminator('\r').collect()
}

fn percentage(frame: &str) -> u32 {
    frame
        .rsplit(' ')
        .next()
        .and_then(|pct| pct.strip_suffix('%'))
        .and_then(|pct| pct.parse().ok())
        .unwrap_or_else(|| panic!("no percentage in {frame:?}"))
}

// ============================================================================
// Rendering
// ============================================================================

/// Verifies the bar is drawn to stdout even at threshold OFF.
#[test]
fn progress_ignores_threshold_and_uses_standard_stream() {
    let (logger, standard, diagnostic) = capture();
    assert!(logger.display_progress(0, 10));
    assert!(standard.contents().ends_with("] 0%\r"));
    assert!(diagnostic.contents().is_empty());
}

/// Verifies the indent, bar width and fill of a half-way frame.
#[test]
fn frame_layout_aligns_with_tag_column() {
    let (logger, standard, _) = capture();
    logger.display_progress(1, 3);
    let output = standard.contents();
    let frame = frames(&output)[0];

    let indent = " ".repeat(Severity::TAG_WIDTH);
    let bar = frame.strip_prefix(&indent).expect("indent");
    let inner = bar
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .map(|(inner, _)| inner)
        .expect("brackets");
    assert_eq!(inner.len(), BAR_WIDTH);
    assert_eq!(inner.matches('=').count(), BAR_WIDTH / 2);
    assert_eq!(percentage(frame), 50);
}

// ============================================================================
// Redraw Policy
// ============================================================================

/// Verifies a long session redraws roughly once per percent.
#[test]
fn thousand_iterations_redraw_about_once_per_percent() {
    let (logger, standard, _) = capture();
    let redraws = (0..1000)
        .filter(|&i| logger.display_progress(i, 1000))
        .count();

    let output = standard.contents();
    let frames = frames(&output);
    assert_eq!(frames.len(), redraws);
    assert!((90..=101).contains(&redraws), "{redraws}");

    let percentages: Vec<u32> = frames.iter().map(|frame| percentage(frame)).collect();
    assert!(percentages.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(percentages.first(), Some(&0));
    assert_eq!(percentages.last(), Some(&100));
}

/// Verifies the final iteration is drawn even when unchanged.
#[test]
fn final_iteration_always_redraws() {
    let (logger, _, _) = capture();
    assert!(logger.display_progress(998, 1000));
    assert!(logger.display_progress(999, 1000));
    assert!(logger.display_progress(999, 1000));
}

/// Verifies sub-point advances are suppressed.
#[test]
fn small_steps_are_suppressed_until_a_point_accumulates() {
    let (logger, _, _) = capture();
    assert!(logger.display_progress(0, 10_000));
    assert!(!logger.display_progress(50, 10_000));
    assert!(logger.display_progress(100, 10_000));
}

/// Verifies a changed total forces a redraw.
#[test]
fn new_total_redraws() {
    let (logger, _, _) = capture();
    assert!(logger.display_progress(10, 1000));
    assert!(logger.display_progress(10, 2000));
}

// ============================================================================
// Degenerate Totals
// ============================================================================

/// Verifies totals of 0 and 1 and overshoot render a full bar.
#[test]
fn degenerate_totals_render_complete_bar() {
    let (logger, standard, _) = capture();
    assert!(logger.display_progress(0, 1));
    assert!(logger.display_progress(0, 0));
    assert!(logger.display_progress(7, 5));

    let output = standard.contents();
    for frame in frames(&output) {
        assert_eq!(percentage(frame), 100);
        assert!(frame.contains(&"=".repeat(BAR_WIDTH)));
    }
}

// ============================================================================
// Session End
// ============================================================================

/// Verifies finishing ends the bar's line so the next log line starts fresh.
#[test]
fn finish_progress_moves_to_next_line() {
    let standard = CaptureBuffer::new();
    let logger = Logger::with_sink(Severity::Info, Sink::new(standard.clone(), CaptureBuffer::new()));
    for i in 0..3 {
        logger.display_progress(i, 3);
    }
    logger.finish_progress();
    logger.log(Severity::Info, &[&"done"]);

    let output = standard.contents();
    assert!(output.contains("] 100%\r\n[INFO]     "), "{output:?}");
    assert!(output.ends_with(" s done\n"));
}
