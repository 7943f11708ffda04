use glucograph::utils::colors::{RED, colorize};
use glucograph::utils::formatting::{strip_ansi, visible_width};
use glucograph::utils::table::Table;

#[test]
fn test_visible_width_ignores_colors() {
    let cell = colorize("130", RED);
    assert_eq!(strip_ansi(&cell), "130");
    assert_eq!(visible_width(&cell), 3);
}

#[test]
fn test_visible_width_counts_wide_glyphs() {
    assert_eq!(visible_width("✅"), 2);
    assert_eq!(visible_width("✅ ok"), 5);
}

#[test]
fn test_stray_escape_does_not_hide_text() {
    assert_eq!(strip_ansi("\x1bab"), "\x1bab");
    assert!(visible_width("\x1bab") >= 2);
}

#[test]
fn test_table_aligns_colored_and_wide_cells() {
    let mut table = Table::with_headers(&["A", "B"]);
    table.add_row(vec![colorize("130", RED), "x".to_string()]);
    table.add_row(vec!["✅".to_string(), "y".to_string()]);

    let out = table.render();
    let lines: Vec<String> = out.lines().map(strip_ansi).collect();

    assert_eq!(lines[0], "A   B ");
    assert_eq!(lines[2], "130 x ");
    assert_eq!(lines[3], "✅  y ");
    for line in &lines {
        assert_eq!(visible_width(line), 6);
    }
}
