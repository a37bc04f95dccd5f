//! Plain aligned-table rendering for terminal output.

/// Widest a single cell may render before truncation.
const MAX_CELL_WIDTH: usize = 48;

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(header, *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format_cell(value, *width)
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn format_cell(value: &str, width: usize) -> String {
    let truncated = truncate_text(value, width);
    format!("{truncated:<width$}")
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_to_widest_cell() {
        let rendered = render_entity_table(
            &["id", "name"],
            &[
                vec!["aut-1".to_string(), "Dr. John Smith".to_string()],
                vec!["aut-2".to_string(), "Dr. Jane Doe".to_string()],
            ],
        );
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        // Both data lines start their name column at the same offset.
        assert_eq!(
            lines[2].find("Dr. John Smith"),
            lines[3].find("Dr. Jane Doe")
        );
    }

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        let long = "x".repeat(200);
        let rendered = render_entity_table(&["value"], &[vec![long]]);
        let data_line = rendered.lines().nth(2).unwrap();
        assert!(data_line.trim_end().chars().count() <= MAX_CELL_WIDTH);
        assert!(data_line.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rendered = render_entity_table(&["a", "b"], &[vec!["only-a".to_string()]]);
        let data_line = rendered.lines().nth(2).unwrap();
        assert!(data_line.contains('-'));
    }
}
