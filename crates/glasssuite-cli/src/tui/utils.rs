use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::CliError;

pub fn read_tail_lines(path: &Path, max_lines: usize) -> Result<Vec<String>, CliError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut buffer: std::collections::VecDeque<String> = std::collections::VecDeque::new();
    for line in reader.lines() {
        let line = line?;
        if buffer.len() == max_lines {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
    Ok(buffer.into_iter().collect())
}

pub fn append_line(path: &Path, line: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Clip or pad `text` to exactly `width` columns for the grid pane.
pub fn pad_cell(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    for (i, ch) in text.chars().enumerate() {
        if i == width {
            break;
        }
        out.push(ch);
    }
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

pub fn clipped_input(input: &str, total_width: usize, prefix_len: usize) -> (String, u16) {
    let max_len = total_width.saturating_sub(prefix_len + 1);
    if input.len() <= max_len {
        (input.to_string(), input.len() as u16)
    } else {
        let start = input.len() - max_len;
        let visible = &input[start..];
        (visible.to_string(), max_len as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_cell_pads_and_clips() {
        assert_eq!(pad_cell("ok", 5), "ok   ");
        assert_eq!(pad_cell("overflowing", 5), "overf");
        assert_eq!(pad_cell("", 3), "   ");
    }

    #[test]
    fn clipped_input_keeps_the_tail_visible() {
        let (visible, cursor) = clipped_input("short", 40, 2);
        assert_eq!(visible, "short");
        assert_eq!(cursor, 5);

        let long = "a".repeat(60);
        let (visible, cursor) = clipped_input(&long, 20, 2);
        assert_eq!(visible.len(), 17);
        assert_eq!(cursor, 17);
    }
}
