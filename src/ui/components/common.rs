use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, with a visual cursor when focused.
/// An empty field shows `placeholder`.
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    placeholder: &'a str,
    focused: bool,
    enabled: bool,
) -> Paragraph<'a> {
    let border_color = if !enabled {
        Color::DarkGray
    } else if focused {
        Color::Yellow
    } else {
        Color::Gray
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let cursor = if focused && enabled { "█" } else { "" };
    let (text, text_style) = if input_buffer.is_empty() {
        (format!("{}{}", cursor, placeholder), Style::default().fg(Color::DarkGray))
    } else if focused && enabled {
        (format!("{}{}", input_buffer, cursor), Style::default().fg(Color::White))
    } else {
        (input_buffer.to_string(), Style::default().fg(if enabled { Color::White } else { Color::DarkGray }))
    };

    Paragraph::new(text).block(input_block).style(text_style)
}
