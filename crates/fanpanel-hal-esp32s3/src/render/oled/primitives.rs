use super::*;

pub(super) const fn small_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&FONT_6X10, color)
}

pub(super) const fn large_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&FONT_9X15, color)
}

/// Text anchored at its top edge; `x` is the left, centre, or right edge
/// depending on `alignment`.
pub(super) fn draw_text<D>(
    target: &mut D,
    text: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'static, BinaryColor>,
    alignment: Alignment,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(text, Point::new(x, y), style, text_style).draw(target)?;
    Ok(())
}

pub(super) fn fill_rect<D>(
    target: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Centred title with a rule underneath.
pub(super) fn draw_title<D>(target: &mut D, title: &str, palette: Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let max_chars = (WIDTH as i32 / CHAR_W) as usize;
    draw_text(
        target,
        fit_chars(title, max_chars),
        WIDTH as i32 / 2,
        0,
        small_style(palette.fg),
        Alignment::Center,
    )?;
    Line::new(
        Point::new(0, TITLE_RULE_Y),
        Point::new(WIDTH as i32 - 1, TITLE_RULE_Y),
    )
    .into_styled(PrimitiveStyle::with_stroke(palette.fg, 1))
    .draw(target)
}

pub(super) fn fit_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Right-hand column text for a submenu row. Edited values are bracketed.
pub(super) fn format_value(value: RowValue<'_>, highlight: bool, out: &mut String<VALUE_BUF>) {
    out.clear();
    if highlight {
        let _ = out.push('[');
    }

    // Overflow only truncates the label.
    let _ = match value {
        RowValue::None | RowValue::Back => Ok(()),
        RowValue::Submenu { locked: true } => out.write_str("*"),
        RowValue::Submenu { locked: false } | RowValue::Action => out.write_str(">"),
        RowValue::Number { value, units } => write!(out, "{value}{units}"),
        RowValue::Choice(label) => out.write_str(label),
        RowValue::Reading { value, units } => write!(out, "{value:.1}{units}"),
        RowValue::Flag(true) => out.write_str("ON"),
        RowValue::Flag(false) => out.write_str("OFF"),
    };

    if highlight {
        let _ = out.push(']');
    }
}
