use super::*;

const TILE_X: i32 = 14;
const TILE_Y: i32 = 17;
const TILE_W: u32 = 100;
const TILE_H: u32 = 28;
const DOT_Y: i32 = 55;
const DOT_SPACING: i32 = 9;
const DOT_DIAMETER: u32 = 5;

pub(super) fn draw_carousel<D>(
    target: &mut D,
    title: &str,
    tiles: &[&str],
    selected: usize,
    palette: Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_title(target, title, palette)?;
    let Some(label) = tiles.get(selected) else {
        return Ok(());
    };

    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(TILE_X, TILE_Y), Size::new(TILE_W, TILE_H)),
        Size::new(4, 4),
    )
    .into_styled(PrimitiveStyle::with_stroke(palette.fg, 1))
    .draw(target)?;
    draw_text(
        target,
        fit_chars(label, (TILE_W / 9) as usize),
        WIDTH as i32 / 2,
        TILE_Y + 7,
        large_style(palette.fg),
        Alignment::Center,
    )?;

    let arrow_y = TILE_Y + 9;
    if selected > 0 {
        draw_text(target, "<", 3, arrow_y, small_style(palette.fg), Alignment::Left)?;
    }
    if selected + 1 < tiles.len() {
        draw_text(
            target,
            ">",
            WIDTH as i32 - 3,
            arrow_y,
            small_style(palette.fg),
            Alignment::Right,
        )?;
    }

    let span = tiles.len() as i32 * DOT_SPACING;
    let first_x = (WIDTH as i32 - span) / 2 + DOT_SPACING / 2;
    for index in 0..tiles.len() {
        let center = Point::new(first_x + index as i32 * DOT_SPACING, DOT_Y);
        let style = if index == selected {
            PrimitiveStyle::with_fill(palette.fg)
        } else {
            PrimitiveStyle::with_stroke(palette.fg, 1)
        };
        Circle::with_center(center, DOT_DIAMETER)
            .into_styled(style)
            .draw(target)?;
    }

    Ok(())
}

pub(super) fn draw_submenu<D>(
    target: &mut D,
    title: &str,
    rows: &[MenuRowView<'_>],
    cursor: usize,
    editing: bool,
    palette: Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_title(target, title, palette)?;
    if rows.is_empty() {
        return Ok(());
    }

    let start = cursor.saturating_sub(ROWS_VISIBLE.saturating_sub(1));
    let end = core::cmp::min(rows.len(), start + ROWS_VISIBLE);
    let columns = (WIDTH as i32 / CHAR_W) as usize;
    let mut value = String::<VALUE_BUF>::new();

    for (slot, index) in (start..end).enumerate() {
        let row = rows[index];
        let y = LIST_TOP + slot as i32 * ROW_HEIGHT;
        let selected = index == cursor;
        let color = if selected {
            fill_rect(target, 0, y, WIDTH, ROW_HEIGHT as u32, palette.fg)?;
            palette.bg
        } else {
            palette.fg
        };

        format_value(row.value, selected && editing, &mut value);
        let label_room = columns.saturating_sub(value.chars().count() + 1);
        draw_text(
            target,
            fit_chars(row.label, label_room),
            2,
            y,
            small_style(color),
            Alignment::Left,
        )?;
        if !value.is_empty() {
            draw_text(
                target,
                &value,
                WIDTH as i32 - 2,
                y,
                small_style(color),
                Alignment::Right,
            )?;
        }
    }

    Ok(())
}
