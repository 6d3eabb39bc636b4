use super::*;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const BOX_W: u32 = 16;
const BOX_H: u32 = 20;
const BOX_GAP: i32 = 6;
const BOX_Y: i32 = 18;
const OPTION_TOP: i32 = 16;
const OPTION_PITCH: i32 = 14;

pub(super) fn draw_password<D>(
    target: &mut D,
    digits: &PassCode,
    focus: usize,
    wrong: bool,
    palette: Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_title(target, "Enter Password", palette)?;

    let span = digits.len() as i32 * (BOX_W as i32 + BOX_GAP) - BOX_GAP;
    let first_x = (WIDTH as i32 - span) / 2;
    for (index, digit) in digits.iter().enumerate() {
        let x = first_x + index as i32 * (BOX_W as i32 + BOX_GAP);
        let focused = index == focus;
        let (style, ink) = if focused {
            (PrimitiveStyle::with_fill(palette.fg), palette.bg)
        } else {
            (PrimitiveStyle::with_stroke(palette.fg, 1), palette.fg)
        };
        Rectangle::new(Point::new(x, BOX_Y), Size::new(BOX_W, BOX_H))
            .into_styled(style)
            .draw(target)?;
        draw_text(
            target,
            DIGIT_LABELS[(*digit % 10) as usize],
            x + BOX_W as i32 / 2,
            BOX_Y + 3,
            large_style(ink),
            Alignment::Center,
        )?;
    }

    let footer = if wrong {
        "Wrong code"
    } else {
        "2x Enter to unlock"
    };
    draw_text(
        target,
        footer,
        WIDTH as i32 / 2,
        BOX_Y + BOX_H as i32 + 8,
        small_style(palette.fg),
        Alignment::Center,
    )
}

pub(super) fn draw_confirm<D>(
    target: &mut D,
    prompt: &str,
    options: &[&str],
    selected: usize,
    palette: Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_title(target, prompt, palette)?;

    for (index, option) in options.iter().enumerate() {
        let y = OPTION_TOP + index as i32 * OPTION_PITCH;
        let ink = if index == selected {
            fill_rect(target, 16, y - 2, 96, 13, palette.fg)?;
            palette.bg
        } else {
            palette.fg
        };
        draw_text(
            target,
            option,
            WIDTH as i32 / 2,
            y,
            small_style(ink),
            Alignment::Center,
        )?;
    }

    Ok(())
}
