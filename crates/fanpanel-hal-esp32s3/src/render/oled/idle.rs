use super::*;

const LINE_PITCH: i32 = 11;
const BADGE_Y: i32 = 54;
const BADGE_W: u32 = 11;
const BADGE_H: u32 = 10;
const BADGE_PITCH: i32 = 13;

pub(super) fn draw_idle<D>(
    target: &mut D,
    telemetry: &Telemetry,
    sprites: &[Sprite],
    palette: Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = small_style(palette.fg);
    let mut line = String::<VALUE_BUF>::new();
    let mut y = 0;

    let _ = write!(line, "T {:.1}C", telemetry.temperature_c);
    draw_text(target, &line, 0, y, style, Alignment::Left)?;

    y += LINE_PITCH;
    line.clear();
    let _ = write!(line, "V {:.1}V", telemetry.supply_v);
    draw_text(target, &line, 0, y, style, Alignment::Left)?;

    for (index, fan) in telemetry.fans.iter().enumerate() {
        y += LINE_PITCH;
        line.clear();
        let _ = write!(line, "F{} {:.0}mA", index + 1, fan.current_ma);
        draw_text(target, &line, 0, y, style, Alignment::Left)?;
    }

    y += LINE_PITCH;
    let light = if telemetry.light_ok {
        "Light OK"
    } else {
        "Light LOW"
    };
    draw_text(target, light, 0, y, style, Alignment::Left)?;

    for (slot, kind) in AlarmKind::ALL.iter().enumerate() {
        if !telemetry.alarms.is_active(*kind) {
            continue;
        }
        let x = slot as i32 * BADGE_PITCH;
        fill_rect(target, x, BADGE_Y, BADGE_W, BADGE_H, palette.fg)?;
        draw_text(
            target,
            kind.badge(),
            x + BADGE_W as i32 / 2,
            BADGE_Y,
            small_style(palette.bg),
            Alignment::Center,
        )?;
    }

    for sprite in sprites.iter().filter(|sprite| sprite.is_visible()) {
        draw_sprite(target, sprite, palette.fg)?;
    }

    Ok(())
}
