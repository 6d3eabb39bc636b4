use super::*;

/// Blade tip offset from the hub per frame; four frames make a quarter turn.
const BLADE_TIPS: [(i32, i32); 4] = [(6, 0), (6, 2), (4, 4), (2, 6)];

pub(super) fn draw_sprite<D>(
    target: &mut D,
    sprite: &Sprite,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match sprite.sheet {
        SpriteSheet::Fan => draw_fan(target, sprite, color),
    }
}

fn draw_fan<D>(target: &mut D, sprite: &Sprite, color: BinaryColor) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = sprite.width.min(sprite.height) as i32;
    let top_left = Point::new(sprite.x as i32, sprite.y as i32);
    let hub = top_left + Point::new(size / 2, size / 2);

    Circle::new(top_left, size as u32)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(target)?;

    let (dx, dy) = BLADE_TIPS[sprite.frame() as usize % BLADE_TIPS.len()];
    let blade = PrimitiveStyle::with_stroke(color, 2);
    Line::new(hub - Point::new(dx, dy), hub + Point::new(dx, dy))
        .into_styled(blade)
        .draw(target)?;
    Line::new(hub - Point::new(-dy, dx), hub + Point::new(-dy, dx))
        .into_styled(blade)
        .draw(target)?;

    Circle::with_center(hub, 3)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}
