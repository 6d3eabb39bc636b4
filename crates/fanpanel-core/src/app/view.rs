impl<IN, TS> HmiApp<IN, TS>
where
    IN: InputProvider,
    TS: TelemetrySource,
{
    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        match self.overlay {
            Overlay::PasswordPrompt(gate) => {
                return f(Screen::Password {
                    digits: gate.digits(),
                    focus: gate.focus(),
                    wrong: gate.is_wrong(),
                });
            }
            Overlay::ConfirmDialog { selected } => {
                return f(Screen::Confirm {
                    prompt: CONFIRM_PROMPT,
                    options: &CONFIRM_LABELS,
                    selected: selected.index(),
                });
            }
            Overlay::None => {}
        }

        match self.mode {
            UiMode::Idle => f(Screen::Idle {
                telemetry: &self.telemetry,
                sprites: self.animator.sprites(),
            }),
            UiMode::MenuRoot => {
                let root = self.walker.root();
                let mut tiles = [""; MAX_TILES];
                let mut count = 0usize;
                for (slot, node) in tiles.iter_mut().zip(root.children.iter()) {
                    *slot = node.label();
                    count += 1;
                }

                f(Screen::Carousel {
                    title: root.label,
                    tiles: &tiles[..count],
                    selected: self.carousel_index().min(count.saturating_sub(1)),
                })
            }
            UiMode::Submenu { .. } => {
                let page = self.walker.current_page();
                let mut rows = [MenuRowView::default(); MAX_ROWS];
                let mut count = 0usize;
                for (index, (slot, node)) in rows.iter_mut().zip(page.children.iter()).enumerate() {
                    *slot = MenuRowView {
                        label: node.label(),
                        value: self.row_value(node, index),
                    };
                    count += 1;
                }

                f(Screen::Submenu {
                    title: page.label,
                    rows: &rows[..count],
                    cursor: self.walker.cursor().min(count.saturating_sub(1)),
                    editing: self.walker.is_editing(),
                })
            }
        }
    }

    fn row_value(&self, node: &'static MenuNode, index: usize) -> RowValue<'static> {
        let staged = self.settings.staged();
        match node {
            MenuNode::Submenu(page) => RowValue::Submenu {
                locked: page.guard == Guard::Password && !self.unlocked,
            },
            MenuNode::Field { field, units, .. } => RowValue::Number {
                value: staged.numeric(*field),
                units,
            },
            MenuNode::Choice { field, .. } => {
                let pending = match self.walker.edit_state() {
                    Some(EditState::Choice {
                        field: edited,
                        option,
                    }) if edited == *field && index == self.walker.cursor() => option,
                    _ => staged.choice(*field),
                };
                RowValue::Choice(field.label(pending))
            }
            MenuNode::Reading { source, units, .. } => match self.telemetry.reading(*source) {
                ReadingValue::Number(value) => RowValue::Reading { value, units },
                ReadingValue::Flag(active) => RowValue::Flag(active),
            },
            MenuNode::Info { .. } => RowValue::None,
            MenuNode::Action { .. } => RowValue::Action,
            MenuNode::Back => RowValue::Back,
        }
    }
}
