use heapless::Vec;
use log::debug;

use super::{Guard, MenuAction, MenuNode, MenuPage};
use crate::{
    queue::Command,
    settings::{ChoiceField, NumericField, Settings},
};

/// Deepest submenu level below the root.
pub const MAX_DEPTH: usize = 6;
const STACK_CAPACITY: usize = MAX_DEPTH + 1;

#[derive(Clone, Copy, Debug)]
struct Frame {
    page: &'static MenuPage,
    cursor: u8,
}

/// Value edit in progress on the focused row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditState {
    /// Writes straight into the staged record on every step.
    Numeric {
        field: NumericField,
        min: i32,
        max: i32,
        step: i32,
    },
    /// Holds a pending option that is committed on Enter only.
    Choice { field: ChoiceField, option: u8 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkOutcome {
    Moved,
    Entered,
    Exited,
    EditStarted,
    ValueChanged,
    EditFinished,
    /// Guarded page refused because the session is locked.
    Blocked,
    Action(MenuAction),
    Ignored,
}

/// Cursor stack over a static [`MenuPage`] tree.
///
/// The root frame always stays on the stack; `Back` at the root is ignored
/// so leaving the menu is left to the caller.
#[derive(Debug)]
pub struct MenuWalker {
    root: &'static MenuPage,
    stack: Vec<Frame, STACK_CAPACITY>,
    edit: Option<EditState>,
}

impl MenuWalker {
    pub fn new(root: &'static MenuPage) -> Self {
        let mut walker = Self {
            root,
            stack: Vec::new(),
            edit: None,
        };
        walker.reset();
        walker
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        let _ = self.stack.push(Frame {
            page: self.root,
            cursor: 0,
        });
        self.edit = None;
    }

    pub const fn root(&self) -> &'static MenuPage {
        self.root
    }

    /// Number of submenus entered below the root.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    pub fn at_root(&self) -> bool {
        self.depth() == 0
    }

    pub fn current_page(&self) -> &'static MenuPage {
        self.top().page
    }

    pub fn cursor(&self) -> usize {
        self.top().cursor as usize
    }

    pub fn focused(&self) -> Option<&'static MenuNode> {
        let frame = self.top();
        frame.page.children.get(frame.cursor as usize)
    }

    pub const fn edit_state(&self) -> Option<EditState> {
        self.edit
    }

    pub const fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub const fn is_editing_numeric(&self) -> bool {
        matches!(self.edit, Some(EditState::Numeric { .. }))
    }

    /// Jump straight into the root child at `index` (clamped), as if it had
    /// been focused and activated.
    pub fn enter_root_child(
        &mut self,
        index: usize,
        settings: &Settings,
        unlocked: bool,
    ) -> WalkOutcome {
        self.reset();
        let last = self.root.children.len().saturating_sub(1);
        if let Some(frame) = self.stack.last_mut() {
            frame.cursor = index.min(last) as u8;
        }
        self.activate(settings, unlocked)
    }

    /// Feed one command. Numeric edits write into `settings` immediately.
    pub fn apply(
        &mut self,
        command: Command,
        settings: &mut Settings,
        unlocked: bool,
    ) -> WalkOutcome {
        if let Some(edit) = self.edit {
            return self.apply_edit(edit, command, settings);
        }

        match command {
            Command::Up => self.move_cursor(true),
            Command::Down => self.move_cursor(false),
            Command::Enter => self.activate(settings, unlocked),
            Command::Back => self.pop(),
        }
    }

    fn top(&self) -> Frame {
        self.stack.last().copied().unwrap_or(Frame {
            page: self.root,
            cursor: 0,
        })
    }

    fn move_cursor(&mut self, up: bool) -> WalkOutcome {
        let Some(frame) = self.stack.last_mut() else {
            return WalkOutcome::Ignored;
        };
        let last = frame.page.children.len().saturating_sub(1) as u8;
        let next = if up {
            frame.cursor.saturating_sub(1)
        } else {
            frame.cursor.saturating_add(1).min(last)
        };
        if next == frame.cursor {
            return WalkOutcome::Ignored;
        }
        frame.cursor = next;
        WalkOutcome::Moved
    }

    fn activate(&mut self, settings: &Settings, unlocked: bool) -> WalkOutcome {
        let Some(node) = self.focused() else {
            return WalkOutcome::Ignored;
        };

        match node {
            MenuNode::Submenu(page) => {
                if page.guard == Guard::Password && !unlocked {
                    debug!("ui-menu: locked page={}", page.label);
                    return WalkOutcome::Blocked;
                }
                if self.stack.push(Frame { page, cursor: 0 }).is_err() {
                    debug!("ui-menu: depth limit page={}", page.label);
                    return WalkOutcome::Ignored;
                }
                debug!("ui-menu: enter page={} depth={}", page.label, self.depth());
                WalkOutcome::Entered
            }
            MenuNode::Field {
                field,
                min,
                max,
                step,
                ..
            } => {
                self.edit = Some(EditState::Numeric {
                    field: *field,
                    min: *min,
                    max: *max,
                    step: *step,
                });
                WalkOutcome::EditStarted
            }
            MenuNode::Choice { field, .. } => {
                self.edit = Some(EditState::Choice {
                    field: *field,
                    option: settings.choice(*field),
                });
                WalkOutcome::EditStarted
            }
            MenuNode::Action { action, .. } => WalkOutcome::Action(*action),
            MenuNode::Back => self.pop(),
            MenuNode::Reading { .. } | MenuNode::Info { .. } => WalkOutcome::Ignored,
        }
    }

    fn pop(&mut self) -> WalkOutcome {
        if self.stack.len() <= 1 {
            return WalkOutcome::Ignored;
        }
        self.stack.pop();
        WalkOutcome::Exited
    }

    fn apply_edit(
        &mut self,
        edit: EditState,
        command: Command,
        settings: &mut Settings,
    ) -> WalkOutcome {
        match edit {
            EditState::Numeric {
                field,
                min,
                max,
                step,
            } => match command {
                Command::Up | Command::Down => {
                    let current = settings.numeric(field);
                    let next = if command == Command::Up {
                        current.saturating_add(step)
                    } else {
                        current.saturating_sub(step)
                    }
                    .clamp(min, max);
                    if next == current {
                        return WalkOutcome::Ignored;
                    }
                    settings.set_numeric(field, next);
                    WalkOutcome::ValueChanged
                }
                Command::Enter | Command::Back => {
                    self.edit = None;
                    WalkOutcome::EditFinished
                }
            },
            EditState::Choice { field, option } => match command {
                Command::Up | Command::Down => {
                    let last = field.option_count().saturating_sub(1);
                    let next = if command == Command::Up {
                        option.saturating_sub(1)
                    } else {
                        option.saturating_add(1).min(last)
                    };
                    if next == option {
                        return WalkOutcome::Ignored;
                    }
                    self.edit = Some(EditState::Choice {
                        field,
                        option: next,
                    });
                    WalkOutcome::Moved
                }
                Command::Enter => {
                    settings.set_choice(field, option);
                    self.edit = None;
                    WalkOutcome::EditFinished
                }
                Command::Back => {
                    self.edit = None;
                    WalkOutcome::EditFinished
                }
            },
        }
    }
}
