//! Menu bar definition (File and Git menus)

/// One of the two drop-down menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    File,
    Git,
}

/// A menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    OpenFile,
    SaveFile,
    Exit,
    Commit,
    Push,
    Pull,
    ConnectRemote,
}

/// A row in a drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

const FILE_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Item(MenuItem::OpenFile),
    MenuEntry::Item(MenuItem::SaveFile),
    MenuEntry::Separator,
    MenuEntry::Item(MenuItem::Exit),
];

const GIT_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Item(MenuItem::Commit),
    MenuEntry::Item(MenuItem::Push),
    MenuEntry::Item(MenuItem::Pull),
    MenuEntry::Separator,
    MenuEntry::Item(MenuItem::ConnectRemote),
];

/// Menus in menu-bar order
pub const MENU_BAR: [MenuKind; 2] = [MenuKind::File, MenuKind::Git];

impl MenuKind {
    pub fn title(&self) -> &'static str {
        match self {
            MenuKind::File => "File",
            MenuKind::Git => "Git",
        }
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        match self {
            MenuKind::File => FILE_ENTRIES,
            MenuKind::Git => GIT_ENTRIES,
        }
    }

    /// The menu to the right (wraps)
    pub fn next(self) -> Self {
        match self {
            MenuKind::File => MenuKind::Git,
            MenuKind::Git => MenuKind::File,
        }
    }

    /// The menu to the left (wraps)
    pub fn prev(self) -> Self {
        // Two menus: left and right are the same neighbour
        self.next()
    }

    /// Item at `index`, None for separators and out-of-range indices
    pub fn item_at(&self, index: usize) -> Option<MenuItem> {
        match self.entries().get(index) {
            Some(MenuEntry::Item(item)) => Some(*item),
            _ => None,
        }
    }

    /// Next selectable index below `index`, wrapping and skipping separators
    pub fn next_index(&self, index: usize) -> usize {
        self.step(index, 1)
    }

    /// Next selectable index above `index`, wrapping and skipping separators
    pub fn prev_index(&self, index: usize) -> usize {
        self.step(index, self.entries().len() - 1)
    }

    fn step(&self, index: usize, by: usize) -> usize {
        let len = self.entries().len();
        let mut i = index % len;
        for _ in 0..len {
            i = (i + by) % len;
            if self.item_at(i).is_some() {
                return i;
            }
        }
        index
    }
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::OpenFile => "Open File",
            MenuItem::SaveFile => "Save File",
            MenuItem::Exit => "Exit",
            MenuItem::Commit => "Commit",
            MenuItem::Push => "Push",
            MenuItem::Pull => "Pull",
            MenuItem::ConnectRemote => "Connect to Remote",
        }
    }

    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            MenuItem::OpenFile => Some("Ctrl+O"),
            MenuItem::SaveFile => Some("Ctrl+S"),
            MenuItem::Exit => Some("Ctrl+Q"),
            _ => None,
        }
    }
}
