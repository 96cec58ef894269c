//! Screens
//!
//! The four screens and the hash paths that select them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    CreateTodo,
    Assignees,
    Todos,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::CreateTodo, Screen::Assignees, Screen::Todos];

    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::CreateTodo => "/createTodos",
            Screen::Assignees => "/assignees",
            Screen::Todos => "/todos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Übersicht",
            Screen::CreateTodo => "Neues Todo",
            Screen::Assignees => "Assignees",
            Screen::Todos => "Todos",
        }
    }

    /// Resolve a location hash such as `#/todos`. Empty means home.
    pub fn from_hash(hash: &str) -> Option<Screen> {
        let path = hash.trim_start_matches('#');
        let path = if path.is_empty() { "/" } else { path };
        Screen::ALL.into_iter().find(|s| s.path() == path)
    }

    pub fn hash(self) -> String {
        format!("#{}", self.path())
    }
}
