/// The five views of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Exercises,
    Routines,
    Users,
    Sessions,
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Exercises,
        Tab::Routines,
        Tab::Users,
        Tab::Sessions,
        Tab::Progress,
    ];

    /// Stable id, also used as the panel's DOM id.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Exercises => "exercises",
            Tab::Routines => "routines",
            Tab::Users => "users",
            Tab::Sessions => "sessions",
            Tab::Progress => "progress",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Exercises => "Ejercicios",
            Tab::Routines => "Rutinas",
            Tab::Users => "Usuarios",
            Tab::Sessions => "Sesiones",
            Tab::Progress => "Progreso",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// A request for one tab to load its list. `seq` grows with every
/// activation so re-activating the same tab is a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub tab: Tab,
    pub seq: u64,
}

/// Exactly one tab is active; every activation yields one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabController {
    active: Tab,
    pending: LoadRequest,
}

impl TabController {
    /// Start on `initial`, with its first load already requested.
    pub fn new(initial: Tab) -> Self {
        Self {
            active: initial,
            pending: LoadRequest {
                tab: initial,
                seq: 0,
            },
        }
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Make `tab` the only active tab and request its load.
    pub fn activate(&mut self, tab: Tab) -> LoadRequest {
        self.active = tab;
        self.pending = LoadRequest {
            tab,
            seq: self.pending.seq + 1,
        };
        self.pending
    }

    /// The most recent load request.
    pub fn load_request(&self) -> LoadRequest {
        self.pending
    }
}
