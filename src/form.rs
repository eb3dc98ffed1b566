//! Form state: the stars/planets toggles and their name inputs
//!
//! The two toggles are mutually exclusive. Checking one unchecks the other,
//! and each toggle owns an options panel that is only shown while it is checked.

/// One of the two toggles on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Stars,
    Planets,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Stars, Group::Planets];

    /// Singular label used in prompts ("star", "planet").
    pub fn label(self) -> &'static str {
        match self {
            Group::Stars => "star",
            Group::Planets => "planet",
        }
    }

    /// API path segment queried for this group.
    pub fn route(self) -> &'static str {
        match self {
            Group::Stars => "stars",
            Group::Planets => "planets",
        }
    }

    /// Toggle caption.
    pub fn title(self) -> &'static str {
        match self {
            Group::Stars => "Stars",
            Group::Planets => "Planets",
        }
    }

    /// Parse a CLI word ("star", "stars", "planet", ...).
    pub fn parse(word: &str) -> Option<Group> {
        match word.to_lowercase().as_str() {
            "star" | "stars" => Some(Group::Stars),
            "planet" | "planets" => Some(Group::Planets),
            _ => None,
        }
    }
}

/// Which toggle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    StarsActive,
    PlanetsActive,
}

impl Selection {
    pub fn group(self) -> Option<Group> {
        match self {
            Selection::None => None,
            Selection::StarsActive => Some(Group::Stars),
            Selection::PlanetsActive => Some(Group::Planets),
        }
    }
}

impl From<Option<Group>> for Selection {
    fn from(group: Option<Group>) -> Self {
        match group {
            None => Selection::None,
            Some(Group::Stars) => Selection::StarsActive,
            Some(Group::Planets) => Selection::PlanetsActive,
        }
    }
}

/// Current values of every control on the form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    selection: Selection,
    star_name: String,
    planet_name: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a change event from one of the toggles.
    pub fn toggle_changed(&mut self, group: Group, checked: bool) {
        let before = self.selection;

        self.selection = if checked {
            Selection::from(Some(group))
        } else if self.is_checked(group) {
            Selection::None
        } else {
            // Unchecking a toggle that wasn't checked changes nothing.
            self.selection
        };

        if before != self.selection {
            tracing::debug!("Form selection {:?} -> {:?}", before, self.selection);
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_checked(&self, group: Group) -> bool {
        self.selection.group() == Some(group)
    }

    /// The options panel of a group is shown only while its toggle is checked.
    pub fn panel_visible(&self, group: Group) -> bool {
        self.is_checked(group)
    }

    pub fn name(&self, group: Group) -> &str {
        match group {
            Group::Stars => &self.star_name,
            Group::Planets => &self.planet_name,
        }
    }

    pub fn set_name(&mut self, group: Group, value: impl Into<String>) {
        let slot = match group {
            Group::Stars => &mut self.star_name,
            Group::Planets => &mut self.planet_name,
        };
        *slot = value.into();
    }
}
