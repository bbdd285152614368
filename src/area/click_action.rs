use serde::Deserialize;

/// What happens when an area is clicked
///
/// Interactive hosts use `FireEvent` and `None`. `Navigate` and `PostBack`
/// are carried for markup hosts, which render them as links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    #[default]
    FireEvent,
    Navigate,
    PostBack,
    None,
}

impl ClickAction {
    /// True for every action except `None`
    pub fn is_actionable(&self) -> bool {
        *self != ClickAction::None
    }
}
