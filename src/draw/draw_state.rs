/// Per-frame render state of the container or of one area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawState {
    #[default]
    Normal,
    Disabled,
    Focus,
    HotLight,
}

impl DrawState {
    /// Container state: disabled, else focused when the host has input focus
    pub fn for_container(enabled: bool, has_focus: bool) -> Self {
        if !enabled {
            DrawState::Disabled
        } else if has_focus {
            DrawState::Focus
        } else {
            DrawState::Normal
        }
    }

    /// Area state, in priority order: disabled, focus, hot light, normal
    pub fn for_area(
        container_enabled: bool,
        area_enabled: bool,
        has_focus: bool,
        is_focused_area: bool,
        is_hot_area: bool,
    ) -> Self {
        if !container_enabled || !area_enabled {
            DrawState::Disabled
        } else if has_focus && is_focused_area {
            DrawState::Focus
        } else if is_hot_area {
            DrawState::HotLight
        } else {
            DrawState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_states() {
        assert_eq!(DrawState::for_container(false, true), DrawState::Disabled);
        assert_eq!(DrawState::for_container(true, true), DrawState::Focus);
        assert_eq!(DrawState::for_container(true, false), DrawState::Normal);
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        assert_eq!(
            DrawState::for_area(false, true, true, true, true),
            DrawState::Disabled
        );
        assert_eq!(
            DrawState::for_area(true, false, true, true, true),
            DrawState::Disabled
        );
    }

    #[test]
    fn test_focus_requires_host_focus() {
        assert_eq!(
            DrawState::for_area(true, true, true, true, true),
            DrawState::Focus
        );
        assert_eq!(
            DrawState::for_area(true, true, false, true, true),
            DrawState::HotLight
        );
        assert_eq!(
            DrawState::for_area(true, true, false, true, false),
            DrawState::Normal
        );
    }
}
