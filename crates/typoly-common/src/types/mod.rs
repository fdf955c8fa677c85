mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_right_edge() {
        let r = Rect::new(100.0, 0.0, 250.0, 40.0);
        assert!((r.right() - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn pane_role_display() {
        assert_eq!(PaneRole::Editor.to_string(), "editor");
        assert_eq!(PaneRole::Snapshot.to_string(), "snapshot");
    }

    #[test]
    fn pane_role_serde_lowercase() {
        let json = serde_json::to_string(&PaneRole::Minimap).unwrap();
        assert_eq!(json, "\"minimap\"");
        let back: PaneRole = serde_json::from_str("\"preview\"").unwrap();
        assert_eq!(back, PaneRole::Preview);
    }

    #[test]
    fn only_editor_is_not_toggleable() {
        assert!(!PaneRole::Editor.is_toggleable());
        assert!(PaneRole::Preview.is_toggleable());
        assert!(PaneRole::Snapshot.is_toggleable());
        assert!(PaneRole::Minimap.is_toggleable());
    }
}
